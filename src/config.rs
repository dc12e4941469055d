//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present but never required.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level / filter directive (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOOK_LOG_LEVEL`: tracing filter directive (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `BOOK_LOG_LEVEL` is not a
    /// valid tracing filter directive.
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if it exists, but don't fail if it doesn't.
        dotenvy::dotenv().ok();

        let log_level = env::var("BOOK_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        EnvFilter::try_new(&log_level).map_err(|e| ConfigError::InvalidValue {
            var: "BOOK_LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "error".to_string(),
        }
    }
}
