//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`]; the types here wrap
//! them with record- and dispatcher-level context.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a record or the book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone value failed validation while being added to a record
    #[error("cannot add phone: {0}")]
    AddPhone(#[source] ValidationError),

    /// A birthday value failed validation while being added to a record
    #[error("cannot add birthday: {0}")]
    AddBirthday(#[source] ValidationError),

    /// A field value failed validation with no extra context
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors surfaced to the command dispatcher.
///
/// Every variant renders as the exact line the bot prints back to the user;
/// none of them is fatal, the REPL keeps running.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was given too few arguments
    #[error("{0}")]
    Usage(&'static str),

    /// No record exists under the requested name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The record exists but does not hold the requested phone
    #[error("Phone '{phone}' not found for contact '{name}'.")]
    PhoneNotFound { name: String, phone: String },

    /// A book operation failed underneath the handler
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for dispatcher-facing handler results
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
