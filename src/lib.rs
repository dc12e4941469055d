//! In-memory address book with validated contacts and birthday reminders.
//!
//! The library is the core behind a small console assistant bot: it stores
//! named records, each holding a validated set of phone numbers and an
//! optional birthday, and answers queries such as "who has a birthday in the
//! next week". The binary in `src/main.rs` is the thin read-eval-print loop
//! on top.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: `Record` (one contact) and `BirthdayReminder`
//! - **book**: `AddressBook`, the keyed record collection and the
//!   birthday-window query
//! - **commands**: dispatcher-facing handlers returning display strings
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//!
//! Everything is synchronous and in-process; there is no persistence and no
//! internal locking. Concurrent reuse requires one external lock around the
//! whole [`AddressBook`].

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddOutcome, AddressBook, UPCOMING_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::{BirthdayReminder, Record};
