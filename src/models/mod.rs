//! Data models for the address book.

pub mod record;
pub mod reminder;

pub use record::Record;
pub use reminder::BirthdayReminder;
