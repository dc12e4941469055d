//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains only whitespace.
    EmptyName,

    /// The provided phone number contains a non-digit character.
    PhoneNotDigits(String),

    /// The provided phone number has the wrong number of digits.
    PhoneWrongLength(usize),

    /// The provided birthday does not parse as a real DD.MM.YYYY date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::PhoneNotDigits(_) => write!(f, "Phone number must contain only digits"),
            Self::PhoneWrongLength(_) => {
                write!(f, "Phone number must contain exactly 10 digits")
            }
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
