//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Two-digit day, two-digit month, four-digit year, literal dots.
static BIRTHDAY_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A type-safe wrapper for birthday dates.
///
/// Validated at construction time against the `DD.MM.YYYY` format and
/// against the calendar (30.02 or month 13 are rejected). The original
/// string is stored verbatim alongside the parsed date, so `as_str`
/// round-trips input exactly while [`Birthday::date`] gives a
/// [`NaiveDate`] for calendar arithmetic.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("24.08.1991").unwrap();
/// assert_eq!(birthday.as_str(), "24.08.1991");
/// assert_eq!(birthday.date().to_string(), "1991-08-24");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating format and calendar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not
    /// `DD.MM.YYYY` or does not denote a real calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_FORMAT.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        let date = NaiveDate::parse_from_str(&raw, "%d.%m.%Y")
            .map_err(|_| ValidationError::InvalidBirthday(raw.clone()))?;

        Ok(Self { raw, date })
    }

    /// Get the birthday as the original `DD.MM.YYYY` string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01.01.2000").unwrap();
        assert_eq!(birthday.as_str(), "01.01.2000");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        for bad in ["2000-01-01", "1.1.2000", "01/01/2000", "01.01.00", "", "birthday"] {
            assert!(Birthday::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("01.13.2020").is_err());
        assert!(Birthday::new("32.01.2020").is_err());
        assert!(Birthday::new("00.01.2020").is_err());
    }

    #[test]
    fn test_birthday_leap_day() {
        // 2020 was a leap year, 2021 was not.
        assert!(Birthday::new("29.02.2020").is_ok());
        assert!(Birthday::new("29.02.2021").is_err());
    }

    #[test]
    fn test_birthday_round_trips_original_string() {
        let birthday = Birthday::new("24.08.1991").unwrap();
        assert_eq!(birthday.as_str(), "24.08.1991");
        assert_eq!(birthday.to_string(), "24.08.1991");
        assert_eq!(birthday.into_inner(), "24.08.1991");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("24.08.1991").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"24.08.1991\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"29.02.2021\"");
        assert!(result.is_err());
    }
}
