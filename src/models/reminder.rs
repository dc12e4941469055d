//! BirthdayReminder model: one upcoming-birthday hit.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Serialize a date in the book's DD.MM.YYYY display format.
fn serialize_dmy<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format("%d.%m.%Y").to_string())
}

/// One entry in the upcoming-birthdays report.
///
/// `congratulation_date` is the date the greeting should be sent: the next
/// occurrence of the contact's birthday, shifted off Saturday/Sunday to the
/// following Monday.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// Contact name, as stored in the book
    pub name: String,

    /// When to congratulate, weekend-adjusted
    #[serde(serialize_with = "serialize_dmy")]
    pub congratulation_date: NaiveDate,
}

impl BirthdayReminder {
    /// The congratulation date formatted as DD.MM.YYYY.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format("%d.%m.%Y").to_string()
    }
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_display() {
        let reminder = BirthdayReminder {
            name: "Alice".to_string(),
            congratulation_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        };
        assert_eq!(reminder.to_string(), "Alice: 12.06.2024");
    }

    #[test]
    fn test_reminder_serializes_date_as_dmy() {
        let reminder = BirthdayReminder {
            name: "Alice".to_string(),
            congratulation_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        };
        let json = serde_json::to_string(&reminder).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","congratulation_date":"12.06.2024"}"#
        );
    }
}
