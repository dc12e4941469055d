//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time. The stored
/// string is kept verbatim: validation only checks that it is not empty or
/// whitespace-only, it never trims.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactName;
///
/// let name = ContactName::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty
    /// or consists only of whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_rejects_whitespace_only() {
        assert_eq!(ContactName::new("   "), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_preserves_surrounding_whitespace() {
        // Validation checks for blankness but never trims.
        let name = ContactName::new(" Bob ").unwrap();
        assert_eq!(name.as_str(), " Bob ");
    }

    #[test]
    fn test_name_display() {
        let name = ContactName::new("Alice").unwrap();
        assert_eq!(format!("{}", name), "Alice");
    }

    #[test]
    fn test_name_serialization() {
        let name = ContactName::new("Alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Alice\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
