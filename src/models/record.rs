//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one name, an ordered list of phones, an optional birthday.
///
/// The name is validated once at construction and never changes afterwards;
/// there is no rename operation. Phones keep insertion order and the model
/// does not prevent duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name, no phones, and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// The list is left unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `BookError::AddPhone` wrapping the validation failure.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone).map_err(BookError::AddPhone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first stored phone whose text equals `phone`.
    ///
    /// Absence is a normal outcome here, not an error.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first stored phone matching `phone`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone matching `old_phone` with `new_phone`.
    ///
    /// Best-effort contract: returns `false` and leaves the record untouched
    /// when `old_phone` is absent or `new_phone` fails validation; the
    /// validation error is deliberately not surfaced. Returns `true` after
    /// replacing exactly the one matched phone.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> bool {
        let Some(index) = self.phones.iter().position(|p| p.as_str() == old_phone) else {
            return false;
        };
        match PhoneNumber::new(new_phone) {
            Ok(phone) => {
                self.phones[index] = phone;
                true
            }
            Err(_) => false,
        }
    }

    /// Validate `birthday` and set it, replacing any prior one.
    ///
    /// The prior birthday, if any, is left unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `BookError::AddBirthday` wrapping the validation failure.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        let birthday = Birthday::new(birthday).map_err(BookError::AddBirthday)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// All phones joined with "; " for display.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
