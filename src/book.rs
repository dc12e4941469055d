//! AddressBook: the keyed collection of records plus the birthday-window query.

use crate::error::BookResult;
use crate::models::{BirthdayReminder, Record};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Inclusive lookahead, in days, for the upcoming-birthdays report.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Outcome of the composite add-contact flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created for the name
    Added,
    /// The phone was appended to an already existing record
    Updated,
}

/// In-memory collection of contact records, keyed by name.
///
/// The map is composed, never exposed: all mutation goes through named
/// methods, and the key always equals the record's name text. Iteration
/// follows insertion order, which is also the order of the
/// upcoming-birthdays report.
///
/// State lives only for the process lifetime; there is no persistence and
/// no internal locking. Concurrent reuse needs one external lock around the
/// whole book, since phone edits and the birthday query both touch record
/// state.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, unconditionally.
    ///
    /// This is the raw primitive: an existing record under the same name is
    /// overwritten (keeping its original position). The merge-by-appending
    /// behavior lives in [`AddressBook::add_contact`]; the two are kept as
    /// distinct operations on purpose.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        } else {
            debug!(name = %key, "overwrote existing record");
        }
    }

    /// The composite add-contact flow: find-or-create, then append the phone.
    ///
    /// If a record already exists under `name`, the phone goes onto that
    /// record and the book size does not change. Otherwise a fresh record is
    /// created first. Note that when the phone fails validation for a fresh
    /// name, the empty record stays in the book.
    ///
    /// # Errors
    ///
    /// Returns the name or phone validation failure, re-wrapped with context
    /// for the phone.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddOutcome> {
        let outcome = if self.records.contains_key(name) {
            AddOutcome::Updated
        } else {
            self.add_record(Record::new(name)?);
            AddOutcome::Added
        };
        if let Some(record) = self.records.get_mut(name) {
            record.add_phone(phone)?;
        }
        debug!(name, ?outcome, "added contact phone");
        Ok(outcome)
    }

    /// Look up a record by name. Absence is `None`, never an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record under `name`, reporting whether anything was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
            debug!(name, "deleted record");
            true
        } else {
            false
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts whose birthday falls within the next week, with the date on
    /// which to congratulate them.
    ///
    /// For every record with a birthday, the next occurrence of its day and
    /// month on or after `today` is computed (rolling over to next year when
    /// this year's date has already passed). The record is included when the
    /// occurrence is at most [`UPCOMING_WINDOW_DAYS`] days away, both bounds
    /// inclusive, so a birthday today counts. The congratulation date is the
    /// occurrence shifted off Saturday (+2) or Sunday (+1) to the following
    /// Monday; the shift never affects window membership.
    ///
    /// Results follow the book's insertion order, not chronological order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<BirthdayReminder> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(occurrence) = next_occurrence(birthday.date(), today) else {
                // Feb 29 with no occurrence in this or next year.
                continue;
            };

            let days_until = (occurrence - today).num_days();
            if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                continue;
            }

            upcoming.push(BirthdayReminder {
                name: record.name().as_str().to_string(),
                congratulation_date: shift_off_weekend(occurrence),
            });
        }

        debug!(count = upcoming.len(), %today, "computed upcoming birthdays");
        upcoming
    }
}

/// Next occurrence of `birthday`'s day and month on or after `today`.
///
/// Returns `None` when the day/month does not exist in this year or the
/// next (a Feb 29 birthday in consecutive non-leap years).
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    match birthday.with_year(today.year()) {
        Some(date) if date >= today => Some(date),
        _ => birthday.with_year(today.year() + 1),
    }
}

/// Shift Saturday and Sunday dates forward to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Address book is empty");
        }
        let lines: Vec<String> = self.iter().map(|record| record.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
