//! Dispatcher-facing command handlers.
//!
//! Each handler takes the pre-split argument list and the book, and returns
//! either the line to print or a typed failure whose `Display` text is the
//! line to print. Tokenizing and the command-name-to-handler mapping live in
//! the binary; no logic beyond that belongs there.

use crate::book::{AddOutcome, AddressBook};
use crate::error::{CommandError, CommandResult};
use chrono::NaiveDate;
use tracing::debug;

/// `add <name> <phone>` — create a contact or append a phone to an existing one.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::Usage("Give me name and phone please."));
    }
    let (name, phone) = (args[0], args[1]);

    match book.add_contact(name, phone)? {
        AddOutcome::Added => Ok("Contact added.".to_string()),
        AddOutcome::Updated => Ok("Contact updated.".to_string()),
    }
}

/// `change <name> <old> <new>` — replace one phone on an existing contact.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult {
    if args.len() < 3 {
        return Err(CommandError::Usage(
            "Give me name, old phone and new phone please.",
        ));
    }
    let (name, old_phone, new_phone) = (args[0], args[1], args[2]);

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    if record.edit_phone(old_phone, new_phone) {
        Ok("Contact updated.".to_string())
    } else {
        // Covers both an absent old phone and an invalid new one.
        Err(CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: old_phone.to_string(),
        })
    }
}

/// `phone <name>` — list a contact's phone numbers.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::Usage("Enter the argument for the command"));
    }
    let name = args[0];

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    if record.phones().is_empty() {
        Ok(format!("Contact '{name}' has no phone numbers."))
    } else {
        Ok(format!("{name}: {}", record.phones_joined()))
    }
}

/// `all` — one line per contact, insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    let lines: Vec<String> = book
        .iter()
        .map(|record| {
            let phones = if record.phones().is_empty() {
                "no phones".to_string()
            } else {
                record.phones_joined()
            };
            match record.birthday() {
                Some(birthday) => {
                    format!("{}: {}, birthday: {}", record.name(), phones, birthday)
                }
                None => format!("{}: {}", record.name(), phones),
            }
        })
        .collect();

    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` — set a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::Usage("Give me name and birthday please."));
    }
    let (name, birthday) = (args[0], args[1]);

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    debug!(name, birthday, "birthday set");
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>` — show a contact's birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::Usage("Enter the argument for the command"));
    }
    let name = args[0];

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{name}: {birthday}")),
        None => Ok(format!("Contact '{name}' has no birthday set.")),
    }
}

/// `birthdays` — contacts to congratulate within the next week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }

    let lines: Vec<String> = upcoming.iter().map(|r| r.to_string()).collect();
    Ok(lines.join("\n"))
}
