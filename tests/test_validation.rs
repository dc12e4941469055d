//! Validation rules for the three field value objects.
//!
//! These pin the exact acceptance conditions: a phone is 10 ASCII digits,
//! a birthday is a real DD.MM.YYYY date, a name is anything non-blank.

use address_book::{Birthday, ContactName, PhoneNumber, ValidationError};

#[test]
fn phone_succeeds_iff_ten_digits() {
    assert!(PhoneNumber::new("0000000000").is_ok());
    assert!(PhoneNumber::new("9876543210").is_ok());

    assert!(PhoneNumber::new("").is_err());
    assert!(PhoneNumber::new("123456789").is_err()); // 9
    assert!(PhoneNumber::new("12345678901").is_err()); // 11
    assert!(PhoneNumber::new("12345 7890").is_err()); // space
    assert!(PhoneNumber::new("+123456789").is_err()); // plus sign
    assert!(PhoneNumber::new("12345678gO").is_err()); // letters
}

#[test]
fn phone_error_kind_depends_on_failure() {
    assert_eq!(
        PhoneNumber::new("12345678x0"),
        Err(ValidationError::PhoneNotDigits("12345678x0".to_string()))
    );
    assert_eq!(
        PhoneNumber::new("12345"),
        Err(ValidationError::PhoneWrongLength(5))
    );
    // Non-digit wins when both rules are broken.
    assert_eq!(
        PhoneNumber::new("12x"),
        Err(ValidationError::PhoneNotDigits("12x".to_string()))
    );
}

#[test]
fn phone_stores_value_verbatim() {
    let phone = PhoneNumber::new("0501234567").unwrap();
    assert_eq!(phone.as_str(), "0501234567");
    assert_eq!(phone.into_inner(), "0501234567");
}

#[test]
fn birthday_requires_strict_two_digit_format() {
    assert!(Birthday::new("01.01.2000").is_ok());
    assert!(Birthday::new("31.12.1999").is_ok());

    assert!(Birthday::new("1.01.2000").is_err()); // one-digit day
    assert!(Birthday::new("01.1.2000").is_err()); // one-digit month
    assert!(Birthday::new("01.01.99").is_err()); // two-digit year
    assert!(Birthday::new("01-01-2000").is_err()); // wrong separator
    assert!(Birthday::new("2000.01.01").is_err()); // wrong field order
    assert!(Birthday::new("01.01.2000 ").is_err()); // trailing junk
}

#[test]
fn birthday_rejects_impossible_calendar_dates() {
    assert!(Birthday::new("29.02.2021").is_err());
    assert!(Birthday::new("29.02.2020").is_ok());
    assert!(Birthday::new("31.04.2020").is_err());
    assert!(Birthday::new("00.05.2020").is_err());
    assert!(Birthday::new("15.13.2020").is_err());
}

#[test]
fn birthday_round_trips_original_string() {
    for raw in ["01.01.2000", "29.02.2020", "31.12.1999"] {
        let birthday = Birthday::new(raw).unwrap();
        assert_eq!(birthday.as_str(), raw);
    }
}

#[test]
fn name_fails_iff_blank() {
    assert!(ContactName::new("Alice").is_ok());
    assert!(ContactName::new("  spaced  ").is_ok());
    assert!(ContactName::new("0").is_ok());

    assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
    assert_eq!(ContactName::new(" "), Err(ValidationError::EmptyName));
    assert_eq!(ContactName::new("\t \n"), Err(ValidationError::EmptyName));
}
