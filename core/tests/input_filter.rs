//! Numeric input filter tests.

use ept_core::{form::FormField, input};

#[test]
fn accepts_empty_and_digit_strings() {
    for value in ["", "0", "7", "45000", "000123"] {
        assert!(input::is_accepted(value), "{value:?} should be accepted");
    }
}

#[test]
fn rejects_anything_but_digits() {
    for value in ["12a", "-5", "3.5", " 12", "12 ", "1,000", "+1", "1e3", "$"] {
        assert!(!input::is_accepted(value), "{value:?} should be rejected");
    }
}

#[test]
fn rejected_edit_keeps_previous_value() {
    assert_eq!(input::filter("45000", "45000a"), "45000");
    assert_eq!(input::filter("90", "-5"), "90");
    assert_eq!(input::filter("20", "3.5"), "20");
}

#[test]
fn accepted_edit_replaces_value() {
    assert_eq!(input::filter("45000", "4500"), "4500");
    assert_eq!(input::filter("45000", ""), "");
}

#[test]
fn empty_parses_as_zero() {
    for field in FormField::ALL {
        assert_eq!(input::parse(field, "").unwrap(), 0);
    }
    assert_eq!(input::parse(FormField::Cost, "45000").unwrap(), 45_000);
}
