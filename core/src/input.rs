//! Numeric input filtering.
//!
//! Every numeric form field holds raw text. A proposed edit is accepted
//! only if it is empty or made entirely of ASCII digits; anything else is
//! dropped and the field keeps its previous value. Empty text counts as 0.

use crate::{
    error::{EstimatorError, EstimatorResult},
    form::FormField,
};

/// Whether `value` may replace the current text of a numeric field.
pub fn is_accepted(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// Apply a proposed edit. Returns the new field text: `proposed` if it
/// passes the filter, otherwise `current` unchanged.
pub fn filter<'a>(current: &'a str, proposed: &'a str) -> &'a str {
    if is_accepted(proposed) {
        proposed
    } else {
        log::trace!("Rejected numeric input {proposed:?}, keeping {current:?}");
        current
    }
}

/// Parse accepted field text into a number. Empty text is 0.
pub fn parse(field: FormField, value: &str) -> EstimatorResult<u64> {
    if value.is_empty() {
        return Ok(0);
    }
    let invalid = || EstimatorError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    if !is_accepted(value) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
