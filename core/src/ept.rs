//! EPT (Effective Processing Time) lookup table.
//!
//! RULE: The table is a fixed set of empirical points on a logarithmic
//! productivity curve. It is looked up by exact match, never evaluated
//! or interpolated. Entries are ordered from slowest to fastest EPT.

use crate::types::Seconds;
use serde::{Deserialize, Serialize};

/// Clicks per minute used when an EPT does not match any level.
/// This is the 2.40s level.
pub const FALLBACK_CLICKS_PER_MINUTE: f64 = 4.15;

/// The EPT level the form starts on.
pub const DEFAULT_EPT: Seconds = 2.40;

/// One row of the EPT table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EptLevel {
    pub ept: Seconds,
    pub clicks_per_minute: f64,
}

const fn level(ept: Seconds, clicks_per_minute: f64) -> EptLevel {
    EptLevel { ept, clicks_per_minute }
}

pub const EPT_LEVELS: [EptLevel; 16] = [
    level(3.20, 3.47),
    level(3.00, 3.66),
    level(2.80, 3.73),
    level(2.60, 3.89),
    level(2.40, 4.15),
    level(2.20, 4.52),
    level(2.00, 5.05),
    level(1.80, 5.76),
    level(1.60, 6.73),
    level(1.40, 8.05),
    level(1.20, 9.07),
    level(1.00, 12.47),
    level(0.80, 16.41),
    level(0.60, 22.93),
    level(0.40, 35.85),
    level(0.30, 48.55),
];

/// Find the table row for an EPT by exact equality.
pub fn find_level(ept: Seconds) -> Option<&'static EptLevel> {
    EPT_LEVELS.iter().find(|l| l.ept == ept)
}

/// Whether `ept` is one of the 16 supported levels.
pub fn is_supported(ept: Seconds) -> bool {
    find_level(ept).is_some()
}

/// Clicks per minute for `ept`, falling back to
/// [`FALLBACK_CLICKS_PER_MINUTE`] when it is not a table level.
pub fn clicks_per_minute(ept: Seconds) -> f64 {
    match find_level(ept) {
        Some(l) => l.clicks_per_minute,
        None => {
            log::warn!(
                "EPT {ept} is not a table level, using {FALLBACK_CLICKS_PER_MINUTE} clicks/min"
            );
            FALLBACK_CLICKS_PER_MINUTE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_strictly_descending() {
        for pair in EPT_LEVELS.windows(2) {
            assert!(pair[0].ept > pair[1].ept, "{:?} before {:?}", pair[0], pair[1]);
            assert!(pair[0].clicks_per_minute < pair[1].clicks_per_minute);
        }
    }

    #[test]
    fn default_ept_is_a_table_level() {
        assert_eq!(
            find_level(DEFAULT_EPT).map(|l| l.clicks_per_minute),
            Some(FALLBACK_CLICKS_PER_MINUTE)
        );
    }

    #[test]
    fn near_miss_is_not_interpolated() {
        assert!(!is_supported(2.41));
        assert_eq!(clicks_per_minute(2.41), FALLBACK_CLICKS_PER_MINUTE);
        assert_eq!(clicks_per_minute(0.35), FALLBACK_CLICKS_PER_MINUTE);
    }
}
