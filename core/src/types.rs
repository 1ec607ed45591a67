//! Shared primitive types used across the calculator.

/// Effective Processing Time of a single interaction, in seconds.
pub type Seconds = f64;

/// A monetary amount in currency units.
pub type Currency = f64;

/// A stable, unique identifier for a form instance within a session.
pub type FormId = String;
