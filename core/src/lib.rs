//! Core of the EPT productivity calculator.
//!
//! `estimator` holds the pure true-cost calculation. `form` and `session`
//! model the calculator forms that feed it; `citations` is the static
//! footer content.

pub mod citations;
pub mod config;
pub mod ept;
pub mod error;
pub mod estimator;
pub mod form;
pub mod input;
pub mod role;
pub mod session;
pub mod types;

pub use error::{EstimatorError, EstimatorResult};
pub use estimator::{calculate, CalculationResult, ProductivityEstimator};
