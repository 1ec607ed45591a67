use crate::form::FormField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Cannot divide by {field}: value is zero")]
    ZeroDivisor { field: FormField },

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: FormField, value: String },

    #[error("Unknown role '{name}'")]
    UnknownRole { name: String },

    #[error("EPT {ept:.2}s is not one of the supported levels")]
    UnknownEptLevel { ept: f64 },

    #[error("Form '{id}' not found")]
    FormNotFound { id: String },

    #[error("Form '{id}' cannot be deleted")]
    FormNotDeletable { id: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EstimatorResult<T> = Result<T, EstimatorError>;
