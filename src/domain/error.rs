//! Recoverable errors raised while building and addressing records
//!
//! None of these end a session. The controller reports them and keeps
//! looping; the store is never mutated when one is raised.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("Invalid value for {field}: '{value}'")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("Crop '{0}' is not registered")]
    UnregisteredCrop(String),

    #[error("Invalid index {index}: {len} record(s) registered")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Index must be a number, got '{0}'")]
    NonNumericIndex(String),

    #[error("No data to export. Register a crop first.")]
    NoDataToExport,

    #[error("Invalid option '{0}'. Try again.")]
    UnrecognizedCommand(String),

    #[error("Input name must not be empty")]
    EmptyInputName,

    #[error("Plot area must be greater than zero, got {0}")]
    NonPositiveArea(f64),
}

impl RecordError {
    /// Shorthand for an unparseable numeric field
    pub fn invalid(field: &'static str, value: &str) -> Self {
        RecordError::InvalidNumericInput {
            field,
            value: value.to_string(),
        }
    }
}
