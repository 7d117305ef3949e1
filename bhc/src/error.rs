// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between selecting a report file and
/// printing a health percentage. The display strings are the exact
/// messages shown to the user.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read or parse the report file.")]
    ReadFailure(#[source] std::io::Error),

    #[error("Capacity values not found in file.")]
    FieldsNotFound,

    #[error("Could not parse capacity values correctly.")]
    CapacityParse,
}
