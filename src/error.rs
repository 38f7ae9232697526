//! Crate error type.

use crate::validation::ValidationError;

/// Errors raised by `u-timetable`.
///
/// All configuration and data problems surface as
/// [`GaError::InvalidInput`] before a run starts; evolution itself does
/// not fail.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    /// Problem data or configuration failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Reading a problem or config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A problem or config file is not valid JSON for the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
