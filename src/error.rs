//! Custom error types for tally
//!
//! One thiserror enum covers every fallible operation in the crate; the
//! `TallyResult` alias is what the module APIs return.

use thiserror::Error;

use crate::models::RecordError;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A stored ledger line that could not be decoded
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number within the data file
        line: usize,
        source: RecordError,
    },

    /// JSON serialization/deserialization errors (audit log, JSON export)
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV export errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TallyError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Attach a 1-based line number to a record decoding failure
    pub fn record(line: usize, source: RecordError) -> Self {
        Self::Record { line, source }
    }

    /// Check if this is a record decoding error
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Conversions for the library errors that storage, audit and export bubble up

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::validation("unknown export format 'xml'");
        assert_eq!(err.to_string(), "Validation error: unknown export format 'xml'");
        assert!(err.is_validation());
    }

    #[test]
    fn test_record_error_carries_line_number() {
        let err = TallyError::record(3, RecordError::MissingField { found: 2 });
        assert!(err.to_string().starts_with("line 3:"));
        assert!(err.is_record());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
        assert!(tally_err.to_string().contains("file not found"));
    }
}
