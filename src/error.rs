//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Ledger file read/write errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A ledger line that could not be parsed
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Validation errors for expense records
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SpendlogError {
    /// Create a parse error for a specific ledger line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SpendlogError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendlogError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_parse_error() {
        let err = SpendlogError::parse(3, "bad amount");
        assert_eq!(err.to_string(), "Parse error on line 3: bad amount");
        assert!(err.is_parse());
    }

    #[test]
    fn test_validation_error() {
        let err = SpendlogError::Validation("amount must be positive".into());
        assert!(err.is_validation());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlogError = io_err.into();
        assert!(matches!(err, SpendlogError::Io(_)));
    }
}
