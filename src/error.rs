//! Error types for the Spamlens library.
//!
//! All fallible operations return [`SpamlensError`] through the crate-wide
//! [`Result`] alias. Text stages and flag extractors are total over any
//! input string and never produce an error; failures only arise while
//! loading data, reading configuration or compiling user-supplied patterns.
//!
//! # Examples
//!
//! ```
//! use spamlens::error::{Result, SpamlensError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpamlensError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spamlens operations.
#[derive(Error, Debug)]
pub enum SpamlensError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (pattern compilation, tokenization setup)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record that lacks a required field after coercion was attempted.
    ///
    /// Only raised while coercing raw rows; the dedup stage recovers from
    /// it by dropping the row.
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpamlensError.
pub type Result<T> = std::result::Result<T, SpamlensError>;

impl SpamlensError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpamlensError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpamlensError::Config(msg.into())
    }

    /// Create a new malformed record error.
    pub fn malformed<S: Into<String>>(row: usize, reason: S) -> Self {
        SpamlensError::MalformedRecord {
            row,
            reason: reason.into(),
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpamlensError::InvalidArgument(msg.into())
    }

    /// Whether the dedup stage may recover from this error by dropping the row.
    pub fn is_recoverable_by_drop(&self) -> bool {
        matches!(self, SpamlensError::MalformedRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpamlensError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = SpamlensError::config("length must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: length must be positive"
        );

        let error = SpamlensError::malformed(3, "missing label");
        assert_eq!(error.to_string(), "Malformed record at row 3: missing label");
    }

    #[test]
    fn test_recoverable_by_drop() {
        assert!(SpamlensError::malformed(0, "missing comment").is_recoverable_by_drop());
        assert!(!SpamlensError::config("x").is_recoverable_by_drop());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpamlensError::from(io_error);

        match error {
            SpamlensError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
