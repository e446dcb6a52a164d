//! Error types for mensura operations.
//!
//! [`MensuraError`] covers the fallible edges of the pipeline: fetching a
//! document, parsing its HTML, and reading or writing the metric tables.
//! Metric computation itself is total and has no error representation.
//!
//! # Example
//!
//! ```rust
//! use mensura_core::{MensuraError, Result};
//!
//! fn require_body(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(MensuraError::HtmlParseError("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for batch metric operations.
#[derive(Error, Debug)]
pub enum MensuraError {
    /// Transport-level HTTP failure: DNS, connection, TLS, or a body that
    /// could not be read.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// An HTTP request exceeded the configured timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// A URL that cannot be parsed or lacks a scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML that cannot be processed, typically an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The input table is missing a required column.
    #[error("Input table is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// CSV read/write failure, including rows that fail to (de)serialize
    /// into a record.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization failure for the JSON output format.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A path that was expected to exist does not.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Any other file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `std::result::Result<T, MensuraError>`.
pub type Result<T> = std::result::Result<T, MensuraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MensuraError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = MensuraError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_missing_column_error() {
        let err = MensuraError::MissingColumn("URL_ID");
        assert!(err.to_string().contains("URL_ID"));
    }
}
