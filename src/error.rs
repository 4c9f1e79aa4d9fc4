//! Error types for the csvport export pipeline.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`SourceError`] - failures while obtaining a record batch
//! - [`SaveError`] - failures while writing the blob to disk
//! - [`ExportError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Two conditions deliberately have no error type. A record value with an
//! unexpected shape degrades to a best-effort textual field, and an empty
//! batch is handled by policy in [`crate::export`] rather than raised.

use thiserror::Error;

// =============================================================================
// Source Errors
// =============================================================================

/// Errors while obtaining a record batch from an endpoint or a file.
///
/// All variants are terminal to the single export operation; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport failure (connection refused, DNS, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned HTTP {status}: {url}")]
    Status { status: u16, url: String },

    /// The fetch exceeded the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The response body was not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    Body(String),

    /// The response parsed, but was not a JSON array of records.
    #[error("Expected a JSON array of records, got {0}")]
    NotAnArray(&'static str),

    /// Failed to read a local batch file.
    #[error("Failed to read batch file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a local batch file.
    #[error("Invalid JSON in batch file: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Save Errors
// =============================================================================

/// Errors while delivering the blob to the filesystem.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Failed to create the output directory or write the file.
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Export Errors (top-level)
// =============================================================================

/// Top-level export orchestration errors.
///
/// This is the main error type returned by the [`crate::export`] entry
/// points. It wraps the lower-level errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The record batch could not be obtained.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// The CSV blob could not be written.
    #[error("Save error: {0}")]
    Save(#[from] SaveError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for save operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // SourceError -> ExportError
        let source_err = SourceError::Status {
            status: 503,
            url: "http://localhost/api/export".into(),
        };
        let export_err: ExportError = source_err.into();
        assert!(export_err.to_string().contains("503"));

        // SaveError -> ExportError
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let save_err: SaveError = io.into();
        let export_err: ExportError = save_err.into();
        assert!(export_err.to_string().contains("denied"));
    }

    #[test]
    fn test_not_an_array_message() {
        let err = SourceError::NotAnArray("object");
        assert!(err.to_string().contains("JSON array"));
        assert!(err.to_string().contains("object"));
    }
}
