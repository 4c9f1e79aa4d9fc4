//! # csvport - Tabular record batches to CSV files
//!
//! csvport serializes batches of structured records (JSON objects from an
//! HTTP endpoint or a file, or rows snapshotted from a table widget) into
//! CSV text and delivers the result as a MIME-typed file.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ JSON records │────▶│   Encoder    │────▶│   CSV blob   │────▶│  export.csv  │
//! │ (HTTP/table) │     │ strip/escape │     │  (text/csv)  │     │  (on disk)   │
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csvport::{export_endpoint, ExportOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome = export_endpoint("http://localhost:5000/api/export", &ExportOptions::default())
//!         .await
//!         .unwrap();
//!     println!("Wrote {} rows", outcome.row_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`encode`] - CSV document construction and field escaping
//! - [`markup`] - Embedded-markup stripping for field values
//! - [`source`] - Input boundaries (HTTP endpoint, file, table widget)
//! - [`blob`] - The MIME-typed output blob and file save
//! - [`export`] - One-call export operations
//! - [`report`] - Operator-visible progress and alerts

// Core modules
pub mod error;

// Encoding
pub mod encode;
pub mod markup;

// Input boundaries
pub mod source;

// Output boundary
pub mod blob;

// Orchestration
pub mod export;

// Reporting
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ExportError,
    ExportResult,
    SaveError,
    SaveResult,
    SourceError,
    SourceResult,
};

// =============================================================================
// Re-exports - Encoding
// =============================================================================

pub use encode::{
    encode_field,
    encode_records,
    encode_rows,
    escape_field,
    CsvDocument,
    LineTerminator,
};

pub use markup::strip_markup;

// =============================================================================
// Re-exports - Sources
// =============================================================================

pub use source::{
    fetch_records,
    records_from_file,
    TableData,
    TableSnapshot,
    DEFAULT_FETCH_TIMEOUT_SECS,
};

// =============================================================================
// Re-exports - Blob
// =============================================================================

pub use blob::{default_filename, save_to_dir, stamped_filename, Blob, CSV_CONTENT_TYPE};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{
    export_endpoint,
    export_records,
    export_table,
    ExportOptions,
    ExportOutcome,
};
