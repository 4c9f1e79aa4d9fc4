//! High-level export API.
//!
//! Combines the input boundaries, the CSV encoder, and the blob save
//! into single-call operations. Each entry point performs exactly one
//! export: obtain the batch, encode it, write the file. Failures are
//! terminal; the surrounding UI owns any retry trigger.
//!
//! # Example
//!
//! ```rust,ignore
//! use csvport::{export_endpoint, ExportOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = export_endpoint(
//!         "http://localhost:5000/api/journalists/export",
//!         &ExportOptions::default(),
//!     ).await?;
//!
//!     if let Some(path) = outcome.path {
//!         println!("Saved {} rows to {}", outcome.row_count, path.display());
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::blob::{default_filename, save_to_dir, stamped_filename, Blob};
use crate::encode::{encode_records, encode_rows, CsvDocument};
use crate::error::ExportResult;
use crate::report::{log_error, log_info, log_success, log_warning};
use crate::source::{fetch_records, TableData};

/// Options for a single export.
///
/// Explicit named fields, no dynamic merging: a field set here fully
/// replaces its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Directory the file is written into.
    pub output_dir: PathBuf,

    /// Filename override. When unset the batch path stamps the current
    /// epoch millis into the name and the table path uses `export.csv`.
    pub filename: Option<String>,

    /// Fetch timeout for the endpoint path. `None` falls back to
    /// [`crate::source::DEFAULT_FETCH_TIMEOUT_SECS`].
    pub timeout: Option<Duration>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            filename: None,
            timeout: None,
        }
    }
}

/// What a completed export produced.
#[derive(Debug, Clone, Serialize)]
pub struct ExportOutcome {
    /// Path of the written file, or `None` when the empty-batch policy
    /// suppressed the save.
    pub path: Option<PathBuf>,

    /// Number of data rows in the document.
    pub row_count: usize,

    /// Size of the written payload in bytes.
    pub byte_count: usize,
}

/// Fetch a JSON array of records from `endpoint` and export it.
///
/// The fetch is the only suspension point; encoding and saving are
/// synchronous once the batch is in memory. A fetch failure is reported
/// to the operator and returned; no file is produced and nothing is
/// retried.
pub async fn export_endpoint(endpoint: &str, options: &ExportOptions) -> ExportResult<ExportOutcome> {
    log_info(format!("Fetching records from {}", endpoint));

    let records = match fetch_records(endpoint, options.timeout).await {
        Ok(records) => records,
        Err(e) => {
            log_error(format!("Export failed, no file produced: {}", e));
            return Err(e.into());
        }
    };

    log_success(format!("Fetched {} records", records.len()));
    export_records(&records, options)
}

/// Export an already-materialized record batch.
///
/// Columns come from the first record; rows keep their supply order.
/// Zero records produce no file.
pub fn export_records(records: &[Value], options: &ExportOptions) -> ExportResult<ExportOutcome> {
    let document = encode_records(records);

    if document.is_empty() {
        log_warning("Empty batch, nothing to export");
        return Ok(ExportOutcome {
            path: None,
            row_count: 0,
            byte_count: 0,
        });
    }

    let filename = options.filename.clone().unwrap_or_else(stamped_filename);
    deliver(document, filename, options)
}

/// Export the current contents of a host table widget.
///
/// Headers come from the widget's visible labels. Because headers are
/// independently known, zero rows still produce a header-only file.
pub fn export_table<T: TableData>(table: &T, options: &ExportOptions) -> ExportResult<ExportOutcome> {
    let headers = table.header_labels();
    let rows = table.rows();
    let document = encode_rows(&headers, &rows);

    if document.headers.is_empty() {
        log_warning("Table has no columns, nothing to export");
        return Ok(ExportOutcome {
            path: None,
            row_count: 0,
            byte_count: 0,
        });
    }

    let filename = options.filename.clone().unwrap_or_else(default_filename);
    deliver(document, filename, options)
}

/// Blob the document and write it into the output directory.
fn deliver(
    document: CsvDocument,
    filename: String,
    options: &ExportOptions,
) -> ExportResult<ExportOutcome> {
    let blob = Blob::csv(filename, &document.text);
    let byte_count = blob.bytes.len();

    let path = save_to_dir(&blob, &options.output_dir).map_err(|e| {
        log_error(format!("Export failed, no file produced: {}", e));
        e
    })?;

    log_success(format!(
        "Saved {} rows ({} bytes) to {}",
        document.row_count,
        byte_count,
        path.display()
    ));

    Ok(ExportOutcome {
        path: Some(path),
        row_count: document.row_count,
        byte_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TableSnapshot;
    use serde_json::json;
    use tempfile::tempdir;

    fn options_in(dir: &std::path::Path) -> ExportOptions {
        ExportOptions {
            output_dir: dir.to_path_buf(),
            filename: None,
            timeout: None,
        }
    }

    #[test]
    fn test_default_options() {
        let opts = ExportOptions::default();
        assert_eq!(opts.output_dir, PathBuf::from("."));
        assert!(opts.filename.is_none());
        assert!(opts.timeout.is_none());
    }

    #[test]
    fn test_export_records_writes_stamped_file() {
        let dir = tempdir().unwrap();
        let records = vec![json!({"name": "Alice"}), json!({"name": "Bob"})];

        let outcome = export_records(&records, &options_in(dir.path())).unwrap();

        let path = outcome.path.unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("export-") && name.ends_with(".csv"));
        assert_eq!(outcome.row_count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name\nAlice\nBob\n");
        assert_eq!(outcome.byte_count, content.len());
    }

    #[test]
    fn test_export_records_honors_filename_override() {
        let dir = tempdir().unwrap();
        let options = ExportOptions {
            filename: Some("journalists.csv".to_string()),
            ..options_in(dir.path())
        };

        let outcome = export_records(&[json!({"a": 1})], &options).unwrap();
        assert_eq!(outcome.path.unwrap(), dir.path().join("journalists.csv"));
    }

    #[test]
    fn test_export_empty_batch_writes_nothing() {
        let dir = tempdir().unwrap();

        let outcome = export_records(&[], &options_in(dir.path())).unwrap();

        assert!(outcome.path.is_none());
        assert_eq!(outcome.row_count, 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_table_uses_fixed_filename() {
        let dir = tempdir().unwrap();
        let table = TableSnapshot::new(
            vec!["name".to_string(), "articles".to_string()],
            vec![vec![json!("Alice"), json!(12)]],
        );

        let outcome = export_table(&table, &options_in(dir.path())).unwrap();

        let path = outcome.path.unwrap();
        assert_eq!(path, dir.path().join("export.csv"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "name,articles\r\nAlice,12\r\n"
        );
    }

    #[test]
    fn test_export_table_zero_rows_writes_header_only_file() {
        let dir = tempdir().unwrap();
        let table = TableSnapshot::new(vec!["name".to_string()], vec![]);

        let outcome = export_table(&table, &options_in(dir.path())).unwrap();

        let path = outcome.path.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "name\r\n");
        assert_eq!(outcome.row_count, 0);
    }

    #[test]
    fn test_export_table_without_columns_writes_nothing() {
        let dir = tempdir().unwrap();
        let table = TableSnapshot::new(vec![], vec![]);

        let outcome = export_table(&table, &options_in(dir.path())).unwrap();
        assert!(outcome.path.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_export_endpoint_unreachable_produces_no_file() {
        let dir = tempdir().unwrap();

        // Port 9 (discard) is not listening.
        let result = export_endpoint("http://127.0.0.1:9/export", &options_in(dir.path())).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
