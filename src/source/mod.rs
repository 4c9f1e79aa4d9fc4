//! Input boundaries for record batches.
//!
//! A batch comes from one of three places: an HTTP endpoint returning a
//! JSON array of objects, a JSON file already on disk, or a host table
//! widget that exposes its current data set and header labels. The host
//! widget is an external collaborator; it is modeled here as the
//! [`TableData`] trait so the export path never depends on a concrete
//! widget implementation.

use serde_json::Value;
use std::path::Path;
use std::time::Duration;

use crate::error::{SourceError, SourceResult};

/// Fetch timeout applied when the caller does not supply one.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetch a record batch from an HTTP endpoint.
///
/// Issues a single GET and expects a JSON array of objects in return.
/// A transport failure, non-success status, non-JSON body, or a body
/// that is not an array all map to [`SourceError`]. The operation is
/// never retried here; the surrounding UI owns the retry trigger.
pub async fn fetch_records(endpoint: &str, timeout: Option<Duration>) -> SourceResult<Vec<Value>> {
    let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SourceError::Http(e.to_string()))?;

    let response = client.get(endpoint).send().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::Timeout(timeout.as_secs())
        } else {
            SourceError::Http(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: endpoint.to_string(),
        });
    }

    let body: Value = response.json().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::Timeout(timeout.as_secs())
        } else {
            SourceError::Body(e.to_string())
        }
    })?;

    into_batch(body)
}

/// Read a record batch from a JSON file on disk.
pub fn records_from_file<P: AsRef<Path>>(path: P) -> SourceResult<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    let body: Value = serde_json::from_str(&content)?;
    into_batch(body)
}

/// Require the parsed body to be a JSON array; the elements themselves
/// are not shape-checked, malformed records degrade at encode time.
fn into_batch(body: Value) -> SourceResult<Vec<Value>> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Object(_) => Err(SourceError::NotAnArray("object")),
        Value::String(_) => Err(SourceError::NotAnArray("string")),
        Value::Number(_) => Err(SourceError::NotAnArray("number")),
        Value::Bool(_) => Err(SourceError::NotAnArray("boolean")),
        Value::Null => Err(SourceError::NotAnArray("null")),
    }
}

/// Accessors a host table widget must expose to be exportable: its
/// visible header labels and its current full data set, both in display
/// order.
pub trait TableData {
    /// Visible column labels, in display order.
    fn header_labels(&self) -> Vec<String>;

    /// The full data set, one cell vector per row, in display order.
    fn rows(&self) -> Vec<Vec<Value>>;
}

/// A plain owned snapshot of a table, for callers that already pulled
/// headers and rows out of their widget.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TableSnapshot {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }
}

impl TableData for TableSnapshot {
    fn header_labels(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn rows(&self) -> Vec<Vec<Value>> {
        self.rows.clone()
    }
}
