//! CSV document construction from record batches and table snapshots.
//!
//! Converts ordered records (JSON objects) or ordered rows of cell values
//! into CSV text. Field encoding is a single pass per field: null becomes
//! the empty field, compounds become their JSON text, markup-bearing
//! strings are reduced to their visible text, and the result is escaped
//! so no delimiter, quote, or newline survives unquoted.

use serde_json::Value;

use crate::markup::strip_markup;

/// Line terminator used for a whole document.
///
/// The record-batch path emits `\n`, the table path `\r\n`. Whichever is
/// chosen terminates every line, including the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// A rendered CSV document with its metadata.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    /// The full CSV text, header line included.
    pub text: String,
    /// Column names, in output order.
    pub headers: Vec<String>,
    /// Number of data lines (header excluded).
    pub row_count: usize,
    /// Terminator used for every line.
    pub terminator: LineTerminator,
}

impl CsvDocument {
    /// True when the document carries no data rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    fn empty(terminator: LineTerminator) -> Self {
        Self {
            text: String::new(),
            headers: Vec::new(),
            row_count: 0,
            terminator,
        }
    }
}

/// Escape a single textual field.
///
/// Every literal double-quote is doubled; if the field contains a comma,
/// a double-quote, or a newline, the whole field is wrapped in quotes.
pub fn escape_field(text: &str) -> String {
    let escaped = text.replace('"', "\"\"");
    if escaped.contains(',') || escaped.contains('"') || escaped.contains('\n') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Encode one field value to its final CSV form.
///
/// Null and absent values become the empty field. Objects and arrays
/// serialize to their compact JSON text. Strings carrying a `<` are
/// treated as markup and reduced to visible text first. Everything then
/// goes through [`escape_field`].
pub fn encode_field(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) if s.contains('<') => strip_markup(s),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Objects and arrays keep their JSON text representation.
        compound => compound.to_string(),
    };

    escape_field(&text)
}

/// Encode a batch of records as a CSV document.
///
/// Column order is the first record's key order. Records missing a key
/// produce an empty field for that column; records that are not objects
/// produce a row of empty fields. Zero records, or a first record with
/// no usable keys, produce the empty document so the caller can skip the
/// file save.
///
/// # Example
/// ```
/// use csvport::encode_records;
/// use serde_json::json;
///
/// let doc = encode_records(&[json!({"name": "Alice", "age": 30})]);
/// assert_eq!(doc.text, "name,age\nAlice,30\n");
/// ```
pub fn encode_records(records: &[Value]) -> CsvDocument {
    let headers: Vec<String> = records
        .first()
        .and_then(|first| first.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    if headers.is_empty() {
        return CsvDocument::empty(LineTerminator::Lf);
    }

    let terminator = LineTerminator::Lf;
    let mut text = header_line(&headers, terminator);

    for record in records {
        let fields: Vec<String> = headers
            .iter()
            .map(|name| encode_field(record.get(name).unwrap_or(&Value::Null)))
            .collect();
        text.push_str(&fields.join(","));
        text.push_str(terminator.as_str());
    }

    CsvDocument {
        text,
        headers,
        row_count: records.len(),
        terminator,
    }
}

/// Encode table rows as a CSV document.
///
/// Headers come from the host table, not from the rows. Cells beyond the
/// header count are dropped; missing cells become empty fields, so every
/// data line matches the header width. With zero rows the result is a
/// header-only document (headers are independently known on this path).
pub fn encode_rows(headers: &[String], rows: &[Vec<Value>]) -> CsvDocument {
    if headers.is_empty() {
        return CsvDocument::empty(LineTerminator::CrLf);
    }

    let terminator = LineTerminator::CrLf;
    let mut text = header_line(headers, terminator);

    for row in rows {
        let fields: Vec<String> = (0..headers.len())
            .map(|i| encode_field(row.get(i).unwrap_or(&Value::Null)))
            .collect();
        text.push_str(&fields.join(","));
        text.push_str(terminator.as_str());
    }

    CsvDocument {
        text,
        headers: headers.to_vec(),
        row_count: rows.len(),
        terminator,
    }
}

/// Render the header line. Header names are assumed tame but go through
/// the same escaper as data fields.
fn header_line(headers: &[String], terminator: LineTerminator) -> String {
    let mut line = headers
        .iter()
        .map(|h| escape_field(h))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str(terminator.as_str());
    line
}
