//! The output boundary: an in-memory byte blob delivered to the
//! filesystem.
//!
//! The CSV document lives exactly long enough to be converted into a
//! [`Blob`] and written out; nothing is persisted beyond the saved file.

use std::path::{Path, PathBuf};

use crate::error::SaveResult;

/// MIME type attached to every CSV blob.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// Fixed filename used by the table path.
const FIXED_FILENAME: &str = "export.csv";

/// An in-memory export blob ready for delivery.
#[derive(Debug, Clone)]
pub struct Blob {
    /// Target filename, without directory.
    pub filename: String,
    /// MIME type of the payload.
    pub content_type: &'static str,
    /// The payload bytes.
    pub bytes: Vec<u8>,
}

impl Blob {
    /// Wrap CSV text as a blob.
    pub fn csv(filename: impl Into<String>, text: &str) -> Self {
        Self {
            filename: filename.into(),
            content_type: CSV_CONTENT_TYPE,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// The fixed filename: `export.csv`.
pub fn default_filename() -> String {
    FIXED_FILENAME.to_string()
}

/// A timestamp-qualified filename: `export-<epoch-millis>.csv`.
pub fn stamped_filename() -> String {
    format!("export-{}.csv", chrono::Utc::now().timestamp_millis())
}

/// Write a blob into `dir`, creating the directory if needed.
///
/// Returns the full path of the written file.
pub fn save_to_dir(blob: &Blob, dir: &Path) -> SaveResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&blob.filename);
    std::fs::write(&path, &blob.bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_csv_blob_carries_mime_type() {
        let blob = Blob::csv("export.csv", "a,b\n1,2\n");
        assert_eq!(blob.content_type, "text/csv;charset=utf-8;");
        assert_eq!(blob.bytes, b"a,b\n1,2\n");
    }

    #[test]
    fn test_stamped_filename_shape() {
        let name = stamped_filename();
        assert!(name.starts_with("export-"));
        assert!(name.ends_with(".csv"));

        let millis = &name["export-".len()..name.len() - ".csv".len()];
        assert!(millis.parse::<i64>().is_ok());
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("exports");

        let blob = Blob::csv("export.csv", "name\nAlice\n");
        let path = save_to_dir(&blob, &target).unwrap();

        assert_eq!(path, target.join("export.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "name\nAlice\n");
    }
}
