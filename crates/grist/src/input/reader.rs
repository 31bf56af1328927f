//! CSV reader producing a [`DataTable`] plus source metadata.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use super::fetch;
use super::source::{DataTable, SourceMetadata};
use crate::error::{GristError, Result};

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads CSV data from files or URLs.
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Create a new reader with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Load a source (local path or http(s) URL) and parse it.
    pub fn read_source(&self, source: &str) -> Result<(DataTable, SourceMetadata)> {
        let bytes = fetch::load_bytes(source)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.read_bytes(&bytes)?;
        let metadata = SourceMetadata::new(
            source,
            hash,
            bytes.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse CSV bytes directly.
    ///
    /// The first record is the header row. A header-only input is valid
    /// and yields a table with zero rows.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(GristError::EmptyData("no header row found".to_string()));
        }

        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(GristError::DuplicateColumn(header.clone()));
            }
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.len() != expected_cols {
                // Row numbers are 1-based and count the header.
                return Err(GristError::RaggedRow {
                    row: row_idx + 2,
                    expected: expected_cols,
                    found: record.len(),
                });
            }

            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic_csv() {
        let reader = Reader::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = reader.read_bytes(data).unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
    }

    #[test]
    fn test_header_only_is_valid() {
        let reader = Reader::new();
        let table = reader.read_bytes(b"region,sales\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_input_fails() {
        let reader = Reader::new();
        let err = reader.read_bytes(b"").unwrap_err();
        assert!(matches!(err, GristError::EmptyData(_)));
    }

    #[test]
    fn test_duplicate_header_fails() {
        let reader = Reader::new();
        let err = reader.read_bytes(b"id,name,id\n1,a,2\n").unwrap_err();
        assert!(matches!(err, GristError::DuplicateColumn(name) if name == "id"));
    }

    #[test]
    fn test_ragged_row_fails() {
        let reader = Reader::new();
        let err = reader.read_bytes(b"a,b,c\n1,2,3\n4,5\n").unwrap_err();
        match err {
            GristError::RaggedRow {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_quoted_fields() {
        let reader = Reader::new();
        let data = b"name,note\nAlice,\"loves, commas\"\n";
        let table = reader.read_bytes(data).unwrap();
        assert_eq!(table.get(0, 1), Some("loves, commas"));
    }

    #[test]
    fn test_max_rows() {
        let reader = Reader::with_config(ReaderConfig {
            max_rows: Some(1),
            ..ReaderConfig::default()
        });
        let table = reader.read_bytes(b"a\n1\n2\n3\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
