//! Data table and source metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source that was loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// The path or URL the data came from.
    pub source: String,
    /// SHA-256 hash of the raw bytes.
    pub hash: String,
    /// Size of the raw bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the data was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    pub fn new(
        source: impl Into<String>,
        hash: String,
        size_bytes: u64,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        Self {
            source: source.into(),
            hash,
            size_bytes,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Parsed tabular data, owned by a single pipeline run.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Row data as raw strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column's index by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate over all values of a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check whether a cell counts as missing.
    ///
    /// Missing cells never block numeric classification and are excluded
    /// from numeric aggregates.
    pub fn is_missing(value: &str) -> bool {
        value.trim().is_empty()
    }

    /// Parse a cell as a number, treating missing cells as `None`.
    pub fn parse_numeric(value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["region".to_string(), "sales".to_string()],
            vec![
                vec!["East".to_string(), "100".to_string()],
                vec!["West".to_string(), "200".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_lookup() {
        let table = sample_table();
        assert_eq!(table.column_index("sales"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        let values: Vec<&str> = table.column_values(1).collect();
        assert_eq!(values, vec!["100", "200"]);
    }

    #[test]
    fn test_is_missing() {
        assert!(DataTable::is_missing(""));
        assert!(DataTable::is_missing("   "));
        assert!(!DataTable::is_missing("0"));
        assert!(!DataTable::is_missing("N/A"));
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(DataTable::parse_numeric("100"), Some(100.0));
        assert_eq!(DataTable::parse_numeric(" 3.25 "), Some(3.25));
        assert_eq!(DataTable::parse_numeric("-7"), Some(-7.0));
        assert_eq!(DataTable::parse_numeric(""), None);
        assert_eq!(DataTable::parse_numeric("N/A"), None);
        assert_eq!(DataTable::parse_numeric("NaN"), None);
    }
}
