//! Error types for the grist library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for grist operations.
#[derive(Debug, Error)]
pub enum GristError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error fetching a remote data source.
    #[error("Failed to fetch '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no header row to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A data row with a different number of cells than the header.
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The header declares the same column name twice.
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    /// A requested column does not exist in the table.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// An aggregation target column is not numeric.
    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    /// A grouping column is not categorical.
    #[error("Column '{0}' is not categorical")]
    NotCategorical(String),

    /// Error writing the rendered report.
    #[error("Cannot write report to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GristError {
    /// The pipeline stage this error belongs to, for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            GristError::Io { .. }
            | GristError::Fetch { .. }
            | GristError::Csv(_)
            | GristError::EmptyData(_)
            | GristError::RaggedRow { .. } => "load",
            GristError::DuplicateColumn(_) | GristError::UnknownColumn(_) => "schema",
            GristError::NotNumeric(_) | GristError::NotCategorical(_) => "aggregate",
            GristError::Write { .. } | GristError::Json(_) => "report",
        }
    }
}

/// Result type alias for grist operations.
pub type Result<T> = std::result::Result<T, GristError>;
