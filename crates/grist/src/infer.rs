//! Column type inference.
//!
//! A column is Numeric when the fraction of its non-missing values that
//! parse as a number meets the configured threshold. The default is
//! strict: a single non-numeric value demotes the column to Categorical.

use crate::input::DataTable;
use crate::schema::{ColumnSchema, ColumnType, TableSchema};

/// Column names treated as monetary when no explicit hints are given.
const DEFAULT_MONETARY_NAMES: &[&str] = &["sales", "price", "revenue", "amount", "cost"];

/// Infers per-column type tags from cell values.
#[derive(Debug, Clone)]
pub struct TypeInference {
    /// Minimum fraction of non-missing values that must parse as numbers
    /// for a column to be tagged Numeric. 1.0 = strict.
    pub numeric_threshold: f64,
    /// Columns to render as currency. Empty = use name defaults.
    pub monetary_hints: Vec<String>,
}

impl Default for TypeInference {
    fn default() -> Self {
        Self {
            numeric_threshold: 1.0,
            monetary_hints: Vec::new(),
        }
    }
}

impl TypeInference {
    pub fn new(numeric_threshold: f64) -> Self {
        Self {
            numeric_threshold,
            monetary_hints: Vec::new(),
        }
    }

    pub fn with_monetary_hints(mut self, hints: Vec<String>) -> Self {
        self.monetary_hints = hints;
        self
    }

    /// Infer a schema for the whole table in one pass per column.
    pub fn infer(&self, table: &DataTable) -> TableSchema {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(position, name)| self.infer_column(table, name, position))
            .collect();

        TableSchema::new(columns)
    }

    fn infer_column(&self, table: &DataTable, name: &str, position: usize) -> ColumnSchema {
        let mut non_missing = 0usize;
        let mut missing = 0usize;
        let mut numeric = 0usize;

        for value in table.column_values(position) {
            if DataTable::is_missing(value) {
                missing += 1;
                continue;
            }
            non_missing += 1;
            if DataTable::parse_numeric(value).is_some() {
                numeric += 1;
            }
        }

        // Columns with no observed values stay Categorical.
        let column_type = if non_missing > 0
            && (numeric as f64 / non_missing as f64) >= self.numeric_threshold
        {
            ColumnType::Numeric
        } else {
            ColumnType::Categorical
        };

        ColumnSchema {
            name: name.to_string(),
            position,
            column_type,
            monetary: column_type.is_numeric() && self.is_monetary(name),
            non_missing,
            missing,
        }
    }

    fn is_monetary(&self, name: &str) -> bool {
        if self.monetary_hints.is_empty() {
            DEFAULT_MONETARY_NAMES
                .iter()
                .any(|m| name.eq_ignore_ascii_case(m))
        } else {
            self.monetary_hints
                .iter()
                .any(|m| name.eq_ignore_ascii_case(m))
        }
    }
}
