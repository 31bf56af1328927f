//! Column type tags and table schema.

use serde::{Deserialize, Serialize};

/// Inferred type tag for a column, fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Values treated as quantities, aggregated via sum/mean/min/max.
    Numeric,
    /// Values treated as discrete labels, aggregated via counts.
    Categorical,
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

/// Schema for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred type tag.
    pub column_type: ColumnType,
    /// Whether numeric values should be rendered as currency.
    pub monetary: bool,
    /// Number of non-missing values.
    pub non_missing: usize,
    /// Number of missing values.
    pub missing: usize,
}

/// Schema for an entire table, in header order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of numeric columns, in header order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.column_type.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Names of categorical columns, in header order.
    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !c.column_type.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TableSchema {
        TableSchema::new(vec![
            ColumnSchema {
                name: "region".to_string(),
                position: 0,
                column_type: ColumnType::Categorical,
                monetary: false,
                non_missing: 3,
                missing: 0,
            },
            ColumnSchema {
                name: "sales".to_string(),
                position: 1,
                column_type: ColumnType::Numeric,
                monetary: true,
                non_missing: 3,
                missing: 0,
            },
        ])
    }

    #[test]
    fn test_column_partition() {
        let schema = schema();
        assert_eq!(schema.numeric_columns(), vec!["sales"]);
        assert_eq!(schema.categorical_columns(), vec!["region"]);
    }

    #[test]
    fn test_column_lookup() {
        let schema = schema();
        assert!(schema.column("sales").unwrap().monetary);
        assert!(schema.column("profit").is_none());
    }
}
