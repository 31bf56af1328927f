//! Grouped reductions over a table.
//!
//! All aggregations are pure folds over the rows. Groups keep the
//! insertion order of first appearance via `IndexMap`, so results are
//! deterministic for a given input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GristError, Result};
use crate::input::DataTable;
use crate::schema::TableSchema;

/// Per-group reduction of a numeric column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub sum: f64,
    pub count: usize,
}

impl GroupSummary {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of the group. Groups always hold at least one value.
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Grouped reductions of numeric columns by categorical columns.
pub struct Aggregator;

impl Aggregator {
    /// Sum and count of `value_col` per distinct value of `group_col`.
    ///
    /// Rows whose target cell is missing or unparseable are skipped; rows
    /// whose grouping cell is missing are skipped as well.
    pub fn group_summaries(
        table: &DataTable,
        schema: &TableSchema,
        group_col: &str,
        value_col: &str,
    ) -> Result<IndexMap<String, GroupSummary>> {
        let group_idx = Self::categorical_index(table, schema, group_col)?;
        let value_idx = Self::numeric_index(table, schema, value_col)?;

        let mut groups: IndexMap<String, GroupSummary> = IndexMap::new();
        for row in &table.rows {
            let key = row.get(group_idx).map(|s| s.as_str()).unwrap_or("");
            if DataTable::is_missing(key) {
                continue;
            }
            let Some(value) = row.get(value_idx).and_then(|v| DataTable::parse_numeric(v))
            else {
                continue;
            };
            groups.entry(key.to_string()).or_default().add(value);
        }

        Ok(groups)
    }

    /// Row count per distinct value of `group_col`.
    pub fn group_counts(
        table: &DataTable,
        group_col: &str,
    ) -> Result<IndexMap<String, usize>> {
        let group_idx = table
            .column_index(group_col)
            .ok_or_else(|| GristError::UnknownColumn(group_col.to_string()))?;

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in table.column_values(group_idx) {
            if DataTable::is_missing(value) {
                continue;
            }
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Two-level grouping: sums of `value_col` by `outer` then `inner`.
    pub fn nested_sums(
        table: &DataTable,
        schema: &TableSchema,
        outer: &str,
        inner: &str,
        value_col: &str,
    ) -> Result<IndexMap<String, IndexMap<String, f64>>> {
        let outer_idx = Self::categorical_index(table, schema, outer)?;
        let inner_idx = Self::categorical_index(table, schema, inner)?;
        let value_idx = Self::numeric_index(table, schema, value_col)?;

        let mut nested: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
        for row in &table.rows {
            let outer_key = row.get(outer_idx).map(|s| s.as_str()).unwrap_or("");
            let inner_key = row.get(inner_idx).map(|s| s.as_str()).unwrap_or("");
            if DataTable::is_missing(outer_key) || DataTable::is_missing(inner_key) {
                continue;
            }
            let Some(value) = row.get(value_idx).and_then(|v| DataTable::parse_numeric(v))
            else {
                continue;
            };
            *nested
                .entry(outer_key.to_string())
                .or_default()
                .entry(inner_key.to_string())
                .or_insert(0.0) += value;
        }

        Ok(nested)
    }

    /// Per-group mean of several numeric columns.
    pub fn mean_by_group(
        table: &DataTable,
        schema: &TableSchema,
        group_col: &str,
        metric_cols: &[&str],
    ) -> Result<IndexMap<String, IndexMap<String, f64>>> {
        let group_idx = Self::categorical_index(table, schema, group_col)?;
        let metric_indices: Vec<(String, usize)> = metric_cols
            .iter()
            .map(|col| Ok(((*col).to_string(), Self::numeric_index(table, schema, col)?)))
            .collect::<Result<_>>()?;

        let mut acc: IndexMap<String, IndexMap<String, GroupSummary>> = IndexMap::new();
        for row in &table.rows {
            let key = row.get(group_idx).map(|s| s.as_str()).unwrap_or("");
            if DataTable::is_missing(key) {
                continue;
            }
            let per_group = acc.entry(key.to_string()).or_default();
            for (name, idx) in &metric_indices {
                if let Some(value) = row.get(*idx).and_then(|v| DataTable::parse_numeric(v)) {
                    per_group.entry(name.clone()).or_default().add(value);
                }
            }
        }

        Ok(acc
            .into_iter()
            .map(|(key, metrics)| {
                let means = metrics
                    .into_iter()
                    .map(|(name, summary)| (name, summary.mean()))
                    .collect();
                (key, means)
            })
            .collect())
    }

    fn categorical_index(
        table: &DataTable,
        schema: &TableSchema,
        name: &str,
    ) -> Result<usize> {
        let idx = table
            .column_index(name)
            .ok_or_else(|| GristError::UnknownColumn(name.to_string()))?;
        let column = schema
            .column(name)
            .ok_or_else(|| GristError::UnknownColumn(name.to_string()))?;
        if column.column_type.is_numeric() {
            return Err(GristError::NotCategorical(name.to_string()));
        }
        Ok(idx)
    }

    fn numeric_index(table: &DataTable, schema: &TableSchema, name: &str) -> Result<usize> {
        let idx = table
            .column_index(name)
            .ok_or_else(|| GristError::UnknownColumn(name.to_string()))?;
        let column = schema
            .column(name)
            .ok_or_else(|| GristError::UnknownColumn(name.to_string()))?;
        if !column.column_type.is_numeric() {
            return Err(GristError::NotNumeric(name.to_string()));
        }
        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::TypeInference;

    fn table_and_schema(csv: &[&[&str]]) -> (DataTable, TableSchema) {
        let headers = csv[0].iter().map(|s| s.to_string()).collect();
        let rows = csv[1..]
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        let table = DataTable::new(headers, rows);
        let schema = TypeInference::default().infer(&table);
        (table, schema)
    }

    #[test]
    fn test_group_summaries_spec_scenario() {
        let (table, schema) = table_and_schema(&[
            &["region", "sales"],
            &["East", "100"],
            &["West", "200"],
            &["East", "50"],
        ]);

        let groups = Aggregator::group_summaries(&table, &schema, "region", "sales").unwrap();

        let east = &groups["East"];
        assert_eq!(east.sum, 150.0);
        assert_eq!(east.count, 2);
        assert_eq!(east.mean(), 75.0);

        let west = &groups["West"];
        assert_eq!(west.sum, 200.0);
        assert_eq!(west.count, 1);
        assert_eq!(west.mean(), 200.0);

        // Insertion order of first appearance.
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["East", "West"]);
    }

    #[test]
    fn test_missing_target_cells_are_skipped() {
        let (table, schema) = table_and_schema(&[
            &["region", "sales"],
            &["East", "100"],
            &["East", ""],
            &["West", "200"],
        ]);

        let groups = Aggregator::group_summaries(&table, &schema, "region", "sales").unwrap();
        assert_eq!(groups["East"].count, 1);
        assert_eq!(groups["East"].sum, 100.0);
    }

    #[test]
    fn test_unknown_and_mismatched_columns() {
        let (table, schema) = table_and_schema(&[
            &["region", "sales"],
            &["East", "100"],
        ]);

        let err =
            Aggregator::group_summaries(&table, &schema, "nope", "sales").unwrap_err();
        assert!(matches!(err, GristError::UnknownColumn(_)));

        let err =
            Aggregator::group_summaries(&table, &schema, "region", "region").unwrap_err();
        assert!(matches!(err, GristError::NotNumeric(_)));

        let err =
            Aggregator::group_summaries(&table, &schema, "sales", "sales").unwrap_err();
        assert!(matches!(err, GristError::NotCategorical(_)));
    }

    #[test]
    fn test_group_counts() {
        let (table, _) = table_and_schema(&[
            &["region", "sales"],
            &["East", "1"],
            &["West", "2"],
            &["East", "3"],
        ]);

        let counts = Aggregator::group_counts(&table, "region").unwrap();
        assert_eq!(counts["East"], 2);
        assert_eq!(counts["West"], 1);
    }

    #[test]
    fn test_nested_sums() {
        let (table, schema) = table_and_schema(&[
            &["region", "product", "sales"],
            &["East", "widget", "10"],
            &["East", "gadget", "20"],
            &["East", "widget", "5"],
            &["West", "widget", "7"],
        ]);

        let nested =
            Aggregator::nested_sums(&table, &schema, "region", "product", "sales").unwrap();
        assert_eq!(nested["East"]["widget"], 15.0);
        assert_eq!(nested["East"]["gadget"], 20.0);
        assert_eq!(nested["West"]["widget"], 7.0);
    }

    #[test]
    fn test_mean_by_group() {
        let (table, schema) = table_and_schema(&[
            &["region", "sales", "units"],
            &["East", "100", "10"],
            &["East", "200", "30"],
            &["West", "50", "5"],
        ]);

        let means =
            Aggregator::mean_by_group(&table, &schema, "region", &["sales", "units"]).unwrap();
        assert_eq!(means["East"]["sales"], 150.0);
        assert_eq!(means["East"]["units"], 20.0);
        assert_eq!(means["West"]["sales"], 50.0);
    }
}
