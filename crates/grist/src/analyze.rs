//! Whole-column statistics, distributions, and rankings.

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregator;
use crate::error::Result;
use crate::input::DataTable;
use crate::schema::TableSchema;

/// Summary statistics for one numeric column.
///
/// The optional fields are `None` when the column has no parseable
/// values, so an empty dataset still produces a valid report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
}

impl NumericSummary {
    fn empty() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            mean: None,
            min: None,
            max: None,
            median: None,
            std_dev: None,
        }
    }

    /// Max minus min, when both exist.
    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }
}

/// One row of a categorical distribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub value: String,
    pub count: usize,
    /// Share of total row count, in percent.
    pub percentage: f64,
}

/// Metric used to order groups in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    Sum,
    Mean,
    Count,
}

impl RankMetric {
    pub fn label(&self) -> &'static str {
        match self {
            RankMetric::Sum => "SUM",
            RankMetric::Mean => "AVG",
            RankMetric::Count => "COUNT",
        }
    }
}

/// Computes whole-column statistics and rankings.
pub struct Analyzer;

impl Analyzer {
    /// Summary statistics for a numeric column.
    pub fn numeric_summary(table: &DataTable, column: &str) -> Result<NumericSummary> {
        let idx = table
            .column_index(column)
            .ok_or_else(|| crate::error::GristError::UnknownColumn(column.to_string()))?;

        let mut values: Vec<f64> = table
            .column_values(idx)
            .filter_map(DataTable::parse_numeric)
            .collect();

        if values.is_empty() {
            return Ok(NumericSummary::empty());
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;

        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let min = values[0];
        let max = values[count - 1];

        let median = if count % 2 == 1 {
            values[count / 2]
        } else {
            (values[count / 2 - 1] + values[count / 2]) / 2.0
        };

        // Sample standard deviation; needs at least two values.
        let std_dev = if count > 1 {
            let variance = values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        Ok(NumericSummary {
            count,
            sum,
            mean: Some(mean),
            min: Some(min),
            max: Some(max),
            median: Some(median),
            std_dev,
        })
    }

    /// Frequency and percentage breakdown of a categorical column.
    ///
    /// Sorted by count descending; ties keep first-appearance order.
    /// Percentages are relative to the total row count of the table.
    pub fn distribution(table: &DataTable, column: &str) -> Result<Vec<DistributionEntry>> {
        let counts = Aggregator::group_counts(table, column)?;
        let total = table.row_count();

        let mut entries: Vec<DistributionEntry> = counts
            .into_iter()
            .map(|(value, count)| DistributionEntry {
                value,
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            })
            .collect();

        // Stable sort preserves insertion order for equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(entries)
    }

    /// Top `limit` groups of `group_col` by an aggregate of `value_col`.
    ///
    /// Descending by the metric; ties keep first-appearance order.
    pub fn rank(
        table: &DataTable,
        schema: &TableSchema,
        group_col: &str,
        value_col: &str,
        metric: RankMetric,
        limit: usize,
    ) -> Result<Vec<(String, f64)>> {
        let groups = Aggregator::group_summaries(table, schema, group_col, value_col)?;

        let mut ranked: Vec<(String, f64)> = groups
            .into_iter()
            .map(|(key, summary)| {
                let value = match metric {
                    RankMetric::Sum => summary.sum,
                    RankMetric::Mean => summary.mean(),
                    RankMetric::Count => summary.count as f64,
                };
                (key, value)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);
        Ok(ranked)
    }
}
