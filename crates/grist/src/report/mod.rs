//! Report model, textual rendering, and output sinks.
//!
//! A [`Report`] is built once per run and is immutable afterwards.
//! Rendering is a pure function of the report; side effects live behind
//! the [`ReportSink`] trait.

mod render;
mod sink;

pub use render::render;
pub use sink::{BufferSink, ReportSink, TeeSink};

use serde::{Deserialize, Serialize};

use crate::analyze::{DistributionEntry, NumericSummary};

/// One group's line in a breakdown section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub key: String,
    pub sum: f64,
    pub mean: f64,
    pub count: usize,
}

/// A named section of the analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Record/column counts and the inferred column split.
    DatasetSummary {
        records: usize,
        columns: usize,
        numeric: Vec<String>,
        categorical: Vec<String>,
    },
    /// Summary statistics for every numeric column.
    NumericSummaries {
        entries: Vec<NumericSummaryEntry>,
    },
    /// Per-group totals of a numeric column by a categorical column.
    Breakdown {
        value_column: String,
        group_column: String,
        monetary: bool,
        rows: Vec<BreakdownRow>,
    },
    /// Frequency table for a categorical column.
    Distribution {
        column: String,
        entries: Vec<DistributionEntry>,
    },
    /// Top-N groups by an aggregate metric.
    Ranking {
        group_column: String,
        value_column: String,
        metric: String,
        limit: usize,
        monetary: bool,
        entries: Vec<(String, f64)>,
    },
}

/// A numeric column's summary plus its rendering hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummaryEntry {
    pub column: String,
    pub monetary: bool,
    pub summary: NumericSummary,
}

/// An ordered sequence of report sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }
}
