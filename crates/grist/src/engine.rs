//! The analysis engine: wires loading, inference, aggregation, and
//! reporting into one synchronous run.

use std::path::PathBuf;

use crate::aggregate::Aggregator;
use crate::analyze::{Analyzer, RankMetric};
use crate::error::Result;
use crate::infer::TypeInference;
use crate::input::{DataTable, Reader, ReaderConfig, SourceMetadata};
use crate::report::{
    render, BreakdownRow, NumericSummaryEntry, Report, ReportSink, Section, TeeSink,
};
use crate::schema::TableSchema;

/// Default path for the result file.
pub const DEFAULT_OUTPUT_PATH: &str = "analysisResult/analysis_results.txt";

/// How many numeric columns get a per-category breakdown section.
const MAX_BREAKDOWN_COLUMNS: usize = 3;
/// How many categorical columns get a distribution section.
const MAX_DISTRIBUTION_COLUMNS: usize = 2;

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// CSV reader configuration.
    pub reader: ReaderConfig,
    /// Numeric classification threshold (1.0 = strict).
    pub numeric_threshold: f64,
    /// Group limit for ranking sections.
    pub top_n: usize,
    /// Where the rendered report is written.
    pub output_path: PathBuf,
    /// Columns rendered as currency. Empty = name-based defaults.
    pub monetary_hints: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reader: ReaderConfig::default(),
            numeric_threshold: 1.0,
            top_n: 10,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            monetary_hints: Vec::new(),
        }
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Provenance of the loaded data.
    pub source: SourceMetadata,
    /// Inferred column schema.
    pub schema: TableSchema,
    /// The structured report.
    pub report: Report,
    /// The rendered report text, exactly as written to the sinks.
    pub rendered: String,
}

/// Loaded data plus its inferred schema, before reporting.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub table: DataTable,
    pub schema: TableSchema,
    pub source: SourceMetadata,
}

/// The main analysis engine.
pub struct Engine {
    config: EngineConfig,
    reader: Reader,
    inference: TypeInference,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let reader = Reader::with_config(config.reader.clone());
        let inference = TypeInference::new(config.numeric_threshold)
            .with_monetary_hints(config.monetary_hints.clone());
        Self {
            config,
            reader,
            inference,
        }
    }

    /// Load a source and infer its schema without reporting.
    pub fn load(&self, source: &str) -> Result<LoadedData> {
        let (table, metadata) = self.reader.read_source(source)?;
        let schema = self.inference.infer(&table);
        Ok(LoadedData {
            table,
            schema,
            source: metadata,
        })
    }

    /// Run the full pipeline and write the report to stdout plus the
    /// configured result file.
    pub fn run(&self, source: &str) -> Result<RunReport> {
        let mut sink = TeeSink::new(&self.config.output_path);
        self.run_with_sink(source, &mut sink)
    }

    /// Run the full pipeline, sending the rendered report to `sink`.
    pub fn run_with_sink(&self, source: &str, sink: &mut dyn ReportSink) -> Result<RunReport> {
        let loaded = self.load(source)?;
        let report = self.build_report(&loaded)?;
        let rendered = render(&report);

        sink.write_report(&rendered)?;

        Ok(RunReport {
            source: loaded.source,
            schema: loaded.schema,
            report,
            rendered,
        })
    }

    /// Assemble the report sections for a loaded table.
    ///
    /// Section plan: dataset summary, numeric summaries, per-category
    /// breakdowns, categorical distributions, then a top-N ranking.
    /// Sections that have no applicable columns are skipped.
    pub fn build_report(&self, loaded: &LoadedData) -> Result<Report> {
        let table = &loaded.table;
        let schema = &loaded.schema;

        let numeric = schema.numeric_columns();
        let categorical = schema.categorical_columns();

        let mut report = Report::new("ANALYSIS RESULTS");

        report.push(Section::DatasetSummary {
            records: table.row_count(),
            columns: table.column_count(),
            numeric: numeric.iter().map(|s| s.to_string()).collect(),
            categorical: categorical.iter().map(|s| s.to_string()).collect(),
        });

        if !numeric.is_empty() {
            let mut entries = Vec::with_capacity(numeric.len());
            for column in &numeric {
                entries.push(NumericSummaryEntry {
                    column: (*column).to_string(),
                    monetary: self.is_monetary(schema, column),
                    summary: Analyzer::numeric_summary(table, column)?,
                });
            }
            report.push(Section::NumericSummaries { entries });
        }

        let primary = primary_categorical(&categorical);

        if let Some(group_col) = primary {
            for value_col in numeric.iter().take(MAX_BREAKDOWN_COLUMNS) {
                let groups =
                    Aggregator::group_summaries(table, schema, group_col, value_col)?;
                let mut rows: Vec<BreakdownRow> = groups
                    .into_iter()
                    .map(|(key, summary)| BreakdownRow {
                        key,
                        sum: summary.sum,
                        mean: summary.mean(),
                        count: summary.count,
                    })
                    .collect();
                rows.sort_by(|a, b| {
                    b.sum.partial_cmp(&a.sum).unwrap_or(std::cmp::Ordering::Equal)
                });

                report.push(Section::Breakdown {
                    value_column: (*value_col).to_string(),
                    group_column: group_col.to_string(),
                    monetary: self.is_monetary(schema, value_col),
                    rows,
                });
            }
        }

        for column in categorical.iter().take(MAX_DISTRIBUTION_COLUMNS) {
            let entries = Analyzer::distribution(table, column)?;
            if entries.is_empty() && table.row_count() > 0 {
                continue;
            }
            report.push(Section::Distribution {
                column: (*column).to_string(),
                entries,
            });
        }

        if let (Some(group_col), Some(value_col)) = (primary, numeric.first()) {
            let entries = Analyzer::rank(
                table,
                schema,
                group_col,
                value_col,
                RankMetric::Sum,
                self.config.top_n,
            )?;
            report.push(Section::Ranking {
                group_column: group_col.to_string(),
                value_column: (*value_col).to_string(),
                metric: RankMetric::Sum.label().to_string(),
                limit: self.config.top_n,
                monetary: self.is_monetary(schema, value_col),
                entries,
            });
        }

        Ok(report)
    }

    fn is_monetary(&self, schema: &TableSchema, column: &str) -> bool {
        schema.column(column).is_some_and(|c| c.monetary)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// The categorical column groupings key off: one literally named
/// "category" when present, otherwise the first categorical column.
fn primary_categorical<'a>(categorical: &[&'a str]) -> Option<&'a str> {
    categorical
        .iter()
        .find(|c| c.eq_ignore_ascii_case("category"))
        .or_else(|| categorical.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::BufferSink;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn run_buffered(engine: &Engine, path: &str) -> RunReport {
        let mut sink = BufferSink::new();
        engine.run_with_sink(path, &mut sink).unwrap()
    }

    #[test]
    fn test_run_sales_by_region() {
        let file = create_test_file("region,sales\nEast,100\nWest,200\nEast,50\n");
        let engine = Engine::new();
        let result = run_buffered(&engine, file.path().to_str().unwrap());

        assert_eq!(result.source.row_count, 3);
        assert_eq!(result.schema.numeric_columns(), vec!["sales"]);
        assert!(result.rendered.contains("[SALES BY REGION]"));
        assert!(result
            .rendered
            .contains("  East: Total: $150.00 | Avg: $75.00 (2 records)"));
        assert!(result
            .rendered
            .contains("  West: Total: $200.00 | Avg: $200.00 (1 records)"));
    }

    #[test]
    fn test_header_only_file_succeeds() {
        let file = create_test_file("region,sales\n");
        let engine = Engine::new();
        let result = run_buffered(&engine, file.path().to_str().unwrap());

        assert_eq!(result.source.row_count, 0);
        assert!(result.rendered.contains("Dataset: 0 records, 2 columns"));
        // No values observed, so no numeric section and no distributions.
        assert!(!result.rendered.contains("[NUMERIC METRICS SUMMARY]"));
        assert!(result.rendered.contains("Analysis Complete!"));
    }

    #[test]
    fn test_primary_categorical_prefers_category() {
        assert_eq!(
            primary_categorical(&["region", "Category", "city"]),
            Some("Category")
        );
        assert_eq!(primary_categorical(&["region", "city"]), Some("region"));
        assert_eq!(primary_categorical(&[]), None);
    }

    #[test]
    fn test_rendered_text_matches_file_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out").join("report.txt");
        let file = create_test_file("region,sales\nEast,100\nWest,200\n");

        let engine = Engine::with_config(EngineConfig {
            output_path: out.clone(),
            ..EngineConfig::default()
        });
        let result = engine.run(file.path().to_str().unwrap()).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, result.rendered);
    }

    #[test]
    fn test_repeat_runs_byte_identical() {
        let file = create_test_file("region,sales\nEast,100\nWest,200\nEast,50\n");
        let engine = Engine::new();
        let path = file.path().to_str().unwrap().to_string();

        let first = run_buffered(&engine, &path);
        let second = run_buffered(&engine, &path);
        assert_eq!(first.rendered, second.rendered);
    }

    #[test]
    fn test_load_error_propagates() {
        let engine = Engine::new();
        let err = engine.run("/no/such/input.csv").unwrap_err();
        assert_eq!(err.stage(), "load");
    }
}
