//! Grist: CSV analysis and reporting engine for tabular datasets.
//!
//! Grist runs a single-pass pipeline over a CSV source: load, infer
//! per-column types (numeric vs categorical), aggregate and summarize,
//! then render a deterministic textual report to stdout and a result
//! file.
//!
//! # Example
//!
//! ```no_run
//! use grist::Engine;
//!
//! let engine = Engine::new();
//! let result = engine.run("data/sales.csv").unwrap();
//!
//! println!("Rows analyzed: {}", result.source.row_count);
//! ```

pub mod aggregate;
pub mod analyze;
pub mod error;
pub mod infer;
pub mod input;
pub mod report;
pub mod schema;

mod engine;

pub use crate::engine::{Engine, EngineConfig, LoadedData, RunReport, DEFAULT_OUTPUT_PATH};
pub use aggregate::{Aggregator, GroupSummary};
pub use analyze::{Analyzer, DistributionEntry, NumericSummary, RankMetric};
pub use error::{GristError, Result};
pub use infer::TypeInference;
pub use input::{DataTable, Reader, ReaderConfig, SourceMetadata};
pub use report::{render, BufferSink, Report, ReportSink, Section, TeeSink};
pub use schema::{ColumnSchema, ColumnType, TableSchema};
