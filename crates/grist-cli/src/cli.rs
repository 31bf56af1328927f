//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// grist: CSV analysis and reporting engine
#[derive(Parser)]
#[command(name = "grist")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CSV source and write the report
    Run {
        /// Path or http(s) URL of the CSV data
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Group limit for ranking sections
        #[arg(short = 'n', long, default_value = "10")]
        top_n: usize,

        /// Output path for the report file
        #[arg(short, long, default_value = grist::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Column to render as currency (repeatable; default: name-based)
        #[arg(short, long = "monetary", value_name = "COLUMN")]
        monetary: Vec<String>,

        /// Fraction of values that must parse as numbers for a Numeric tag
        #[arg(long, default_value = "1.0")]
        numeric_threshold: f64,

        /// Field delimiter
        #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,
    },

    /// Load a CSV source and print the inferred schema only
    Schema {
        /// Path or http(s) URL of the CSV data
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Field delimiter
        #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,
    },
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] => Ok(*b),
        [b'\\', b't'] => Ok(b'\t'),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}
