//! Run command - execute the full analysis pipeline.

use std::path::PathBuf;

use colored::Colorize;
use grist::{Engine, EngineConfig, ReaderConfig};

#[allow(clippy::too_many_arguments)]
pub fn run(
    source: String,
    top_n: usize,
    output: PathBuf,
    monetary: Vec<String>,
    numeric_threshold: f64,
    delimiter: u8,
    verbose: bool,
) -> grist::Result<()> {
    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        source.as_str().white()
    );
    println!();

    let report_path = output.clone();
    let engine = Engine::with_config(EngineConfig {
        reader: ReaderConfig {
            delimiter,
            ..ReaderConfig::default()
        },
        numeric_threshold,
        top_n,
        output_path: output,
        monetary_hints: monetary,
    });

    // The engine's tee sink prints the report and writes the file.
    let result = engine.run(&source)?;

    if verbose {
        println!();
        println!("{}", "Schema:".yellow().bold());
        for col in &result.schema.columns {
            println!(
                "  {:20} {:12} {} non-missing, {} missing",
                col.name,
                format!("{:?}", col.column_type),
                col.non_missing,
                col.missing
            );
        }
        println!();
        println!("Source hash: {}", result.source.hash);
    }

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        report_path.display().to_string().white()
    );

    Ok(())
}
