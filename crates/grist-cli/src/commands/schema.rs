//! Schema command - print inferred column types without reporting.

use colored::Colorize;
use grist::{Engine, EngineConfig, ReaderConfig};

pub fn run(source: String, delimiter: u8, verbose: bool) -> grist::Result<()> {
    let engine = Engine::with_config(EngineConfig {
        reader: ReaderConfig {
            delimiter,
            ..ReaderConfig::default()
        },
        ..EngineConfig::default()
    });

    let loaded = engine.load(&source)?;

    println!(
        "{} {} ({} rows, {} columns)",
        "Schema for".cyan().bold(),
        source.as_str().white(),
        loaded.source.row_count,
        loaded.source.column_count
    );
    println!();

    for col in &loaded.schema.columns {
        let tag = format!("{:?}", col.column_type);
        let tag = if col.column_type.is_numeric() {
            tag.green()
        } else {
            tag.yellow()
        };
        let money = if col.monetary { " (currency)" } else { "" };
        println!("  {:20} {}{}", col.name, tag, money);
    }

    if verbose {
        println!();
        println!("Source hash: {}", loaded.source.hash);
        println!("Loaded at:   {}", loaded.source.loaded_at.to_rfc3339());
    }

    Ok(())
}
