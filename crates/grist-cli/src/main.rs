//! grist CLI - CSV analysis and reporting.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            source,
            top_n,
            output,
            monetary,
            numeric_threshold,
            delimiter,
        } => commands::run::run(
            source,
            top_n,
            output,
            monetary,
            numeric_threshold,
            delimiter,
            cli.verbose,
        ),

        Commands::Schema { source, delimiter } => {
            commands::schema::run(source, delimiter, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error ({}): {}", e.stage(), e);
        std::process::exit(1);
    }
}
