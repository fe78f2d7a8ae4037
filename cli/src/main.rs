#![deny(missing_docs)]

//! # Apimerge CLI
//!
//! Command Line Interface for consolidating per-service OpenAPI documents.
//!
//! Supported Commands:
//! - `merge`: Folds the per-service specs into one consolidated document.

use apimerge_core::{default_services, AppResult};
use clap::{Parser, Subcommand};

mod merge;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI Consolidation CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge the per-service OpenAPI specs into one document.
    Merge(merge::MergeArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Merge(args) => {
            // Injecting the static production service table
            let services = default_services();
            merge::execute(args, &services)?;
        }
    }

    Ok(())
}
