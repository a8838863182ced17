//! symdoc CLI - Swift documentation generator.
//!
//! Provides commands for:
//! - `generate`: Build the documentation manifest from indexer output
//! - `coverage`: Print the documentation coverage percentage

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CoverageArgs, GenerateArgs};
use output::Output;

/// symdoc - Swift documentation generator.
#[derive(Parser)]
#[command(name = "symdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the documentation manifest.
    Generate(GenerateArgs),
    /// Print the documentation coverage percentage.
    Coverage(CoverageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for generate command
    let verbose = matches!(&cli.command, Commands::Generate(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Coverage(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
