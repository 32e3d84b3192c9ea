//! wayfind CLI - documentation site assembly.
//!
//! Provides commands for:
//! - `check`: validate the site declarations against the content registry
//! - `dump`: emit the assembled site model as JSON for the renderer

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DumpArgs};
use output::Output;

/// wayfind - documentation site assembly.
#[derive(Parser)]
#[command(name = "wayfind", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site declarations against the content registry.
    Check(CheckArgs),
    /// Assemble the site and print the model as JSON.
    Dump(DumpArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Dump(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Dump(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
