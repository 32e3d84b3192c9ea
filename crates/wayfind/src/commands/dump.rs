//! `wayfind dump` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use wayfind_site::assemble;

use crate::commands::load_site;
use crate::error::CliError;

/// Arguments for the dump command.
#[derive(Args)]
pub(crate) struct DumpArgs {
    /// Path to configuration file (default: auto-discover site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Docs source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl DumpArgs {
    /// Execute the dump command, writing the model JSON to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, assembly or
    /// serialization fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (config, registry) = load_site(self.config.as_deref(), self.source_dir)?;
        let model = assemble(&config, &registry)?;

        let json = serde_json::to_string_pretty(&model.view())?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;

        Ok(())
    }
}
