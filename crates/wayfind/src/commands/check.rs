//! `wayfind check` command implementation.

use std::path::PathBuf;

use clap::Args;
use wayfind_site::assemble;

use crate::commands::load_site;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
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

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or assembly fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (config, registry) = load_site(self.config.as_deref(), self.source_dir)?;

        output.info(&format!(
            "{} documents in {}",
            registry.len(),
            config.docs_resolved.source_dir.display()
        ));

        let model = assemble(&config, &registry)?;

        output.info(&format!("{} sidebars resolved", model.sidebars.len()));
        output.info(&format!(
            "{} navbar items ({} leading, {} trailing)",
            model.navbar.leading.len() + model.navbar.trailing.len(),
            model.navbar.leading.len(),
            model.navbar.trailing.len()
        ));
        output.info(&format!("{} footer groups", model.footer.len()));
        output.info(&format!("{} feature cards", model.features.len()));
        output.success("Site declarations are valid");

        Ok(())
    }
}
