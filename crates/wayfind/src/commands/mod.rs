//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod dump;

pub(crate) use check::CheckArgs;
pub(crate) use dump::DumpArgs;

use wayfind_config::{CliSettings, Config};
use wayfind_registry::FsRegistry;

use crate::error::CliError;

/// Load the configuration and open the filesystem registry it points at.
pub(crate) fn load_site(
    config_path: Option<&std::path::Path>,
    source_dir: Option<std::path::PathBuf>,
) -> Result<(Config, FsRegistry), CliError> {
    let cli_settings = CliSettings { source_dir };
    let config = Config::load(config_path, Some(&cli_settings))?;

    let route_prefix = config
        .docs_resolved
        .route_prefix(&config.site_resolved.base_url);
    let registry = FsRegistry::open(&config.docs_resolved.source_dir, &route_prefix);

    Ok((config, registry))
}
