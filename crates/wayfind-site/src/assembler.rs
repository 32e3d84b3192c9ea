//! Dependency-ordered site assembly.
//!
//! Assembly runs once per build, single-threaded and synchronous, in the
//! order configuration, sidebars, link surface, feature listing. A failed
//! stage aborts assembly; nothing downstream of it runs, and there is no
//! partial-success mode.

use std::collections::{BTreeMap, BTreeSet};

use wayfind_config::Config;
use wayfind_registry::ContentRegistry;
use wayfind_sidebar::SidebarError;
use wayfind_surface::SurfaceError;

use crate::model::SiteModel;

/// Assembly error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    /// One or more sidebar trees failed to resolve.
    ///
    /// Trees resolve independently and every per-tree failure is collected
    /// before the build aborts: fail-fast within a tree, aggregate across
    /// trees.
    #[error("{}", format_failures(.0))]
    Sidebars(Vec<SidebarError>),
    /// Navbar, footer or feature validation failed.
    #[error("{0}")]
    Surface(#[from] SurfaceError),
}

/// One failure per line, in tree declaration order.
fn format_failures(errors: &[SidebarError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the full site model.
///
/// The registry is queried for every sidebar document reference; navbar,
/// footer and feature links are validated against the declared sidebar ids
/// and the configured base path.
///
/// # Errors
///
/// Returns [`AssembleError::Sidebars`] with every failed tree if any
/// sidebar fails to resolve, or [`AssembleError::Surface`] for the first
/// invalid navbar, footer or feature declaration.
pub fn assemble(
    config: &Config,
    registry: &dyn ContentRegistry,
) -> Result<SiteModel, AssembleError> {
    // Sidebars resolve independently; a failure in one tree does not block
    // resolution of the others, but any failure fails the build
    let mut sidebars = BTreeMap::new();
    let mut failures = Vec::new();
    for (sidebar_id, tree) in &config.sidebars {
        match wayfind_sidebar::resolve(sidebar_id, tree, registry) {
            Ok(resolved) => {
                sidebars.insert(sidebar_id.clone(), resolved);
            }
            Err(err) => failures.push(err),
        }
    }
    if !failures.is_empty() {
        return Err(AssembleError::Sidebars(failures));
    }

    let sidebar_ids: BTreeSet<String> = config.sidebars.keys().cloned().collect();
    let base_url = &config.site_resolved.base_url;

    let navbar = wayfind_surface::validate_navbar(&config.navbar, &sidebar_ids, base_url)?;
    let footer = wayfind_surface::validate_footer(&config.footer, base_url)?;
    let features = wayfind_surface::build_features(&config.features, base_url)?;

    Ok(SiteModel {
        site: config.site_resolved.clone(),
        sidebars,
        navbar,
        footer,
        features,
    })
}
