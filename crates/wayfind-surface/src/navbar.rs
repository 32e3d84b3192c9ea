//! Navbar item validation and layout.
//!
//! Placement is first-class: items partition into a leading and a trailing
//! group rather than sorting a single list by a key, so declaration order
//! inside each group can never be disturbed by unrelated fields.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::link::{validate_path, validate_url};

/// Horizontal placement of a navbar item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Start of the navbar (default).
    #[default]
    Leading,
    /// End of the navbar.
    Trailing,
}

/// One declared navbar item.
///
/// The variant is selected by its distinguishing field: `sidebar`, `to`
/// or `href`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NavbarItem {
    /// Link into a named sidebar tree.
    SidebarRef {
        /// Id of the referenced sidebar.
        sidebar: String,
        /// Display label.
        label: String,
        /// Placement group.
        #[serde(default)]
        position: Position,
    },
    /// Direct internal path. Not checked against the registry: it may
    /// point at non-document pages such as `/blog`.
    DirectPath {
        /// Absolute path within the site base.
        to: String,
        /// Display label.
        label: String,
        /// Placement group.
        #[serde(default)]
        position: Position,
    },
    /// External URL; opaque, never checked for reachability.
    ExternalLink {
        /// The url as declared.
        href: String,
        /// Display label.
        label: String,
        /// Placement group.
        #[serde(default)]
        position: Position,
    },
}

/// Validated navbar target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavTarget {
    /// Link into a named sidebar tree.
    Sidebar {
        /// Id of the referenced sidebar.
        sidebar: String,
    },
    /// Internal site path.
    Path {
        /// Absolute path within the site base.
        to: String,
    },
    /// External URL.
    External {
        /// The url as declared.
        href: String,
    },
}

/// A validated navbar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarEntry {
    /// Display label.
    pub label: String,
    /// Validated target.
    #[serde(flatten)]
    pub target: NavTarget,
}

/// Navbar entries partitioned by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavbarLayout {
    /// Leading-group entries in declaration order.
    pub leading: Vec<NavbarEntry>,
    /// Trailing-group entries in declaration order.
    pub trailing: Vec<NavbarEntry>,
}

/// Validate navbar items and partition them by position.
///
/// `sidebar_ids` is the set of declared sidebar tree ids.
///
/// # Errors
///
/// Returns the first [`SurfaceError`] in declaration order: an
/// `UnknownSidebar` reference, an `InvalidPath` or an `InvalidUrl`.
pub fn validate_navbar(
    items: &[NavbarItem],
    sidebar_ids: &BTreeSet<String>,
    base_url: &str,
) -> Result<NavbarLayout, SurfaceError> {
    let mut layout = NavbarLayout::default();

    for item in items {
        let (entry, position) = match item {
            NavbarItem::SidebarRef {
                sidebar,
                label,
                position,
            } => {
                if !sidebar_ids.contains(sidebar) {
                    return Err(SurfaceError::UnknownSidebar {
                        sidebar_id: sidebar.clone(),
                        label: label.clone(),
                    });
                }
                (
                    NavbarEntry {
                        label: label.clone(),
                        target: NavTarget::Sidebar {
                            sidebar: sidebar.clone(),
                        },
                    },
                    *position,
                )
            }
            NavbarItem::DirectPath {
                to,
                label,
                position,
            } => {
                validate_path(to, base_url)?;
                (
                    NavbarEntry {
                        label: label.clone(),
                        target: NavTarget::Path { to: to.clone() },
                    },
                    *position,
                )
            }
            NavbarItem::ExternalLink {
                href,
                label,
                position,
            } => {
                validate_url(href)?;
                (
                    NavbarEntry {
                        label: label.clone(),
                        target: NavTarget::External { href: href.clone() },
                    },
                    *position,
                )
            }
        };

        match position {
            Position::Leading => layout.leading.push(entry),
            Position::Trailing => layout.trailing.push(entry),
        }
    }

    Ok(layout)
}
