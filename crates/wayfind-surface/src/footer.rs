//! Footer group validation.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::link::{LinkTarget, validate_path, validate_url};

/// One declared footer link: `{ label, to }` or `{ label, href }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FooterLink {
    /// Internal site path.
    Path {
        /// Display label.
        label: String,
        /// Absolute path within the site base.
        to: String,
    },
    /// External URL.
    External {
        /// Display label.
        label: String,
        /// The url as declared.
        href: String,
    },
}

/// A declared footer group: a title over an ordered run of links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterGroup {
    /// Group title.
    pub title: String,
    /// Links in declaration order.
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// A validated footer link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedFooterLink {
    /// Display label.
    pub label: String,
    /// Validated target.
    #[serde(flatten)]
    pub target: LinkTarget,
}

/// A validated footer group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedFooterGroup {
    /// Group title.
    pub title: String,
    /// Validated links in declaration order.
    pub links: Vec<ValidatedFooterLink>,
}

/// Validate footer groups against the site base path.
///
/// # Errors
///
/// Returns the first [`SurfaceError`] in declaration order.
pub fn validate_footer(
    groups: &[FooterGroup],
    base_url: &str,
) -> Result<Vec<ValidatedFooterGroup>, SurfaceError> {
    groups
        .iter()
        .map(|group| {
            let links = group
                .links
                .iter()
                .map(|link| validate_footer_link(link, base_url))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ValidatedFooterGroup {
                title: group.title.clone(),
                links,
            })
        })
        .collect()
}

fn validate_footer_link(
    link: &FooterLink,
    base_url: &str,
) -> Result<ValidatedFooterLink, SurfaceError> {
    match link {
        FooterLink::Path { label, to } => {
            validate_path(to, base_url)?;
            Ok(ValidatedFooterLink {
                label: label.clone(),
                target: LinkTarget::Path { to: to.clone() },
            })
        }
        FooterLink::External { label, href } => {
            validate_url(href)?;
            Ok(ValidatedFooterLink {
                label: label.clone(),
                target: LinkTarget::External { href: href.clone() },
            })
        }
    }
}
