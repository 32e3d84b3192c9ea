//! Link classification and syntactic validation.

use serde::Serialize;

use crate::error::SurfaceError;

/// Syntactic classification of link strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// URL with a scheme (`https://example.com`).
    External(&'a str),
    /// Site-root-absolute path (`/docs/intro`).
    Internal(&'a str),
    /// Anything else (relative path, bare word). Never valid here: the
    /// link surface has no document to resolve relative links against.
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Classify a link string by shape alone.
    #[must_use]
    pub fn parse(link: &'a str) -> Self {
        if has_scheme(link) {
            Self::External(link)
        } else if link.starts_with('/') {
            Self::Internal(link)
        } else {
            Self::Relative(link)
        }
    }
}

/// A validated link target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkTarget {
    /// Internal site path.
    Path {
        /// Absolute path within the site base.
        to: String,
    },
    /// External URL, opaque beyond its scheme.
    External {
        /// The url as declared.
        href: String,
    },
}

/// Check whether a link carries a `scheme://` prefix.
fn has_scheme(link: &str) -> bool {
    link.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check that an external url uses http or https.
pub(crate) fn validate_url(url: &str) -> Result<(), SurfaceError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(SurfaceError::InvalidUrl {
            url: url.to_owned(),
        })
    }
}

/// Check that an internal path is absolute and within the site base path.
pub(crate) fn validate_path(path: &str, base_url: &str) -> Result<(), SurfaceError> {
    if path_within_base(path, base_url) {
        Ok(())
    } else {
        Err(SurfaceError::InvalidPath {
            path: path.to_owned(),
            base_url: base_url.to_owned(),
        })
    }
}

fn path_within_base(path: &str, base_url: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    let base = base_url.trim_end_matches('/');
    // Base "/" accepts every absolute path; otherwise the path must be the
    // base itself or a segment-aligned descendant of it
    base.is_empty()
        || path == base
        || path
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Validate a link that may be an internal path or an external url,
/// the way `DirectPath` and `ExternalLink` entries are validated.
pub(crate) fn validate_link(link: &str, base_url: &str) -> Result<LinkTarget, SurfaceError> {
    match LinkKind::parse(link) {
        LinkKind::External(url) => {
            validate_url(url)?;
            Ok(LinkTarget::External {
                href: url.to_owned(),
            })
        }
        LinkKind::Internal(path) => {
            validate_path(path, base_url)?;
            Ok(LinkTarget::Path {
                to: path.to_owned(),
            })
        }
        LinkKind::Relative(link) => Err(SurfaceError::InvalidPath {
            path: link.to_owned(),
            base_url: base_url.to_owned(),
        }),
    }
}
