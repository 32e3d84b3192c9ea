//! Link surface and feature listing for the wayfind documentation engine.
//!
//! The link surface is the combined set of navbar and footer entries; the
//! feature listing is the ordered list of landing-page cards. This crate
//! validates and normalizes all of them:
//! - navbar items partition into leading/trailing groups with declaration
//!   order preserved within each group
//! - internal paths must be absolute and within the configured base path
//! - external urls must carry an http(s) scheme (syntactic check only,
//!   nothing is fetched)
//! - feature cards keep their declaration order as the only rendering key
//!
//! All checks run at build time; every error is a declaration defect.

mod error;
mod features;
mod footer;
mod link;
mod navbar;

pub use error::SurfaceError;
pub use features::{FeatureItem, ValidatedFeature, build_features};
pub use footer::{FooterGroup, FooterLink, ValidatedFooterGroup, ValidatedFooterLink, validate_footer};
pub use link::{LinkKind, LinkTarget};
pub use navbar::{NavTarget, NavbarEntry, NavbarItem, NavbarLayout, Position, validate_navbar};
