//! Site model assembly for the wayfind documentation engine.
//!
//! This crate runs the dependency-ordered assembly pipeline: the loaded
//! configuration feeds sidebar resolution against the content registry,
//! then link surface validation, then the feature listing. The result is
//! one immutable [`SiteModel`] with everything a renderer needs; the
//! renderer must treat all of it as read-only.
//!
//! # Quick Start
//!
//! ```
//! use std::path::Path;
//! use wayfind_config::Config;
//! use wayfind_registry::MockRegistry;
//! use wayfind_site::assemble;
//!
//! let toml = r#"
//! [site]
//! title = "Docs"
//! base_url = "/"
//!
//! [sidebars]
//! docs = ["intro"]
//! "#;
//! let config = Config::from_toml_str(toml, Path::new(".")).unwrap();
//! let registry = MockRegistry::new().with_doc("intro", "Introduction");
//!
//! let model = assemble(&config, &registry).unwrap();
//! assert_eq!(model.sidebars["docs"].flatten(), vec!["intro"]);
//! ```

mod assembler;
mod model;

pub use assembler::{AssembleError, assemble};
pub use model::{SequenceEntry, SidebarView, SiteModel, SiteView};
