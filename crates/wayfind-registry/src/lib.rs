//! Content registry for the wayfind documentation engine.
//!
//! The registry is the store of documents addressed by stable id. The
//! configuration layer queries it to verify that every declared navigation
//! reference points at a real document; it never writes to it.
//!
//! The crate provides:
//! - [`ContentRegistry`] trait with `exists()` and `metadata()` lookups
//! - [`FsRegistry`] implementation scanning a markdown source directory
//! - [`MockRegistry`] for testing (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wayfind_registry::{ContentRegistry, FsRegistry};
//!
//! let registry = FsRegistry::open(Path::new("docs"), "/docs");
//! if registry.exists("intro") {
//!     let meta = registry.metadata("intro").unwrap();
//!     println!("{} -> {}", meta.title, meta.path);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod registry;

pub use fs::FsRegistry;
#[cfg(feature = "mock")]
pub use mock::MockRegistry;
pub use registry::{ContentRegistry, DocMetadata, RegistryError};
