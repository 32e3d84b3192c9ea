//! Sidebar model for the wayfind documentation engine.
//!
//! A sidebar is a named, ordered navigation hierarchy of documents and
//! categories. This crate provides:
//! - Declaration types deserialized from `site.toml` ([`SidebarNode`])
//! - [`resolve`]: validation of every document reference against the
//!   content registry
//! - [`ResolvedSidebar`]: the immutable resolved tree with derived
//!   navigation data (reading order, previous/next, breadcrumbs)
//!
//! # Example
//!
//! ```
//! use wayfind_registry::MockRegistry;
//! use wayfind_sidebar::{Category, SidebarNode, resolve};
//!
//! let registry = MockRegistry::new()
//!     .with_doc("intro", "Introduction")
//!     .with_doc("setup", "Setup");
//!
//! let tree = vec![
//!     SidebarNode::Doc("intro".to_owned()),
//!     SidebarNode::Category(Category {
//!         label: "Getting Started".to_owned(),
//!         items: vec![SidebarNode::Doc("setup".to_owned())],
//!     }),
//! ];
//!
//! let sidebar = resolve("docs", &tree, &registry).unwrap();
//! assert_eq!(sidebar.flatten(), vec!["intro", "setup"]);
//! ```

mod decl;
mod error;
mod resolved;
mod resolver;

pub use decl::{Category, SidebarNode, SidebarTree};
pub use error::SidebarError;
pub use resolved::{NavItem, ResolvedSidebar, SidebarDoc};
pub use resolver::resolve;
