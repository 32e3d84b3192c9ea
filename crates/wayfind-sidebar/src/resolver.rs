//! Sidebar resolution against the content registry.

use wayfind_registry::ContentRegistry;

use crate::decl::SidebarNode;
use crate::error::SidebarError;
use crate::resolved::{ResolvedSidebar, ResolvedSidebarBuilder, SidebarDoc};

/// Resolve one declared sidebar tree.
///
/// Walks the declaration depth-first in declared order and verifies every
/// document reference against the registry. Resolution stops at the first
/// unknown document: a broken tree must never partially resolve into a
/// navigation with dead links.
///
/// Trees are independent namespaces; the same document id may appear in
/// any number of trees.
///
/// # Errors
///
/// Returns [`SidebarError::UnknownDocument`] for the first reference that
/// is absent from the registry.
pub fn resolve(
    sidebar_id: &str,
    tree: &[SidebarNode],
    registry: &dyn ContentRegistry,
) -> Result<ResolvedSidebar, SidebarError> {
    let mut builder = ResolvedSidebarBuilder::new(sidebar_id.to_owned());
    resolve_nodes(sidebar_id, tree, None, registry, &mut builder)?;
    Ok(builder.build())
}

/// Resolve a run of sibling nodes under `parent`.
fn resolve_nodes(
    sidebar_id: &str,
    nodes: &[SidebarNode],
    parent: Option<usize>,
    registry: &dyn ContentRegistry,
    builder: &mut ResolvedSidebarBuilder,
) -> Result<(), SidebarError> {
    for node in nodes {
        match node {
            SidebarNode::Doc(doc_id) => {
                let meta = registry.metadata(doc_id).map_err(|_| {
                    SidebarError::UnknownDocument {
                        doc_id: doc_id.clone(),
                        sidebar_id: sidebar_id.to_owned(),
                    }
                })?;
                builder.add_doc(
                    SidebarDoc {
                        id: doc_id.clone(),
                        title: meta.title,
                        path: meta.path,
                    },
                    parent,
                );
            }
            SidebarNode::Category(category) => {
                let idx = builder.add_category(category.label.clone(), parent);
                resolve_nodes(sidebar_id, &category.items, Some(idx), registry, builder)?;
            }
        }
    }
    Ok(())
}
