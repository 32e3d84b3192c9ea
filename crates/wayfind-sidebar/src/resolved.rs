//! Resolved sidebar trees.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec` with parent/children relationships
//! tracked by indices. This provides:
//! - O(1) document lookups via the `doc_index` `HashMap`
//! - O(d) breadcrumb building where d is the node depth
//!
//! The reading order (`sequence`) is computed once at build time, so
//! flattening and neighbor lookups never re-walk the tree.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::SidebarError;

/// A resolved document reference with registry metadata captured at
/// resolution time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarDoc {
    /// Stable document id.
    pub id: String,
    /// Document title from the registry.
    pub title: String,
    /// Site path the document is served under.
    pub path: String,
}

/// Node payload in a resolved tree.
#[derive(Clone, Debug, PartialEq, Eq)]
enum NodeKind {
    Doc(SidebarDoc),
    Category { label: String },
}

/// Navigation item with children, the nested projection handed to the
/// renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label (document title or category label).
    pub label: String,
    /// Document id for document nodes, `None` for categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Link target path for document nodes, `None` for categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// A fully resolved, immutable sidebar tree.
///
/// Every document node carries registry metadata; derived navigation data
/// (reading order, previous/next, breadcrumbs) is available without
/// further registry access.
#[derive(Debug)]
pub struct ResolvedSidebar {
    id: String,
    nodes: Vec<NodeKind>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
    /// Document id to node index of the first declared occurrence.
    doc_index: HashMap<String, usize>,
    /// Depth-first document linearization (node indices).
    sequence: Vec<usize>,
}

impl ResolvedSidebar {
    /// The tree id this sidebar was declared under.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the document is a member of this tree.
    #[must_use]
    pub fn contains(&self, doc_id: &str) -> bool {
        self.doc_index.contains_key(doc_id)
    }

    /// Look up a resolved document by id.
    #[must_use]
    pub fn doc(&self, doc_id: &str) -> Option<&SidebarDoc> {
        self.doc_index.get(doc_id).map(|&idx| match &self.nodes[idx] {
            NodeKind::Doc(doc) => doc,
            NodeKind::Category { .. } => unreachable!("doc_index only holds document nodes"),
        })
    }

    /// Depth-first, order-preserving linearization of document ids.
    ///
    /// Categories are not navigable leaves and are skipped, but their
    /// children contribute in declared order. The result is deterministic:
    /// calling this twice yields identical sequences.
    #[must_use]
    pub fn flatten(&self) -> Vec<&str> {
        self.docs().map(|doc| doc.id.as_str()).collect()
    }

    /// Documents in reading order, with their registry metadata.
    pub fn docs(&self) -> impl Iterator<Item = &SidebarDoc> {
        self.sequence.iter().map(|&idx| match &self.nodes[idx] {
            NodeKind::Doc(doc) => doc,
            NodeKind::Category { .. } => unreachable!("sequence only holds document nodes"),
        })
    }

    /// Previous and next documents around `doc_id` in reading order.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotInTree`] if the id is not a member of
    /// this tree.
    pub fn neighbors(
        &self,
        doc_id: &str,
    ) -> Result<(Option<&SidebarDoc>, Option<&SidebarDoc>), SidebarError> {
        let node_idx = self.require_member(doc_id)?;
        let pos = self
            .sequence
            .iter()
            .position(|&idx| idx == node_idx)
            .unwrap_or_default();

        let doc_at = |seq_pos: usize| {
            self.sequence.get(seq_pos).map(|&idx| match &self.nodes[idx] {
                NodeKind::Doc(doc) => doc,
                NodeKind::Category { .. } => unreachable!("sequence only holds document nodes"),
            })
        };

        let prev = pos.checked_sub(1).and_then(doc_at);
        let next = doc_at(pos + 1);
        Ok((prev, next))
    }

    /// Chain of enclosing category labels from the root down to the node
    /// containing `doc_id`.
    ///
    /// A top-level document yields an empty chain.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotInTree`] if the id is not a member of
    /// this tree.
    pub fn breadcrumbs(&self, doc_id: &str) -> Result<Vec<&str>, SidebarError> {
        let node_idx = self.require_member(doc_id)?;

        let mut labels = Vec::new();
        let mut current = self.parents[node_idx];
        while let Some(idx) = current {
            if let NodeKind::Category { label } = &self.nodes[idx] {
                labels.push(label.as_str());
            }
            current = self.parents[idx];
        }
        labels.reverse();
        Ok(labels)
    }

    /// Nested navigation items in declaration order.
    #[must_use]
    pub fn items(&self) -> Vec<NavItem> {
        self.roots.iter().map(|&idx| self.build_item(idx)).collect()
    }

    /// Recursively build a [`NavItem`] from a node index.
    fn build_item(&self, idx: usize) -> NavItem {
        let children = self.children[idx]
            .iter()
            .map(|&child| self.build_item(child))
            .collect();

        match &self.nodes[idx] {
            NodeKind::Doc(doc) => NavItem {
                label: doc.title.clone(),
                doc: Some(doc.id.clone()),
                path: Some(doc.path.clone()),
                children,
            },
            NodeKind::Category { label } => NavItem {
                label: label.clone(),
                doc: None,
                path: None,
                children,
            },
        }
    }

    /// Node index for a member document, or `NotInTree`.
    fn require_member(&self, doc_id: &str) -> Result<usize, SidebarError> {
        self.doc_index
            .get(doc_id)
            .copied()
            .ok_or_else(|| SidebarError::NotInTree {
                doc_id: doc_id.to_owned(),
                sidebar_id: self.id.clone(),
            })
    }
}

/// Builder for constructing [`ResolvedSidebar`] instances.
pub(crate) struct ResolvedSidebarBuilder {
    id: String,
    nodes: Vec<NodeKind>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
    doc_index: HashMap<String, usize>,
    sequence: Vec<usize>,
}

impl ResolvedSidebarBuilder {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            nodes: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            roots: Vec::new(),
            doc_index: HashMap::new(),
            sequence: Vec::new(),
        }
    }

    /// Add a resolved document node; returns its index.
    pub(crate) fn add_doc(&mut self, doc: SidebarDoc, parent: Option<usize>) -> usize {
        let doc_id = doc.id.clone();
        let idx = self.add_node(NodeKind::Doc(doc), parent);
        // First declared occurrence wins for id-keyed lookups
        self.doc_index.entry(doc_id).or_insert(idx);
        self.sequence.push(idx);
        idx
    }

    /// Add a category node; returns its index for nesting children.
    pub(crate) fn add_category(&mut self, label: String, parent: Option<usize>) -> usize {
        self.add_node(NodeKind::Category { label }, parent)
    }

    fn add_node(&mut self, kind: NodeKind, parent: Option<usize>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(kind);
        self.children.push(Vec::new());
        self.parents.push(parent);

        if let Some(parent_idx) = parent {
            self.children[parent_idx].push(idx);
        } else {
            self.roots.push(idx);
        }
        idx
    }

    pub(crate) fn build(self) -> ResolvedSidebar {
        ResolvedSidebar {
            id: self.id,
            nodes: self.nodes,
            children: self.children,
            parents: self.parents,
            roots: self.roots,
            doc_index: self.doc_index,
            sequence: self.sequence,
        }
    }
}
