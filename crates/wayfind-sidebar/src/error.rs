//! Sidebar error types.

/// Errors raised while resolving or querying a sidebar tree.
///
/// Both variants are build-time declaration defects, never retried.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SidebarError {
    /// A declared reference points at a document the registry does not know.
    #[error("sidebar `{sidebar_id}` references unknown document `{doc_id}`")]
    UnknownDocument {
        /// The missing document id.
        doc_id: String,
        /// The tree containing the broken reference.
        sidebar_id: String,
    },
    /// The document may exist, but it is not a member of this tree.
    ///
    /// Raised by per-tree lookups (breadcrumbs, neighbors) only; a document
    /// absent from one tree is not a resolution error.
    #[error("document `{doc_id}` is not in sidebar `{sidebar_id}`")]
    NotInTree {
        /// The document id looked up.
        doc_id: String,
        /// The tree the lookup ran against.
        sidebar_id: String,
    },
}
