//! Registry trait and error types.
//!
//! # Doc Id Convention
//!
//! Documents are addressed by slash-separated ids without an extension:
//! - `"intro"` - top-level document
//! - `"tutorial-basics/create-a-document"` - nested document
//!
//! Ids are stable across builds; backends map them to their internal
//! storage format.

/// Metadata for a registered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocMetadata {
    /// Document title (first heading, or derived from the file name).
    pub title: String,
    /// Site path the document is served under (e.g. `/docs/intro`).
    pub path: String,
}

/// Registry error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No document is registered under the given id.
    #[error("document not found: {0}")]
    NotFound(String),
}

/// Read-only store of documents addressed by stable id.
///
/// Backends are queried synchronously during assembly. Implementations
/// must be safe to share across threads even though assembly itself is
/// single-threaded.
pub trait ContentRegistry: Send + Sync {
    /// Check whether a document with the given id exists.
    fn exists(&self, doc_id: &str) -> bool;

    /// Look up title and site path for a document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the id is not registered.
    fn metadata(&self, doc_id: &str) -> Result<DocMetadata, RegistryError>;
}
