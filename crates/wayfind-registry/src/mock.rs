//! Mock registry implementation for testing.
//!
//! Provides [`MockRegistry`] for unit testing without filesystem access.

use std::collections::HashMap;

use crate::registry::{ContentRegistry, DocMetadata, RegistryError};

/// In-memory registry for tests.
///
/// Use the builder methods to register documents.
///
/// # Example
///
/// ```
/// use wayfind_registry::{ContentRegistry, MockRegistry};
///
/// let registry = MockRegistry::new()
///     .with_doc("intro", "Introduction")
///     .with_doc("setup", "Setup");
///
/// assert!(registry.exists("intro"));
/// assert!(!registry.exists("deploy"));
/// ```
#[derive(Debug, Default)]
pub struct MockRegistry {
    docs: HashMap<String, DocMetadata>,
}

impl MockRegistry {
    /// Create a new empty mock registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document with a `/docs/<id>` site path.
    #[must_use]
    pub fn with_doc(self, doc_id: impl Into<String>, title: impl Into<String>) -> Self {
        let doc_id = doc_id.into();
        let path = format!("/docs/{doc_id}");
        self.with_doc_at(doc_id, title, path)
    }

    /// Register a document with an explicit site path.
    #[must_use]
    pub fn with_doc_at(
        mut self,
        doc_id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.docs.insert(
            doc_id.into(),
            DocMetadata {
                title: title.into(),
                path: path.into(),
            },
        );
        self
    }
}

impl ContentRegistry for MockRegistry {
    fn exists(&self, doc_id: &str) -> bool {
        self.docs.contains_key(doc_id)
    }

    fn metadata(&self, doc_id: &str) -> Result<DocMetadata, RegistryError> {
        self.docs
            .get(doc_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(doc_id.to_owned()))
    }
}
