//! Filesystem-backed content registry.
//!
//! Scans a source directory for markdown documents once at construction
//! and answers lookups from memory afterwards. Doc ids are relative file
//! paths without the `.md` extension, using `/` separators on every
//! platform.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::registry::{ContentRegistry, DocMetadata, RegistryError};

/// Content registry backed by a directory of markdown files.
///
/// Hidden files and directories (`.`-prefixed) and underscore-prefixed
/// files (partials) are skipped during the scan.
#[derive(Debug)]
pub struct FsRegistry {
    docs: HashMap<String, DocMetadata>,
}

impl FsRegistry {
    /// Scan `source_dir` and build the registry.
    ///
    /// Documents are served under `route_prefix` (e.g. `/docs`). A missing
    /// source directory yields an empty registry with a logged warning;
    /// broken declarations are reported later by the resolvers, with the
    /// declaration context they carry.
    #[must_use]
    pub fn open(source_dir: &Path, route_prefix: &str) -> Self {
        let mut docs = HashMap::new();
        if source_dir.is_dir() {
            scan_directory(source_dir, "", route_prefix, &mut docs);
        } else {
            tracing::warn!(
                dir = %source_dir.display(),
                "Docs source directory does not exist"
            );
        }
        Self { docs }
    }

    /// Number of registered documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the registry holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl ContentRegistry for FsRegistry {
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

/// Recursively collect markdown documents under `dir`.
///
/// `id_prefix` is the slash-joined id of the directory relative to the
/// scan root (empty at the root).
fn scan_directory(
    dir: &Path,
    id_prefix: &str,
    route_prefix: &str,
    docs: &mut HashMap<String, DocMetadata>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Failed to read directory");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            let child_prefix = if id_prefix.is_empty() {
                name
            } else {
                format!("{id_prefix}/{name}")
            };
            scan_directory(&path, &child_prefix, route_prefix, docs);
        } else if let Some(stem) = name.strip_suffix(".md") {
            let doc_id = if id_prefix.is_empty() {
                stem.to_owned()
            } else {
                format!("{id_prefix}/{stem}")
            };
            let title = read_title(&path, stem);
            let site_path = format!("{route_prefix}/{doc_id}");
            docs.insert(
                doc_id,
                DocMetadata {
                    title,
                    path: site_path,
                },
            );
        }
    }
}

/// Extract a document title: first `#` heading, else the title-cased stem.
fn read_title(path: &Path, stem: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .find_map(|line| line.strip_prefix("# ").map(|t| t.trim().to_owned()))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| title_from_stem(stem)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read document");
            title_from_stem(stem)
        }
    }
}

/// Derive a title from a file stem: `"setup-guide"` becomes `"Setup Guide"`.
fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
