//! Named, shared tree templates
//!
//! A library is a directory of `*.json` template files. Each file becomes one
//! immutable [`FileTree`] keyed by its file stem, shared behind an `Arc` so any
//! number of viewers can open it at once.

use crate::file_tree::template::{load_nodes, TemplateError};
use crate::file_tree::FileTree;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    trees: BTreeMap<String, Arc<FileTree>>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in `dir`
    ///
    /// Files that fail to load are skipped with a warning; failing to read the
    /// directory itself is an error.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| TemplateError::Io(e.to_string()))?;
        let mut library = Self::new();

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!("Failed to read entry in {:?}: {}", dir, e);
                    continue;
                }
            };
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match load_nodes(&path) {
                Ok(nodes) => {
                    tracing::debug!("Loaded template {:?} from {:?}", name, path);
                    library.insert(name, FileTree::from_nodes(nodes));
                }
                Err(e) => tracing::warn!("Skipping template {:?}: {}", path, e),
            }
        }

        Ok(library)
    }

    /// Add or replace a template, returning the shared handle
    pub fn insert(&mut self, name: impl Into<String>, tree: FileTree) -> Arc<FileTree> {
        let tree = Arc::new(tree);
        self.trees.insert(name.into(), Arc::clone(&tree));
        tree
    }

    /// Shared handle to a template
    pub fn get(&self, name: &str) -> Option<Arc<FileTree>> {
        self.trees.get(name).cloned()
    }

    /// Template names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
