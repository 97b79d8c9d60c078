use super::node::NodeId;
use super::tree::FileTree;
use std::collections::HashMap;

/// Per-viewer open/closed state for the folders of a shared [`FileTree`]
///
/// Only folders whose state differs from their authored `is_open` are stored,
/// so a fresh state shows the tree exactly as authored.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    overrides: HashMap<NodeId, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a node is an open folder (files are never open)
    pub fn is_open(&self, tree: &FileTree, id: NodeId) -> bool {
        match tree.get_node(id) {
            Some(node) if node.is_folder() => self
                .overrides
                .get(&id)
                .copied()
                .unwrap_or_else(|| node.initially_open()),
            _ => false,
        }
    }

    /// Flip a folder between open and closed
    ///
    /// Returns false (and changes nothing) if `id` is not a folder of `tree`.
    pub fn toggle_folder(&mut self, tree: &FileTree, id: NodeId) -> bool {
        match tree.get_node(id) {
            Some(node) if node.is_folder() => {
                let open = !self.is_open(tree, id);
                self.store(id, open, node.initially_open());
                true
            }
            Some(_) => {
                tracing::warn!("Ignoring toggle of non-folder {}", id);
                false
            }
            None => {
                tracing::warn!("Ignoring toggle of unknown {}", id);
                false
            }
        }
    }

    /// Force a folder open or closed
    pub fn set_open(&mut self, tree: &FileTree, id: NodeId, open: bool) {
        if let Some(node) = tree.get_node(id).filter(|n| n.is_folder()) {
            self.store(id, open, node.initially_open());
        }
    }

    /// Open every folder above `id` so that it becomes visible
    pub fn reveal(&mut self, tree: &FileTree, id: NodeId) {
        let ancestors = tree.get_ancestors(id);
        if let Some((_, above)) = ancestors.split_last() {
            for &ancestor in above {
                self.set_open(tree, ancestor, true);
            }
        }
    }

    /// Drop all overrides, returning to the authored state
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    /// Number of folders whose state differs from the authored state
    #[cfg(test)]
    pub(crate) fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn store(&mut self, id: NodeId, open: bool, authored: bool) {
        if open == authored {
            self.overrides.remove(&id);
        } else {
            self.overrides.insert(id, open);
        }
    }
}
