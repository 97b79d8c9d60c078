use super::expansion::ExpansionState;
use super::node::{NodeId, NodeKind};
use super::tree::FileTree;
use std::sync::Arc;

/// One visible row of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub id: NodeId,
    /// Nesting level, root-level rows are 0
    pub depth: usize,
    pub name: &'a str,
    pub kind: RowKind<'a>,
}

/// Row-specific display data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind<'a> {
    Folder { open: bool },
    File { language: &'a str },
}

/// Lazy depth-first walk over the visible rows of a tree
///
/// A node's children are only walked when the node and all of its ancestors
/// are open. The iterator borrows the current state, so a new one must be
/// created after every change; cloning it restarts from the same position.
#[derive(Debug, Clone)]
pub struct VisibleRows<'a> {
    tree: &'a FileTree,
    expansion: &'a ExpansionState,
    /// Pending (node, depth) pairs, next row on top
    stack: Vec<(NodeId, usize)>,
}

impl<'a> VisibleRows<'a> {
    pub fn new(tree: &'a FileTree, expansion: &'a ExpansionState) -> Self {
        let stack = tree.roots().iter().rev().map(|&id| (id, 0)).collect();
        Self {
            tree,
            expansion,
            stack,
        }
    }
}

impl<'a> Iterator for VisibleRows<'a> {
    type Item = TreeRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(node) = tree.get_node(id) else {
                continue;
            };

            let kind = match &node.kind {
                NodeKind::Folder { .. } => {
                    let open = self.expansion.is_open(tree, id);
                    if open {
                        self.stack
                            .extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
                    }
                    RowKind::Folder { open }
                }
                NodeKind::File(entry) => RowKind::File {
                    language: &entry.language,
                },
            };

            return Some(TreeRow {
                id,
                depth,
                name: &node.name,
                kind,
            });
        }
    }
}

/// View state for navigating one viewer's copy of a shared tree
#[derive(Debug, Clone)]
pub struct FileTreeView {
    /// The shared, immutable tree
    tree: Arc<FileTree>,
    /// This view's folder state
    expansion: ExpansionState,
    /// Row under the keyboard cursor
    cursor: Option<NodeId>,
    /// Scroll offset (index into visible rows)
    scroll_offset: usize,
    /// Last known viewport height (for scrolling calculations)
    pub(crate) viewport_height: usize,
}

impl FileTreeView {
    /// Create a new view showing the tree as authored
    pub fn new(tree: Arc<FileTree>) -> Self {
        let cursor = tree.roots().first().copied();
        Self {
            tree,
            expansion: ExpansionState::new(),
            cursor,
            scroll_offset: 0,
            viewport_height: 10, // Default, will be updated during rendering
        }
    }

    /// Set the viewport height (should be called during rendering)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    /// Get the underlying tree
    pub fn tree(&self) -> &Arc<FileTree> {
        &self.tree
    }

    /// Get this view's folder state
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Lazy sequence of the rows currently visible
    pub fn rows(&self) -> VisibleRows<'_> {
        VisibleRows::new(&self.tree, &self.expansion)
    }

    /// IDs of the visible rows, in display order
    pub fn visible_ids(&self) -> Vec<NodeId> {
        self.rows().map(|row| row.id).collect()
    }

    /// Whether a folder is open in this view
    pub fn is_open(&self, id: NodeId) -> bool {
        self.expansion.is_open(&self.tree, id)
    }

    /// Flip a folder between open and closed
    ///
    /// If closing the folder hides the cursor, the cursor moves to the folder.
    pub fn toggle_folder(&mut self, id: NodeId) -> bool {
        if !self.expansion.toggle_folder(&self.tree, id) {
            return false;
        }
        tracing::debug!("Toggled {} (open: {})", id, self.is_open(id));

        if let Some(cursor) = self.cursor {
            if !self.rows().any(|row| row.id == cursor) {
                self.cursor = Some(id);
            }
        }
        true
    }

    /// Open every folder above `id` and put the cursor on it
    pub fn reveal(&mut self, id: NodeId) {
        if self.tree.get_node(id).is_none() {
            return;
        }
        self.expansion.reveal(&self.tree, id);
        self.cursor = Some(id);
        self.update_scroll_for_selection();
    }

    /// Return every folder to its authored state and move the cursor home
    pub fn reset(&mut self) {
        self.expansion.reset();
        self.cursor = self.tree.roots().first().copied();
        self.scroll_offset = 0;
    }

    /// Get the node under the cursor
    pub fn get_selected(&self) -> Option<NodeId> {
        self.cursor
    }

    /// Set the node under the cursor
    pub fn set_selected(&mut self, node_id: Option<NodeId>) {
        self.cursor = node_id;
    }

    /// Select the next visible node
    pub fn select_next(&mut self) {
        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }

        match self.position_in(&visible) {
            Some(pos) if pos + 1 < visible.len() => self.cursor = Some(visible[pos + 1]),
            Some(_) => {}
            None => self.cursor = Some(visible[0]),
        }
    }

    /// Select the previous visible node
    pub fn select_prev(&mut self) {
        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }

        match self.position_in(&visible) {
            Some(pos) if pos > 0 => self.cursor = Some(visible[pos - 1]),
            Some(_) => {}
            None => self.cursor = Some(visible[0]),
        }
    }

    /// Move selection up by a page (viewport height)
    pub fn select_page_up(&mut self) {
        if self.viewport_height == 0 {
            return;
        }

        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }

        let new_pos = self
            .position_in(&visible)
            .map_or(0, |pos| pos.saturating_sub(self.viewport_height));
        self.cursor = Some(visible[new_pos]);
    }

    /// Move selection down by a page (viewport height)
    pub fn select_page_down(&mut self) {
        if self.viewport_height == 0 {
            return;
        }

        let visible = self.visible_ids();
        if visible.is_empty() {
            return;
        }

        let new_pos = self.position_in(&visible).map_or(0, |pos| {
            (pos + self.viewport_height).min(visible.len() - 1)
        });
        self.cursor = Some(visible[new_pos]);
    }

    /// Select the first visible node
    pub fn select_first(&mut self) {
        if let Some(first) = self.rows().next() {
            self.cursor = Some(first.id);
        }
    }

    /// Select the last visible node
    pub fn select_last(&mut self) {
        if let Some(last) = self.rows().last() {
            self.cursor = Some(last.id);
        }
    }

    /// Select the parent of the currently selected node
    pub fn select_parent(&mut self) {
        if let Some(parent_id) = self
            .cursor
            .and_then(|current| self.tree.get_node(current))
            .and_then(|node| node.parent)
        {
            self.cursor = Some(parent_id);
        }
    }

    /// Close the folder under the cursor, or move to the parent otherwise
    pub fn collapse_or_select_parent(&mut self) {
        match self.cursor {
            Some(current) if self.is_open(current) => {
                self.toggle_folder(current);
            }
            _ => self.select_parent(),
        }
    }

    /// Open the folder under the cursor, or step into it if already open
    pub fn expand_or_select_child(&mut self) {
        let Some(current) = self.cursor else {
            return;
        };
        let Some(node) = self.tree.get_node(current).filter(|n| n.is_folder()) else {
            return;
        };

        if !self.is_open(current) {
            self.toggle_folder(current);
        } else if let Some(&first_child) = node.children.first() {
            self.cursor = Some(first_child);
        }
    }

    /// Update scroll offset so that the cursor stays inside the viewport
    ///
    /// Scrolls only when the cursor goes past a viewport edge, using the
    /// stored viewport height which is updated during rendering.
    pub fn update_scroll_for_selection(&mut self) {
        self.ensure_visible(self.viewport_height);
    }

    /// Ensure the selected node is visible within a viewport of the given height
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if let Some(pos) = self.get_selected_index() {
            // If selection is above viewport, scroll up
            if pos < self.scroll_offset {
                self.scroll_offset = pos;
            }
            // If selection is below viewport, scroll down
            else if pos >= self.scroll_offset + viewport_height {
                self.scroll_offset = pos - viewport_height + 1;
            }
        }
    }

    /// Get the scroll offset
    pub fn get_scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set the scroll offset
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    /// Get the index of the selected node in the visible list
    pub fn get_selected_index(&self) -> Option<usize> {
        let selected = self.cursor?;
        self.rows().position(|row| row.id == selected)
    }

    /// Get visible node at index
    pub fn get_node_at_index(&self, index: usize) -> Option<NodeId> {
        self.rows().nth(index).map(|row| row.id)
    }

    /// Get the number of visible nodes
    pub fn visible_count(&self) -> usize {
        self.rows().count()
    }

    fn position_in(&self, visible: &[NodeId]) -> Option<usize> {
        let current = self.cursor?;
        visible.iter().position(|&id| id == current)
    }
}
