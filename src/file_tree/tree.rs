use super::node::{FileEntry, FileId, NodeId, TreeNode};
use super::template::Node;

/// Immutable arena built from an authored forest
///
/// Nodes are stored in depth-first pre-order, so `NodeId(n)` is simply the
/// n-th node of that walk. Nothing in here changes after construction; the
/// per-viewer open/closed state lives in [`ExpansionState`](super::ExpansionState),
/// which lets one tree be shared behind an `Arc` by any number of viewers.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// All nodes indexed by ID
    nodes: Vec<TreeNode>,
    /// Root-level node IDs in authored order
    roots: Vec<NodeId>,
}

impl FileTree {
    /// Build a tree from an ordered forest of authored nodes
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut tree = Self::default();
        let roots = nodes
            .into_iter()
            .map(|node| tree.add_node(node, None))
            .collect();
        tree.roots = roots;
        tree
    }

    /// Root-level node IDs in display order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Get all nodes in depth-first pre-order
    pub fn all_nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Get number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Narrow a node ID to a file ID, if the node exists and is a file
    pub fn file_id(&self, id: NodeId) -> Option<FileId> {
        self.get_node(id)
            .filter(|node| node.is_file())
            .map(|node| FileId::new(node.id))
    }

    /// Get the payload of a file node
    pub fn file_entry(&self, file: FileId) -> Option<&FileEntry> {
        self.get_node(file.node_id()).and_then(TreeNode::file_entry)
    }

    /// All files in depth-first pre-order, regardless of folder state
    pub fn files(&self) -> impl Iterator<Item = FileId> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_file())
            .map(|node| FileId::new(node.id))
    }

    /// First file in depth-first pre-order
    pub fn first_file(&self) -> Option<FileId> {
        self.files().next()
    }

    /// Get the parent chain for a node (from root to node)
    pub fn get_ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.get_node(id).map(|n| n.id);

        while let Some(node_id) = current {
            ancestors.push(node_id);
            current = self.get_node(node_id).and_then(|n| n.parent);
        }

        ancestors.reverse();
        ancestors
    }

    /// Get the depth of a node (root-level nodes are 0)
    pub fn get_depth(&self, id: NodeId) -> usize {
        self.get_ancestors(id).len().saturating_sub(1)
    }

    /// Find a node by a `/`-separated name path from the roots
    ///
    /// When siblings share a name the first one wins.
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let mut candidates: &[NodeId] = &self.roots;
        let mut found = None;

        for component in path.split('/').filter(|c| !c.is_empty()) {
            let id = candidates
                .iter()
                .copied()
                .find(|&id| self.get_node(id).is_some_and(|n| n.name == component))?;
            candidates = &self.get_node(id)?.children;
            found = Some(id);
        }

        found
    }

    /// The `/`-separated name path of a node
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let names: Option<Vec<&str>> = self
            .get_ancestors(id)
            .into_iter()
            .map(|ancestor| self.get_node(ancestor).map(|n| n.name.as_str()))
            .collect();
        names.filter(|n| !n.is_empty()).map(|n| n.join("/"))
    }

    /// Add a node and its descendants, returning the node's ID
    fn add_node(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());

        match node {
            Node::File(file) => {
                let entry = FileEntry {
                    language: file.language,
                    content: file.content,
                };
                self.nodes
                    .push(TreeNode::file(id, file.name, parent, entry));
            }
            Node::Folder(folder) => {
                self.nodes
                    .push(TreeNode::folder(id, folder.name, parent, folder.is_open));
                let children: Vec<NodeId> = folder
                    .children
                    .into_iter()
                    .map(|child| self.add_node(child, Some(id)))
                    .collect();
                self.nodes[id.0].children = children;
            }
        }

        id
    }
}
