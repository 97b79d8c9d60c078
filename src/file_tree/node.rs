use std::fmt;

/// Unique identifier for a tree node
///
/// Assigned in depth-first pre-order when the tree is built, so ids are dense
/// and stable for the lifetime of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Identifier of a node known to be a file
///
/// Only [`FileTree`](super::FileTree) hands these out, so a `FileId` always
/// names a file node of the tree it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(NodeId);

impl FileId {
    pub(crate) fn new(id: NodeId) -> Self {
        Self(id)
    }

    /// The underlying node id
    pub fn node_id(self) -> NodeId {
        self.0
    }
}

impl From<FileId> for NodeId {
    fn from(file: FileId) -> Self {
        file.0
    }
}

/// Payload of a file node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Display tag only (e.g. "typescript", "markdown")
    pub language: String,
    /// Literal source text, rendered verbatim
    pub content: String,
}

/// What a node is, decided when the tree is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Folder with the open state it was authored with
    Folder { initially_open: bool },
    /// File with its display payload
    File(FileEntry),
}

/// Represents a node in the file tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Unique identifier
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Parent node ID (None for root-level nodes)
    pub parent: Option<NodeId>,
    /// Child node IDs in authored order (always empty for files)
    pub children: Vec<NodeId>,
    /// Folder or file
    pub kind: NodeKind,
}

impl TreeNode {
    /// Create a folder node
    pub fn folder(id: NodeId, name: String, parent: Option<NodeId>, initially_open: bool) -> Self {
        Self {
            id,
            name,
            parent,
            children: Vec::new(),
            kind: NodeKind::Folder { initially_open },
        }
    }

    /// Create a file node
    pub fn file(id: NodeId, name: String, parent: Option<NodeId>, entry: FileEntry) -> Self {
        Self {
            id,
            name,
            parent,
            children: Vec::new(),
            kind: NodeKind::File(entry),
        }
    }

    /// Check if this node is a folder
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Check if this node is a file
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    /// File payload, if this node is a file
    pub fn file_entry(&self) -> Option<&FileEntry> {
        match &self.kind {
            NodeKind::File(entry) => Some(entry),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Open state the folder was authored with (false for files)
    pub fn initially_open(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Folder {
                initially_open: true
            }
        )
    }
}
