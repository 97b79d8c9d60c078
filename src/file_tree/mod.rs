// File tree module for authored code trees
//
// This module turns a caller-authored forest of folders and files into an
// immutable arena that can be shared between viewers, plus the per-viewer
// open/closed state and cursor navigation on top of it.

pub mod expansion;
pub mod node;
pub mod template;
pub mod tree;
pub mod view;

pub use expansion::ExpansionState;
pub use node::{FileEntry, FileId, NodeId, NodeKind, TreeNode};
pub use template::{FileNode, FolderNode, Node, TemplateError};
pub use tree::FileTree;
pub use view::{FileTreeView, RowKind, TreeRow, VisibleRows};
