//! Authored tree templates
//!
//! Callers describe a tree as an ordered forest of [`Node`] values, either in
//! Rust or as JSON. Every node names its kind explicitly (`"type": "folder"`
//! or `"type": "file"`), so a node can never be ambiguous.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One authored entry: a folder or a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder(FolderNode),
    File(FileNode),
}

/// Authored folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    /// Whether the folder is expanded when a viewer opens
    #[serde(default)]
    pub is_open: bool,
    /// Children in display order
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Authored file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub content: String,
}

fn default_language() -> String {
    "plaintext".to_string()
}

impl Node {
    /// Build a folder node
    pub fn folder(name: impl Into<String>, is_open: bool, children: Vec<Node>) -> Self {
        Node::Folder(FolderNode {
            name: name.into(),
            is_open,
            children,
        })
    }

    /// Build a file node
    pub fn file(
        name: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Node::File(FileNode {
            name: name.into(),
            language: language.into(),
            content: content.into(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }
}

/// Parse a JSON forest (`[node, ...]`)
pub fn parse_nodes(json: &str) -> Result<Vec<Node>, TemplateError> {
    let nodes: Vec<Node> =
        serde_json::from_str(json).map_err(|e| TemplateError::Parse(e.to_string()))?;
    if nodes.is_empty() {
        return Err(TemplateError::Empty);
    }
    Ok(nodes)
}

/// Read and parse a JSON template file
pub fn load_nodes<P: AsRef<Path>>(path: P) -> Result<Vec<Node>, TemplateError> {
    let contents =
        std::fs::read_to_string(path.as_ref()).map_err(|e| TemplateError::Io(e.to_string()))?;
    parse_nodes(&contents)
}

/// Template loading error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    Io(String),
    Parse(String),
    /// The template holds no nodes
    Empty,
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::Io(msg) => write!(f, "IO error: {msg}"),
            TemplateError::Parse(msg) => write!(f, "Parse error: {msg}"),
            TemplateError::Empty => write!(f, "Template contains no nodes"),
        }
    }
}

impl std::error::Error for TemplateError {}
