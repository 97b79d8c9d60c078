// Test tree and file fixtures

use codeview::file_tree::{FileTree, Node};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// `[SRC(open)[a.ts "X", lib(closed)[b.ts "Y"]]]`
///
/// Ids in depth-first order: SRC=0, a.ts=1, lib=2, b.ts=3.
pub fn scenario_nodes() -> Vec<Node> {
    vec![Node::folder(
        "SRC",
        true,
        vec![
            Node::file("a.ts", "typescript", "X"),
            Node::folder("lib", false, vec![Node::file("b.ts", "typescript", "Y")]),
        ],
    )]
}

pub fn scenario_tree() -> FileTree {
    FileTree::from_nodes(scenario_nodes())
}

/// A flat tree of `count` files named `file00.rs`, `file01.rs`, ...
pub fn flat_tree(count: usize) -> FileTree {
    FileTree::from_nodes(
        (0..count)
            .map(|i| Node::file(format!("file{:02}.rs", i), "rust", format!("// file {}", i)))
            .collect(),
    )
}

/// The scenario tree as a JSON template
pub const SCENARIO_JSON: &str = r#"[
  {
    "type": "folder",
    "name": "SRC",
    "is_open": true,
    "children": [
      { "type": "file", "name": "a.ts", "language": "typescript", "content": "X" },
      {
        "type": "folder",
        "name": "lib",
        "children": [
          { "type": "file", "name": "b.ts", "language": "typescript", "content": "Y" }
        ]
      }
    ]
  }
]"#;

/// Manages a temporary directory of test files
pub struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Write a file into the fixture directory and return its path
    pub fn write(&self, filename: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.temp_dir.path().join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }
}
