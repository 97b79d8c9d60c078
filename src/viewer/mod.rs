//! The code viewer: a tree of authored files beside a read-only content pane
//!
//! - `tabs` - the single active file
//! - `content` - what the content pane shows
//! - `shell` - visibility, open/close lifecycle and click dispatch

pub mod content;
pub mod shell;
pub mod tabs;

pub use content::ContentPane;
pub use shell::{CodeViewer, ViewerSession};
pub use tabs::{TabSession, TabState};
