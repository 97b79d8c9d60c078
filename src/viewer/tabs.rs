use crate::file_tree::FileId;

/// State of the single-file tab session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabState {
    /// Nothing selected yet, the content pane shows a placeholder
    #[default]
    NoSelection,
    /// A file is shown in the content pane
    Viewing(FileId),
}

/// Tracks the one active file of a viewer
///
/// There is no tab strip and no history: selecting a file replaces whatever
/// was active before.
#[derive(Debug, Clone, Default)]
pub struct TabSession {
    state: TabState,
}

impl TabSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session already viewing `file`
    pub fn viewing(file: FileId) -> Self {
        Self {
            state: TabState::Viewing(file),
        }
    }

    /// Make `file` the active file, replacing any previous selection
    pub fn select_file(&mut self, file: FileId) {
        self.state = TabState::Viewing(file);
    }

    /// The active file, if any
    pub fn active(&self) -> Option<FileId> {
        match self.state {
            TabState::NoSelection => None,
            TabState::Viewing(file) => Some(file),
        }
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    /// Whether `file` is the active file
    pub fn is_active(&self, file: FileId) -> bool {
        self.state == TabState::Viewing(file)
    }

    /// Back to `NoSelection`
    pub fn clear(&mut self) {
        self.state = TabState::NoSelection;
    }
}
