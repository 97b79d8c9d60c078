use super::content::ContentPane;
use super::tabs::TabSession;
use crate::config::{InitialSelection, ViewerConfig};
use crate::file_tree::{FileId, FileTree, FileTreeView, NodeId, NodeKind};
use std::fmt;
use std::sync::Arc;

/// State of one open->close lifecycle of the viewer
#[derive(Debug, Clone)]
pub struct ViewerSession {
    title: String,
    tree_view: FileTreeView,
    tabs: TabSession,
}

impl ViewerSession {
    fn new(tree: Arc<FileTree>, title: String, initial: &InitialSelection) -> Self {
        let mut tree_view = FileTreeView::new(tree);
        let mut tabs = TabSession::new();

        let initial_file = match initial {
            InitialSelection::None => None,
            InitialSelection::FirstFile => tree_view.tree().first_file(),
            InitialSelection::Path(path) => {
                let tree = tree_view.tree();
                let file = tree.find_by_path(path).and_then(|id| tree.file_id(id));
                if file.is_none() {
                    tracing::warn!("Initial file {:?} not found in {:?}", path, title);
                }
                file
            }
        };

        if let Some(file) = initial_file {
            tabs.select_file(file);
            tree_view.reveal(file.node_id());
        }

        Self {
            title,
            tree_view,
            tabs,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tree(&self) -> &Arc<FileTree> {
        self.tree_view.tree()
    }

    pub fn tree_view(&self) -> &FileTreeView {
        &self.tree_view
    }

    pub fn tree_view_mut(&mut self) -> &mut FileTreeView {
        &mut self.tree_view
    }

    pub fn tabs(&self) -> &TabSession {
        &self.tabs
    }

    /// The active file, if any
    pub fn active_file(&self) -> Option<FileId> {
        self.tabs.active()
    }

    /// Flip a folder between open and closed
    pub fn toggle_folder(&mut self, id: NodeId) {
        self.tree_view.toggle_folder(id);
    }

    /// Make `file` the active file
    pub fn select_file(&mut self, file: FileId) {
        if self.tree_view.tree().file_id(file.node_id()) != Some(file) {
            tracing::warn!(
                "Ignoring selection of {}, not a file of this tree",
                file.node_id()
            );
            return;
        }
        tracing::debug!("Selected {} in {:?}", file.node_id(), self.title);
        self.tabs.select_file(file);
    }

    /// Dispatch a click: folders toggle, files become active
    pub fn on_node_click(&mut self, id: NodeId) {
        let tree = Arc::clone(self.tree_view.tree());
        let Some(node) = tree.get_node(id) else {
            tracing::warn!("Ignoring click on unknown {}", id);
            return;
        };

        match &node.kind {
            NodeKind::Folder { .. } => self.toggle_folder(id),
            NodeKind::File(_) => self.select_file(FileId::new(id)),
        }
    }

    /// What the content pane shows for the current selection
    pub fn content_pane(&self) -> ContentPane<'_> {
        let tree = self.tree_view.tree();
        let Some(file) = self.tabs.active() else {
            return ContentPane::Placeholder;
        };

        match (tree.get_node(file.node_id()), tree.file_entry(file)) {
            (Some(node), Some(entry)) => ContentPane::File {
                name: &node.name,
                path: tree.path_of(file.node_id()).unwrap_or_default(),
                language: &entry.language,
                content: &entry.content,
            },
            _ => ContentPane::Placeholder,
        }
    }
}

type CloseCallback = Box<dyn FnMut() + Send>;

/// The modal viewer surface
///
/// The caller decides when the viewer opens (with a tree and a title) and may
/// register a callback that runs whenever it closes. Closing keeps the last
/// session around, so [`reopen`](Self::reopen) shows it again unchanged.
pub struct CodeViewer {
    initial_selection: InitialSelection,
    session: Option<ViewerSession>,
    visible: bool,
    on_close: Option<CloseCallback>,
}

impl fmt::Debug for CodeViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeViewer")
            .field("initial_selection", &self.initial_selection)
            .field("session", &self.session)
            .field("visible", &self.visible)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl Default for CodeViewer {
    fn default() -> Self {
        Self::new(InitialSelection::None)
    }
}

impl CodeViewer {
    pub fn new(initial_selection: InitialSelection) -> Self {
        Self {
            initial_selection,
            session: None,
            visible: false,
            on_close: None,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.initial_selection.clone())
    }

    /// Register the callback run when the viewer closes
    pub fn set_on_close(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Change what a future `open` selects first
    pub fn set_initial_selection(&mut self, initial_selection: InitialSelection) {
        self.initial_selection = initial_selection;
    }

    /// Show the viewer with a new tree and title
    ///
    /// Always starts a fresh session: folders as authored, and the active
    /// file per the configured initial selection.
    pub fn open(&mut self, tree: Arc<FileTree>, title: impl Into<String>) {
        let title = title.into();
        tracing::debug!("Opening viewer {:?} ({} nodes)", title, tree.node_count());
        self.session = Some(ViewerSession::new(tree, title, &self.initial_selection));
        self.visible = true;
    }

    /// Show the viewer again with the session it had when it closed
    ///
    /// Returns false if the viewer was never opened.
    pub fn reopen(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.visible = true;
        true
    }

    /// Hide the viewer, keeping tree, title and active file
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }
        tracing::debug!("Closing viewer");
        self.visible = false;
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The current (or last) session
    pub fn session(&self) -> Option<&ViewerSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ViewerSession> {
        self.session.as_mut()
    }

    pub fn title(&self) -> Option<&str> {
        self.session.as_ref().map(ViewerSession::title)
    }

    pub fn tree(&self) -> Option<&Arc<FileTree>> {
        self.session.as_ref().map(ViewerSession::tree)
    }

    /// The active file, if any
    pub fn active_file(&self) -> Option<FileId> {
        self.session.as_ref().and_then(ViewerSession::active_file)
    }

    /// Dispatch a click on a tree node
    pub fn on_node_click(&mut self, id: NodeId) {
        match self.session.as_mut() {
            Some(session) => session.on_node_click(id),
            None => tracing::warn!("Ignoring click on {} before the viewer was opened", id),
        }
    }

    /// What the content pane shows
    pub fn content_pane(&self) -> ContentPane<'_> {
        self.session
            .as_ref()
            .map_or(ContentPane::Placeholder, ViewerSession::content_pane)
    }
}
