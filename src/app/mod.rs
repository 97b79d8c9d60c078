//! Terminal application state around one [`CodeViewer`]

mod input;

use crate::config::Config;
use crate::file_tree::{FileId, FileTree, NodeId};
use crate::viewer::CodeViewer;
use ratatui::layout::Rect;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Content,
}

/// The running application
pub struct App {
    viewer: CodeViewer,
    config: Config,
    focus: Focus,

    /// First content line shown in the content pane
    content_scroll: usize,
    /// Height of the content pane body, updated during rendering
    content_viewport_height: usize,
    /// File whose content the scroll position refers to
    scrolled_file: Option<FileId>,

    /// Screen areas from the last render, used for mouse hit-testing
    tree_area: Rect,
    content_area: Rect,

    /// Set by the viewer's close callback
    viewer_closed: Arc<AtomicBool>,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the app and open the viewer on `tree`
    pub fn new(config: Config, tree: Arc<FileTree>, title: impl Into<String>) -> Self {
        let viewer_closed = Arc::new(AtomicBool::new(false));
        let mut viewer = CodeViewer::from_config(&config.viewer);
        let flag = Arc::clone(&viewer_closed);
        viewer.set_on_close(move || flag.store(true, Ordering::SeqCst));
        viewer.open(tree, title);

        let scrolled_file = viewer.active_file();
        Self {
            viewer,
            config,
            focus: Focus::Tree,
            content_scroll: 0,
            content_viewport_height: 10,
            scrolled_file,
            tree_area: Rect::default(),
            content_area: Rect::default(),
            viewer_closed,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn viewer(&self) -> &CodeViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut CodeViewer {
        &mut self.viewer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn content_scroll(&self) -> usize {
        self.content_scroll
    }

    pub fn set_content_viewport_height(&mut self, height: usize) {
        self.content_viewport_height = height;
    }

    pub(crate) fn set_pane_areas(&mut self, tree_area: Rect, content_area: Rect) {
        self.tree_area = tree_area;
        self.content_area = content_area;
    }

    pub fn tree_area(&self) -> Rect {
        self.tree_area
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tree => Focus::Content,
            Focus::Content => Focus::Tree,
        };
    }

    /// Click the row under the tree cursor
    pub fn click_cursor_row(&mut self) {
        let cursor = self
            .viewer
            .session()
            .and_then(|session| session.tree_view().get_selected());
        if let Some(id) = cursor {
            self.click_node(id);
        }
    }

    /// Click a tree node: folders toggle, files become active
    pub fn click_node(&mut self, id: NodeId) {
        self.viewer.on_node_click(id);
        if let Some(session) = self.viewer.session_mut() {
            session.tree_view_mut().update_scroll_for_selection();
        }
        self.sync_content_scroll();
    }

    /// Scroll the content pane, clamped to the active file's lines
    pub fn scroll_content_by(&mut self, delta: isize) {
        let max = self.viewer.content_pane().line_count().saturating_sub(1);
        let target = if delta < 0 {
            self.content_scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.content_scroll.saturating_add(delta.unsigned_abs())
        };
        self.content_scroll = target.min(max);
    }

    pub fn scroll_content_to_top(&mut self) {
        self.content_scroll = 0;
    }

    pub fn scroll_content_to_bottom(&mut self) {
        let lines = self.viewer.content_pane().line_count();
        self.content_scroll = lines.saturating_sub(self.content_viewport_height.max(1));
    }

    pub(crate) fn content_page(&self) -> isize {
        self.content_viewport_height.max(1) as isize
    }

    /// Hide the viewer; its session is kept for `reopen_viewer`
    pub fn close_viewer(&mut self) {
        self.viewer.close();
        self.process_close_notifications();
    }

    pub fn reopen_viewer(&mut self) {
        if self.viewer.reopen() {
            self.status_message = None;
        }
    }

    /// Pick up a close reported through the viewer's callback
    pub fn process_close_notifications(&mut self) {
        if self.viewer_closed.swap(false, Ordering::SeqCst) {
            tracing::debug!("Viewer reported close");
            self.focus = Focus::Tree;
            self.set_status_message("Viewer closed. Press o to reopen, q to quit");
        }
    }

    /// Scroll back to the top whenever the active file changes
    fn sync_content_scroll(&mut self) {
        let active = self.viewer.active_file();
        if active != self.scrolled_file {
            self.scrolled_file = active;
            self.content_scroll = 0;
        }
    }
}
