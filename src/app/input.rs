use super::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Lines scrolled per mouse wheel step in the content pane
const WHEEL_LINES: isize = 3;

impl App {
    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if !self.viewer.is_visible() {
            match key.code {
                KeyCode::Char('o') => self.reopen_viewer(),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => self.close_viewer(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Tree => self.handle_tree_key(key.code),
                Focus::Content => self.handle_content_key(key.code),
            },
        }
    }

    fn handle_tree_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.click_cursor_row();
            return;
        }

        let Some(session) = self.viewer.session_mut() else {
            return;
        };
        let view = session.tree_view_mut();
        match code {
            KeyCode::Up => view.select_prev(),
            KeyCode::Down => view.select_next(),
            KeyCode::Home => view.select_first(),
            KeyCode::End => view.select_last(),
            KeyCode::PageUp => view.select_page_up(),
            KeyCode::PageDown => view.select_page_down(),
            KeyCode::Left => view.collapse_or_select_parent(),
            KeyCode::Right => view.expand_or_select_child(),
            _ => return,
        }
        view.update_scroll_for_selection();
    }

    fn handle_content_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.scroll_content_by(-1),
            KeyCode::Down => self.scroll_content_by(1),
            KeyCode::PageUp => self.scroll_content_by(-self.content_page()),
            KeyCode::PageDown => self.scroll_content_by(self.content_page()),
            KeyCode::Home => self.scroll_content_to_top(),
            KeyCode::End => self.scroll_content_to_bottom(),
            _ => {}
        }
    }

    /// Handle a mouse event
    ///
    /// A left click on a tree row moves the cursor there and clicks the node.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.viewer.is_visible() {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = row_at(self.tree_area, position) {
                    self.focus = Focus::Tree;
                    self.click_tree_row(index);
                } else if inner(self.content_area).contains(position) {
                    self.focus = Focus::Content;
                }
            }
            MouseEventKind::ScrollUp if self.content_area.contains(position) => {
                self.scroll_content_by(-WHEEL_LINES);
            }
            MouseEventKind::ScrollDown if self.content_area.contains(position) => {
                self.scroll_content_by(WHEEL_LINES);
            }
            _ => {}
        }
    }

    /// Click the tree row `index` rows below the top of the tree viewport
    fn click_tree_row(&mut self, index: usize) {
        let Some(session) = self.viewer.session_mut() else {
            return;
        };
        let view = session.tree_view_mut();
        let Some(id) = view.get_node_at_index(view.get_scroll_offset() + index) else {
            return;
        };
        view.set_selected(Some(id));
        self.click_node(id);
    }
}

/// Area inside a bordered block
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Viewport row index of `position` inside a bordered list
fn row_at(area: Rect, position: Position) -> Option<usize> {
    let body = inner(area);
    body.contains(position)
        .then(|| (position.y - body.y) as usize)
}
