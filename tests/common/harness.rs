// Drives the terminal app against a TestBackend

use super::fixtures::scenario_tree;
use codeview::app::App;
use codeview::config::Config;
use codeview::file_tree::FileTree;
use codeview::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

/// Test harness that renders the app to an in-memory terminal
pub struct ViewerTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl ViewerTestHarness {
    /// Open the viewer on the scenario tree with default config
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_tree(scenario_tree(), Config::default(), width, height)
    }

    pub fn with_config(config: Config, width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_tree(scenario_tree(), config, width, height)
    }

    pub fn with_tree(
        tree: FileTree,
        config: Config,
        width: u16,
        height: u16,
    ) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();
        let app = App::new(config, Arc::new(tree), "Test Project");
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut harness = Self { app, terminal };
        harness.render()?;
        Ok(harness)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }

    /// Send a key press and re-render
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.app.process_close_notifications();
        self.render()
    }

    /// Send the same key `count` times
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> anyhow::Result<()> {
        for _ in 0..count {
            self.send_key(code, modifiers)?;
        }
        Ok(())
    }

    /// Left-click a screen cell and re-render
    pub fn mouse_click(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render()
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    /// The whole screen, one line per terminal row
    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| self.screen_row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn screen_row_text(&self, row: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol())
            .collect()
    }

    /// Screen row showing `text`, if any
    pub fn find_row(&self, text: &str) -> Option<u16> {
        let height = self.terminal.backend().buffer().area.height;
        (0..height).find(|&y| self.screen_row_text(y).contains(text))
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    /// Name of the active file, if any
    pub fn active_file_name(&self) -> Option<String> {
        let viewer = self.app.viewer();
        let file = viewer.active_file()?;
        let node = viewer.tree()?.get_node(file.node_id())?;
        Some(node.name.clone())
    }

    /// Name of the node under the tree cursor
    pub fn cursor_name(&self) -> Option<String> {
        let session = self.app.viewer().session()?;
        let id = session.tree_view().get_selected()?;
        Some(session.tree().get_node(id)?.name.clone())
    }
}
