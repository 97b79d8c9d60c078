//! Terminal rendering

pub mod content_pane;
pub mod file_explorer;
pub mod playback;

use crate::app::{App, Focus};
use content_pane::{truncate_to_width, ContentPaneRenderer};
use file_explorer::FileExplorerRenderer;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEY_HINTS: &str = "↑↓ move  ←→ fold  Enter open  Tab focus  Esc close  q quit";

/// Draw the whole application
///
/// Also records the pane sizes in the app, so scrolling and mouse
/// hit-testing use what is actually on screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    if !app.viewer().is_visible() {
        render_closed(frame, chunks[1]);
        render_status_bar(frame, chunks[2], app);
        return;
    }

    let title = app.viewer().title().unwrap_or_default().to_string();
    render_title_bar(frame, chunks[0], &title);

    let tree_percent = (app.config().viewer.tree_width * 100.0).round() as u16;
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(tree_percent),
            Constraint::Percentage(100 - tree_percent.min(100)),
        ])
        .split(chunks[1]);
    let (tree_area, content_area) = (panes[0], panes[1]);

    app.set_pane_areas(tree_area, content_area);
    app.set_content_viewport_height(content_area.height.saturating_sub(2) as usize);

    let focus = app.focus();
    let indent_width = app.config().viewer.indent_width;
    let show_language = app.config().viewer.show_language;
    let scroll = app.content_scroll();

    if let Some(session) = app.viewer_mut().session_mut() {
        let view = session.tree_view_mut();
        view.set_viewport_height(tree_area.height.saturating_sub(2) as usize);
        view.update_scroll_for_selection();
    }

    let viewer = app.viewer();
    if let Some(session) = viewer.session() {
        FileExplorerRenderer::render(
            session.tree_view(),
            session.active_file(),
            frame,
            tree_area,
            focus == Focus::Tree,
            indent_width,
        );
    }
    ContentPaneRenderer::render(
        &viewer.content_pane(),
        frame,
        content_area,
        scroll,
        focus == Focus::Content,
        show_language,
    );

    render_status_bar(frame, chunks[2], app);
}

fn render_title_bar(frame: &mut Frame, area: Rect, title: &str) {
    let title = truncate_to_width(title, area.width as usize);
    let bar = Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(bar, area);
}

fn render_closed(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from("The viewer is closed."),
        Line::from("Press o to reopen, q to quit."),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.status_message().unwrap_or(KEY_HINTS);
    let bar = Paragraph::new(truncate_to_width(text, area.width as usize))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}
