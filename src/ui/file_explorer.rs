use crate::file_tree::{FileId, FileTreeView, RowKind, TreeRow};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct FileExplorerRenderer;

impl FileExplorerRenderer {
    /// Render the visible rows of the tree in the given frame area
    ///
    /// Only the rows inside the view's scroll window are built. The active
    /// file is drawn bold so it stays recognizable when the cursor moves away.
    pub fn render(
        view: &FileTreeView,
        active: Option<FileId>,
        frame: &mut Frame,
        area: Rect,
        is_focused: bool,
        indent_width: usize,
    ) {
        let viewport_height = area.height.saturating_sub(2) as usize;
        let scroll_offset = view.get_scroll_offset();
        let selected_index = view.get_selected_index();
        let active = active.map(FileId::node_id);

        let items: Vec<ListItem> = view
            .rows()
            .skip(scroll_offset)
            .take(viewport_height)
            .map(|row| Self::render_row(&row, active == Some(row.id), indent_width))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Files ")
                    .border_style(if is_focused {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default()
                    }),
            )
            .highlight_style(if is_focused {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default().bg(Color::DarkGray)
            });

        let mut list_state = ListState::default();
        if let Some(selected) = selected_index {
            if selected >= scroll_offset && selected < scroll_offset + viewport_height {
                list_state.select(Some(selected - scroll_offset));
            }
        }

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Render a single visible row as a ListItem
    fn render_row(row: &TreeRow<'_>, is_active: bool, indent_width: usize) -> ListItem<'static> {
        let mut spans = Vec::new();

        if row.depth > 0 {
            spans.push(Span::raw(" ".repeat(row.depth * indent_width)));
        }

        match row.kind {
            RowKind::Folder { open } => {
                let indicator = if open { "▼ " } else { "▶ " };
                spans.push(Span::styled(indicator, Style::default().fg(Color::Yellow)));
                spans.push(Span::styled("📁 ", Style::default().fg(Color::Blue)));
                spans.push(Span::styled(
                    row.name.to_string(),
                    Style::default().fg(Color::Cyan),
                ));
            }
            RowKind::File { language } => {
                spans.push(Span::raw("  "));
                spans.push(Span::raw(Self::get_icon(language, row.name)));
                let name_style = if is_active {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(row.name.to_string(), name_style));
            }
        }

        ListItem::new(Line::from(spans))
    }

    /// Get icon for a file, by language tag first and extension second
    fn get_icon(language: &str, name: &str) -> &'static str {
        let key = match language.to_lowercase().as_str() {
            "plaintext" | "" => name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
                .unwrap_or_default(),
            other => other.to_string(),
        };

        match key.as_str() {
            "rust" | "rs" => "🦀 ",
            "python" | "py" => "🐍 ",
            "javascript" | "typescript" | "js" | "ts" | "jsx" | "tsx" => "📜 ",
            "html" | "htm" => "🌐 ",
            "css" | "scss" | "sass" => "🎨 ",
            "markdown" | "md" | "txt" => "📝 ",
            "bash" | "shell" | "sh" | "zsh" => "⚡ ",
            _ => "📄 ",
        }
    }
}
