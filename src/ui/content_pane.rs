use crate::viewer::ContentPane;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "Select a file to view its contents";

pub struct ContentPaneRenderer;

impl ContentPaneRenderer {
    /// Render the active file (or the placeholder) starting at line `scroll`
    pub fn render(
        pane: &ContentPane<'_>,
        frame: &mut Frame,
        area: Rect,
        scroll: usize,
        is_focused: bool,
        show_language: bool,
    ) {
        let title_width = area.width.saturating_sub(4) as usize;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(truncate_to_width(&Self::title(pane, show_language), title_width))
            .border_style(if is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });

        let paragraph = match pane {
            ContentPane::Placeholder => Paragraph::new(Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            ContentPane::File { .. } => {
                let height = area.height.saturating_sub(2) as usize;
                Paragraph::new(Self::numbered_lines(pane, scroll, height))
            }
        };

        frame.render_widget(paragraph.block(block), area);
    }

    fn title(pane: &ContentPane<'_>, show_language: bool) -> String {
        match pane {
            ContentPane::Placeholder => " No file selected ".to_string(),
            ContentPane::File { path, language, .. } if show_language => {
                format!(" {} [{}] ", path, language)
            }
            ContentPane::File { path, .. } => format!(" {} ", path),
        }
    }

    /// Content lines in the scroll window, each prefixed by its line number
    fn numbered_lines(pane: &ContentPane<'_>, scroll: usize, height: usize) -> Vec<Line<'static>> {
        let total = pane.line_count();
        let gutter = total.to_string().len();
        let number_style = Style::default().fg(Color::DarkGray);

        // `lines()` yields nothing for empty content, which still shows line 1
        let text = pane.text();
        let lines: Box<dyn Iterator<Item = &str>> = if text.is_empty() {
            Box::new(std::iter::once(""))
        } else {
            Box::new(text.lines())
        };

        lines
            .enumerate()
            .skip(scroll)
            .take(height)
            .map(|(idx, line)| {
                Line::from(vec![
                    Span::styled(format!("{:>gutter$} │ ", idx + 1), number_style),
                    Span::raw(expand_tabs(line)),
                ])
            })
            .collect()
    }
}

/// Replace tabs with spaces, since the terminal renders a tab as one cell
fn expand_tabs(line: &str) -> String {
    line.replace('\t', "    ")
}

/// Cut `text` to at most `max_width` columns, marking the cut with `…`
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}
