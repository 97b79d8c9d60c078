use crate::playback::TypingPlayback;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct PlaybackRenderer;

impl PlaybackRenderer {
    /// Render the current snippet as typed so far, with a block cursor at the end
    pub fn render(playback: &TypingPlayback, frame: &mut Frame, area: Rect) {
        let snippet = playback.current();
        let title = format!(
            " {} ({}/{}){} ",
            snippet.name,
            playback.index() + 1,
            playback.snippets().len(),
            if playback.is_in_view() { "" } else { " paused" }
        );

        let mut lines: Vec<Line> = playback
            .displayed()
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled("▌", Style::default().fg(Color::Green)));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(paragraph, area);
    }
}
