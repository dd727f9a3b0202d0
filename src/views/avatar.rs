use maud::{html, Markup};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Stand-in for the avatar image. Terminals can't show the picture, so the
/// tile carries a glyph derived from the image file name instead.
pub struct Avatar<'a> {
    src: &'a str,
}

impl<'a> Avatar<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    /// First alphanumeric char of the last path segment, upper-cased.
    pub fn glyph(&self) -> char {
        self.src
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|name| name.chars().find(|c| c.is_alphanumeric()))
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }

    /// Inline form used next to comments.
    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.glyph()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    }

    pub fn markup(&self) -> Markup {
        html! {
            img class="avatar" src=(self.src);
        }
    }
}

impl Widget for Avatar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));

        Paragraph::new(self.glyph().to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
