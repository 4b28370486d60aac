//! Centered popup box drawn over the main view.

use crate::traits::Widget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct Popup<'a> {
    pub title: &'a str,
    pub lines: Vec<Line<'a>>,
    pub style: Style,
    pub border_style: Style,
}

impl<'a> Widget for Popup<'a> {
    fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let widget = Paragraph::new(self.lines.clone())
            .style(self.style)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(Clear, area);
        f.render_widget(widget, area);
    }
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let percent_x = percent_x.min(100);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
