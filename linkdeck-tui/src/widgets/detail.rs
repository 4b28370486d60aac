//! Detail panel widget for showing field/value pairs.

use crate::traits::Widget;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(&'a str, String)>,
    pub style: Style,
    pub border_style: Style,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), self.style),
                    Span::raw(value.clone()),
                ])
            })
            .collect();

        let widget = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
