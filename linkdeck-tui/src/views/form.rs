//! Input form popup for new bookmarks and categories.

use crate::state::{App, Form, FormField};
use crate::traits::{UrlOpener, Widget};
use crate::widgets::{centered_rect, Popup};
use linkdeck_storage::CatalogStore;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render<S: CatalogStore, O: UrlOpener>(f: &mut Frame<'_>, app: &App<S, O>, form: &Form) {
    let label = Style::default().fg(app.theme.text_dim);
    let focused = Style::default()
        .fg(app.theme.text_header)
        .bg(app.theme.input)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(app.theme.text).bg(app.theme.input);

    let (title, mut lines) = match form {
        Form::Bookmark {
            category,
            title,
            url,
            focus,
        } => (
            "Add Bookmark",
            vec![
                Line::from(Span::styled(format!("Category: {}", category), label)),
                Line::from(""),
                field_line(
                    "Title",
                    title,
                    if *focus == FormField::Title { focused } else { idle },
                    label,
                ),
                field_line(
                    "URL (optional)",
                    url,
                    if *focus == FormField::Url { focused } else { idle },
                    label,
                ),
            ],
        ),
        Form::Category { name } => (
            "New Category",
            vec![field_line("Name", name, focused, label)],
        ),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter save • Tab next field • Esc cancel",
        label,
    )));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(60, height, f.size());
    Popup {
        title,
        lines,
        style: Style::default().fg(app.theme.text).bg(app.theme.panel),
        border_style: Style::default().fg(app.theme.accent),
    }
    .render(f, area);
}

fn field_line<'a>(name: &'a str, value: &'a str, value_style: Style, label: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>15}: ", name), label),
        Span::styled(format!("{}_", value), value_style),
    ])
}
