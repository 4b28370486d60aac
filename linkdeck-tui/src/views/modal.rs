//! Confirmation and help popups.

use crate::state::{App, Confirm};
use crate::traits::{UrlOpener, Widget};
use crate::widgets::{centered_rect, Popup};
use linkdeck_storage::CatalogStore;
use ratatui::{
    style::Style,
    text::{Line, Span},
    Frame,
};

const HELP: &[(&str, &str)] = &[
    ("Tab / l / →", "next category"),
    ("BackTab / h / ←", "previous category"),
    ("1-9", "jump to category"),
    ("j / k / ↑ / ↓", "move selection"),
    ("Enter / o", "open selected URL"),
    ("a", "add bookmark"),
    ("c", "new category"),
    ("d", "delete selected bookmark"),
    ("D", "delete current category"),
    ("?", "this help"),
    ("q / Ctrl-C", "quit"),
];

pub fn render_confirm<S: CatalogStore, O: UrlOpener>(
    f: &mut Frame<'_>,
    app: &App<S, O>,
    confirm: &Confirm,
) {
    let lines = vec![
        Line::from(confirm.prompt()),
        Line::from(""),
        Line::from(Span::styled(
            "y yes • n / Esc no",
            Style::default().fg(app.theme.text_dim),
        )),
    ];
    let area = centered_rect(50, 7, f.size());
    Popup {
        title: confirm.title(),
        lines,
        style: Style::default().fg(app.theme.text).bg(app.theme.panel),
        border_style: Style::default().fg(app.theme.danger),
    }
    .render(f, area);
}

pub fn render_help<S: CatalogStore, O: UrlOpener>(f: &mut Frame<'_>, app: &App<S, O>) {
    let key_style = Style::default().fg(app.theme.accent);
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{:>18}  ", keys), key_style),
                Span::raw(*what),
            ])
        })
        .collect();
    let height = lines.len() as u16 + 2;
    let area = centered_rect(60, height, f.size());
    Popup {
        title: "Keybindings",
        lines,
        style: Style::default().fg(app.theme.text).bg(app.theme.panel),
        border_style: Style::default().fg(app.theme.accent),
    }
    .render(f, area);
}
