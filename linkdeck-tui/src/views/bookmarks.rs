//! Bookmark table for the active category.

use crate::state::App;
use crate::traits::{UrlOpener, Widget};
use crate::widgets::DetailPanel;
use linkdeck_storage::CatalogStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render<S: CatalogStore, O: UrlOpener>(f: &mut Frame<'_>, app: &App<S, O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let category = app.active_category().unwrap_or_default();
    let items = app.active_bookmarks();
    let border = Style::default().fg(app.theme.border);

    if items.is_empty() {
        let empty = Paragraph::new("No bookmarks yet. Press 'a' to add one.")
            .style(Style::default().fg(app.theme.text_dim).bg(app.theme.panel))
            .block(
                Block::default()
                    .title(category)
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        f.render_widget(empty, chunks[0]);
    } else {
        let rows: Vec<Row> = items
            .iter()
            .map(|b| Row::new(vec![b.title.clone(), b.link().unwrap_or_default().to_string()]))
            .collect();

        let header = Row::new(vec!["Title", "URL"]).style(
            Style::default()
                .fg(app.theme.text_header)
                .bg(app.theme.panel)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            rows,
            [Constraint::Percentage(40), Constraint::Percentage(60)],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!("{} ({})", category, items.len()))
                .borders(Borders::ALL)
                .border_style(border),
        )
        .style(Style::default().fg(app.theme.text).bg(app.theme.input))
        .highlight_style(
            Style::default()
                .fg(app.theme.text_header)
                .bg(app.theme.accent),
        );

        let mut state = TableState::default();
        state.select(app.selected());
        f.render_stateful_widget(table, chunks[0], &mut state);
    }

    let fields = match app.selected_bookmark() {
        Some(bookmark) => vec![
            ("Title", bookmark.title.clone()),
            (
                "URL",
                bookmark
                    .link()
                    .map_or_else(|| "(note, no URL)".to_string(), str::to_string),
            ),
            ("Category", category.to_string()),
        ],
        None => vec![("Category", category.to_string())],
    };
    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.accent),
        border_style: border,
    }
    .render(f, chunks[1]);
}
