//! View rendering dispatch.

pub mod bookmarks;
pub mod form;
pub mod modal;

use crate::state::{App, Mode};
use crate::theme::notification_color;
use crate::traits::UrlOpener;
use linkdeck_storage::CatalogStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const HELP_LINE: &str =
    "Tab/h/l category • j/k move • Enter open • a add • c new category • d delete • D delete category • ? help • q quit";

pub fn render_view<S: CatalogStore, O: UrlOpener>(f: &mut Frame<'_>, app: &App<S, O>) {
    let background = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(background, f.size());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    bookmarks::render(f, app, layout[1]);
    render_footer(f, app, layout[2]);

    match &app.mode {
        Mode::Browse => {}
        Mode::Form(current) => form::render(f, app, current),
        Mode::Confirm(confirm) => modal::render_confirm(f, app, confirm),
        Mode::Help => modal::render_help(f, app),
    }
}

fn render_header<S: CatalogStore, O: UrlOpener>(f: &mut Frame<'_>, app: &App<S, O>, area: Rect) {
    let tabs = app.tabs();
    let titles: Vec<Line> = tabs
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i < 9 {
                Line::from(format!("{} {}", i + 1, name))
            } else {
                Line::from(name.to_string())
            }
        })
        .collect();

    let widget = Tabs::new(titles)
        .select(tabs.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(" linkdeck "),
        )
        .style(Style::default().fg(app.theme.text).bg(app.theme.panel))
        .highlight_style(
            Style::default()
                .fg(app.theme.text_header)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(widget, area);
}

fn render_footer<S: CatalogStore, O: UrlOpener>(f: &mut Frame<'_>, app: &App<S, O>, area: Rect) {
    let (text, style) = if let Some(note) = app.notifications.last() {
        (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (HELP_LINE.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(style.bg(app.theme.panel));
    f.render_widget(footer, area);
}
