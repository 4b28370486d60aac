//! Keybinding definitions for browse mode.
//!
//! Form and confirmation modes read raw keys directly in
//! [`App::handle_key`](crate::state::App::handle_key).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextCategory,
    PrevCategory,
    SwitchCategory(usize),
    MoveUp,
    MoveDown,
    OpenSelected,
    AddBookmark,
    NewCategory,
    DeleteSelected,
    DeleteCategory,
    OpenHelp,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('a') => Some(Action::AddBookmark),
        KeyCode::Char('c') => Some(Action::NewCategory),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
        KeyCode::Char('D') => Some(Action::DeleteCategory),
        KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenSelected),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCategory),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SwitchCategory(c as usize - '1' as usize)),
        _ => None,
    }
}
