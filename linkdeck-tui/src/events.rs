//! Event types for the TUI event loop.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
}

impl TuiEvent {
    /// Translate a terminal event. Key releases and repeats are dropped so
    /// each keystroke acts once on every platform.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Input(key)),
            Event::Resize(width, height) => Some(TuiEvent::Resize { width, height }),
            _ => None,
        }
    }
}
