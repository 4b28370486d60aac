//! Common traits for TUI components

use ratatui::{layout::Rect, Frame};

/// Hands a URL to something that can display it.
///
/// The terminal app uses [`SystemOpener`]; tests substitute a recorder.
pub trait UrlOpener {
    /// Open `url`, returning a human-readable reason on failure.
    fn open(&self, url: &str) -> Result<(), String>;
}

/// Opens URLs with the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), String> {
        open::that(url).map_err(|e| format!("Failed to open URL: {}", e))
    }
}

impl<T: UrlOpener + ?Sized> UrlOpener for &T {
    fn open(&self, url: &str) -> Result<(), String> {
        (**self).open(url)
    }
}

/// A widget that renders self-contained content without application state.
///
/// This trait is for simpler widgets that don't need access to the full
/// application state and can render independently.
pub trait Widget {
    /// Render this widget to the given frame within the specified area.
    fn render(&self, f: &mut Frame<'_>, area: Rect);
}
