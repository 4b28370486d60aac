//! Reusable widget components.

pub mod detail;
pub mod popup;

pub use detail::DetailPanel;
pub use popup::{centered_rect, Popup};
