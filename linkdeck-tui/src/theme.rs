//! Midnight theme and color utilities.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct MidnightTheme {
    pub bg: Color,
    pub panel: Color,
    pub input: Color,
    pub accent: Color,
    pub danger: Color,
    pub success: Color,
    pub warning: Color,
    pub text: Color,
    pub text_header: Color,
    pub text_dim: Color,
    pub border: Color,
}

impl MidnightTheme {
    pub fn midnight() -> Self {
        Self {
            bg: Color::Rgb(0x25, 0x25, 0x26),
            panel: Color::Rgb(0x2D, 0x2D, 0x30),
            input: Color::Rgb(0x3C, 0x3C, 0x3C),
            accent: Color::Rgb(0x00, 0x7A, 0xCC),
            danger: Color::Rgb(0xCC, 0x29, 0x3D),
            success: Color::Rgb(0x4E, 0xC9, 0xB0),
            warning: Color::Rgb(0xDC, 0xDC, 0xAA),
            text: Color::Rgb(0xCC, 0xCC, 0xCC),
            text_header: Color::Rgb(0xF0, 0xF0, 0xF0),
            text_dim: Color::Rgb(0x80, 0x80, 0x80),
            border: Color::Rgb(0x44, 0x44, 0x44),
        }
    }
}

impl Default for MidnightTheme {
    fn default() -> Self {
        Self::midnight()
    }
}

pub fn notification_color(level: NotificationLevel, theme: &MidnightTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.accent,
        NotificationLevel::Success => theme.success,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.danger,
    }
}
