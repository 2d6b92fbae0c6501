//! Colour palette.

use ratatui::style::{Color, Modifier, Style};
use sprawl_core::reveal::LineCategory;

pub const TEXT: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
pub const TEXT_SECONDARY: Color = Color::Rgb(0xD1, 0xD5, 0xDB);
pub const MUTED: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
pub const DIM: Color = Color::Rgb(0x6B, 0x72, 0x80);
pub const BORDER: Color = Color::Rgb(0x2A, 0x2A, 0x35);

pub const PURPLE: Color = Color::Rgb(0x7C, 0x3A, 0xED);
pub const PURPLE_LIGHT: Color = Color::Rgb(0xA7, 0x8B, 0xFA);
pub const AMBER: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const AMBER_DARK: Color = Color::Rgb(0xD9, 0x77, 0x06);
pub const GREEN: Color = Color::Rgb(0x10, 0xB9, 0x81);
pub const RED: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const RED_LIGHT: Color = Color::Rgb(0xF8, 0x71, 0x71);
pub const CYAN: Color = Color::Rgb(0x06, 0xB6, 0xD4);
pub const BACKGROUND: Color = Color::Rgb(0x0A, 0x0A, 0x0F);

pub const DOT_RED: Color = Color::Rgb(0xFF, 0x5F, 0x56);
pub const DOT_YELLOW: Color = Color::Rgb(0xFF, 0xBD, 0x2E);
pub const DOT_GREEN: Color = Color::Rgb(0x27, 0xC9, 0x3F);

pub fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

pub fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style of a terminal session line. `None` is a seed line.
pub fn session_line(category: Option<LineCategory>) -> Style {
    match category {
        None => fg(DIM),
        Some(LineCategory::Plain) => fg(TEXT_SECONDARY),
        Some(LineCategory::Error) => fg(RED_LIGHT),
        Some(LineCategory::Success) => fg(GREEN),
        Some(LineCategory::Command) => fg(AMBER),
    }
}
