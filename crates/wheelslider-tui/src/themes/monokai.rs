//! Monokai theme

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x27, 0x28, 0x22),
        surface: Color::Rgb(0x49, 0x48, 0x3e),
        tick: Color::Rgb(0xf8, 0xf8, 0xf2),
        tick_minor: Color::Rgb(0x90, 0x8c, 0x77),
        indicator: Color::Rgb(0xe6, 0xdb, 0x74), // yellow
        label: Color::Rgb(0xd0, 0xd0, 0xc0),
        muted: Color::Rgb(0x75, 0x71, 0x5e),     // comment
        accent: Color::Rgb(0xa6, 0xe2, 0x2e),    // green
    }
}
