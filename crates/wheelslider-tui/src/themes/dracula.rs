//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36), // Background
        surface: Color::Rgb(0x44, 0x47, 0x5a),    // Current Line
        tick: Color::Rgb(0xf8, 0xf8, 0xf2),       // Foreground
        tick_minor: Color::Rgb(0xbf, 0xbf, 0xc6),
        indicator: Color::Rgb(0xf1, 0xfa, 0x8c),  // Yellow
        label: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x62, 0x72, 0xa4),      // Comment
        accent: Color::Rgb(0xbd, 0x93, 0xf9),     // Purple
    }
}
