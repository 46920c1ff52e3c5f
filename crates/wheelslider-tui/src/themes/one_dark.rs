//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2c, 0x34), // bg
        surface: Color::Rgb(0x3e, 0x44, 0x51),    // bg-highlight
        tick: Color::Rgb(0xab, 0xb2, 0xbf),       // fg
        tick_minor: Color::Rgb(0x7f, 0x84, 0x8e),
        indicator: Color::Rgb(0xe5, 0xc0, 0x7b),  // yellow
        label: Color::Rgb(0x9d, 0xa5, 0xb4),
        muted: Color::Rgb(0x5c, 0x63, 0x70),      // comment
        accent: Color::Rgb(0x61, 0xaf, 0xef),     // blue
    }
}
