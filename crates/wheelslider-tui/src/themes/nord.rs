//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        surface: Color::Rgb(0x43, 0x4c, 0x5e),    // nord2
        tick: Color::Rgb(0xec, 0xef, 0xf4),       // nord6
        tick_minor: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        indicator: Color::Rgb(0xeb, 0xcb, 0x8b),  // nord13
        label: Color::Rgb(0xe5, 0xe9, 0xf0),      // nord5
        muted: Color::Rgb(0x61, 0x6e, 0x88),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),     // nord8
    }
}
