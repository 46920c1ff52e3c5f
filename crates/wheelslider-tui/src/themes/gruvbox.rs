//! Gruvbox Material themes

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme::default()
}

pub fn light() -> Theme {
    Theme {
        background: Color::Rgb(0xfb, 0xf1, 0xc7),
        surface: Color::Rgb(0xeb, 0xdb, 0xb2),
        tick: Color::Rgb(0x65, 0x47, 0x35),
        tick_minor: Color::Rgb(0x92, 0x83, 0x74),
        indicator: Color::Rgb(0xb4, 0x71, 0x09),
        label: Color::Rgb(0x4f, 0x38, 0x29),
        muted: Color::Rgb(0xa8, 0x99, 0x84),
        accent: Color::Rgb(0x6c, 0x78, 0x2e),
    }
}
