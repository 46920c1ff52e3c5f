use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Behind the track; faded ticks blend toward it
    pub background: Color,
    /// Status bar and popups
    pub surface: Color,
    /// Major ticks
    pub tick: Color,
    /// Minor ticks
    pub tick_minor: Color,
    /// Fixed center indicator
    pub indicator: Color,
    /// Value label
    pub label: Color,
    /// Hints and secondary text
    pub muted: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            background: Color::Rgb(0x28, 0x28, 0x28),
            surface: Color::Rgb(0x45, 0x40, 0x3d),
            tick: Color::Rgb(0xd4, 0xbe, 0x98),
            tick_minor: Color::Rgb(0xa8, 0x99, 0x84),
            indicator: Color::Rgb(0xd8, 0xa6, 0x57),
            label: Color::Rgb(0xdd, 0xc7, 0xa1),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

/// Mix `fg` over `bg` at `opacity` (0 = background, 1 = foreground)
///
/// Only RGB colors can be mixed; named colors are shown as-is above half
/// opacity and as the background below it.
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                (b as f64 + (f as f64 - b as f64) * opacity).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if opacity >= 0.5 => fg,
        _ => bg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_blend_clamps_opacity() {
        let fg = Color::Rgb(10, 20, 30);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 3.0), fg);
        assert_eq!(blend(fg, bg, -1.0), bg);
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Yellow, Color::Black, 0.75), Color::Yellow);
        assert_eq!(blend(Color::Yellow, Color::Black, 0.25), Color::Black);
    }
}
