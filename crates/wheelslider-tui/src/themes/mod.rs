//! Theme registry and loader
//!
//! Built-in themes plus per-color hex overrides from the config file.

mod dracula;
mod gruvbox;
mod monokai;
mod nord;
mod one_dark;

use ratatui::style::Color;
use tracing::warn;
use wheelslider_core::config::{ThemeColorOverrides, ThemeConfig};

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "one-dark" | "onedark" => one_dark::default(),
        "monokai" => monokai::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

fn override_color(slot: &mut Color, hex: &Option<String>) {
    let Some(hex) = hex else {
        return;
    };
    match parse_hex_color(hex) {
        Some(color) => *slot = color,
        None => warn!("Invalid color '{}' in theme overrides, ignoring", hex),
    }
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    override_color(&mut theme.background, &overrides.background);
    override_color(&mut theme.surface, &overrides.surface);
    override_color(&mut theme.tick, &overrides.tick);
    override_color(&mut theme.tick_minor, &overrides.tick_minor);
    override_color(&mut theme.indicator, &overrides.indicator);
    override_color(&mut theme.label, &overrides.label);
    override_color(&mut theme.muted, &overrides.muted);
    override_color(&mut theme.accent, &overrides.accent);
    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec![
        "gruvbox-dark",
        "gruvbox-light",
        "nord",
        "dracula",
        "one-dark",
        "monokai",
    ]
}
