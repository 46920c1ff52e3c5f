use anyhow::Result;

use wheelslider_core::AppConfig;
use wheelslider_tui::available_themes;

pub fn run(config: &AppConfig) -> Result<()> {
    let current = config.ui.theme.name.to_lowercase();
    println!("Available themes:\n");
    for name in available_themes() {
        let marker = if name == current { "*" } else { " " };
        println!("  {} {}", marker, name);
    }
    println!("\nSet one with `[ui] theme = \"<name>\"` in the config file.");
    Ok(())
}
