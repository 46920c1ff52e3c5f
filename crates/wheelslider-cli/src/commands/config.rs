use std::path::Path;

use anyhow::{bail, Result};

use wheelslider_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    let state = if config_path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", config_path.display(), state);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            config_path.display()
        );
    }
    AppConfig::default().save_to(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
