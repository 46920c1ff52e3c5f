use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wheelslider_core::{AppConfig, Axis, IndexRounding, RenderStyle, ResyncPolicy};

mod commands;

#[derive(Parser)]
#[command(name = "wheelslider")]
#[command(author, version, about = "A ruler-style wheel slider for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive wheel (default)
    Run(SliderArgs),
    /// Print every tick and its value
    Lattice(SliderArgs),
    /// Show where a value (--value, else the configured one) lands on the wheel
    Snap(SliderArgs),
    /// List built-in themes
    Themes,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Slider settings that override the config file
#[derive(Args, Default)]
struct SliderArgs {
    /// Lower bound of the range
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,
    /// Upper bound of the range
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,
    /// Distance between ticks
    #[arg(long, conflicts_with = "step_count")]
    step: Option<f64>,
    /// Number of intervals between min and max
    #[arg(long)]
    step_count: Option<usize>,
    /// Initial value
    #[arg(long, allow_hyphen_values = true)]
    value: Option<f64>,
    /// Flat ticks instead of the curved falloff
    #[arg(long)]
    flat: bool,
    /// Vertical track
    #[arg(long)]
    vertical: bool,
    /// Re-center when the value changes from outside
    #[arg(long)]
    follow: bool,
    /// Map values to the nearest tick instead of truncating
    #[arg(long)]
    nearest: bool,
}

impl SliderArgs {
    fn apply(&self, config: &mut AppConfig) {
        let slider = &mut config.slider;
        if let Some(min) = self.min {
            slider.min = min;
        }
        if let Some(max) = self.max {
            slider.max = max;
        }
        if let Some(step) = self.step {
            slider.step = Some(step);
            slider.step_count = None;
        }
        if let Some(count) = self.step_count {
            slider.step_count = Some(count);
            slider.step = None;
        }
        if let Some(value) = self.value {
            slider.value = value;
        }
        if self.flat {
            slider.style = RenderStyle::Flat;
        }
        if self.vertical {
            slider.axis = Axis::Vertical;
        }
        if self.follow {
            slider.resync = ResyncPolicy::Follow;
        }
        if self.nearest {
            slider.rounding = IndexRounding::Nearest;
        }
    }
}

/// Log to a file under the data directory; the terminal belongs to the UI
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_file.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    init_logging(&config)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        None => commands::run::run(config),
        Some(Commands::Run(args)) => {
            args.apply(&mut config);
            commands::run::run(config)
        }
        Some(Commands::Lattice(args)) => {
            args.apply(&mut config);
            commands::lattice::run(&config)
        }
        Some(Commands::Snap(args)) => {
            args.apply(&mut config);
            commands::snap::run(&config)
        }
        Some(Commands::Themes) => commands::themes::run(&config),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_step_count_replaces_step() {
        let cli = Cli::parse_from(["wheelslider", "run", "--min", "-5", "--step-count", "4", "--vertical"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.slider.min, -5.0);
        assert_eq!(config.slider.step, None);
        assert_eq!(config.slider.step_count, Some(4));
        assert_eq!(config.slider.axis, Axis::Vertical);
    }

    #[test]
    fn test_step_and_step_count_conflict() {
        let parsed = Cli::try_parse_from(["wheelslider", "run", "--step", "1", "--step-count", "4"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_snap_takes_value() {
        let cli = Cli::parse_from(["wheelslider", "snap", "--value", "-7.3", "--nearest"]);
        let Some(Commands::Snap(args)) = cli.command else {
            panic!("expected snap");
        };
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.slider.value, -7.3);
        assert_eq!(config.slider.rounding, IndexRounding::Nearest);
    }
}
