use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::axis::Axis;
use crate::binding::ResyncPolicy;
use crate::decay::{DecayProfile, RenderStyle};
use crate::mapping::{IndexRounding, SliderModel, StepSpec, ValueRange};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Range, granularity and behaviour of the demo slider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lower bound of the range
    #[serde(default = "default_min")]
    pub min: f64,
    /// Upper bound of the range
    #[serde(default = "default_max")]
    pub max: f64,
    /// Distance between ticks (mutually exclusive with `step_count`)
    ///
    /// Only the built-in configuration carries a step (0.5). A `[slider]`
    /// table that sets neither `step` nor `step_count` gets 10 intervals.
    #[serde(default)]
    pub step: Option<f64>,
    /// Number of intervals (mutually exclusive with `step`)
    #[serde(default)]
    pub step_count: Option<usize>,
    /// Initial bound value
    #[serde(default = "default_value")]
    pub value: f64,
    /// Tick decoration: "curved" or "flat"
    #[serde(default)]
    pub style: RenderStyle,
    /// Track direction: "horizontal" or "vertical"
    #[serde(default)]
    pub axis: Axis,
    /// Value to index mapping: "truncate" or "nearest"
    #[serde(default)]
    pub rounding: IndexRounding,
    /// External value changes: "mount-only" or "follow"
    #[serde(default)]
    pub resync: ResyncPolicy,
    /// Double the thickness of the centered tick in the flat style
    #[serde(default)]
    pub flare: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            step: Some(default_step()),
            step_count: None,
            value: default_value(),
            style: RenderStyle::default(),
            axis: Axis::default(),
            rounding: IndexRounding::default(),
            resync: ResyncPolicy::default(),
            flare: false,
        }
    }
}

impl SliderConfig {
    /// Step specification; `step` and `step_count` may not both be set
    pub fn step_spec(&self) -> crate::Result<StepSpec> {
        match (self.step, self.step_count) {
            (Some(_), Some(_)) => Err(crate::Error::Config(
                "slider.step and slider.step_count are mutually exclusive".to_string(),
            )),
            (Some(step), None) => Ok(StepSpec::Step(step)),
            (None, Some(count)) => Ok(StepSpec::Count(count)),
            (None, None) => Ok(StepSpec::Count(default_step_count())),
        }
    }

    /// Validated model for this configuration
    pub fn model(&self) -> crate::Result<SliderModel> {
        let model = SliderModel::new(ValueRange::new(self.min, self.max), self.step_spec()?)?;
        Ok(model.with_rounding(self.rounding))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How many tick slots fit across a horizontal track
    #[serde(default = "default_visible_ticks_horizontal")]
    pub visible_ticks_horizontal: f64,
    /// How many tick slots fit along a vertical track
    #[serde(default = "default_visible_ticks_vertical")]
    pub visible_ticks_vertical: f64,
    /// Layout units per terminal column (feeds the decay radius)
    #[serde(default = "default_cell_width_units")]
    pub cell_width_units: f64,
    /// Layout units per terminal row (feeds the decay radius)
    #[serde(default = "default_cell_height_units")]
    pub cell_height_units: f64,
    /// Ring the terminal bell as selection feedback on every settle
    #[serde(default)]
    pub bell_on_settle: bool,
    /// Print the current value under the indicator
    #[serde(default = "default_true")]
    pub show_value: bool,
    /// Falloff divisors of the curved style
    #[serde(default)]
    pub decay: DecayProfile,
    /// Snap animation
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            visible_ticks_horizontal: default_visible_ticks_horizontal(),
            visible_ticks_vertical: default_visible_ticks_vertical(),
            cell_width_units: default_cell_width_units(),
            cell_height_units: default_cell_height_units(),
            bell_on_settle: false,
            show_value: default_true(),
            decay: DecayProfile::default(),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Easing curve of the snap animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Animation of the track toward the snapped tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate snapping; when off the track jumps straight to the tick
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of a snap animation in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Pointer behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// How long a released drag keeps coasting at its release velocity
    #[serde(default = "default_inertia")]
    pub inertia_ms: u64,
    /// Ticks moved per mouse wheel notch
    #[serde(default = "default_wheel_ticks")]
    pub wheel_ticks: usize,
    /// Ticks moved by the major step keys
    #[serde(default = "default_major_step")]
    pub major_step: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            inertia_ms: default_inertia(),
            wheel_ticks: default_wheel_ticks(),
            major_step: default_major_step(),
        }
    }
}

impl GestureConfig {
    pub fn inertia(&self) -> Duration {
        Duration::from_millis(self.inertia_ms)
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a map with `name` and `colors`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Background behind the track
    pub background: Option<String>,
    /// Status bar and popup background
    pub surface: Option<String>,
    /// Major tick color
    pub tick: Option<String>,
    /// Minor tick color
    pub tick_minor: Option<String>,
    /// Center indicator color
    pub indicator: Option<String>,
    /// Value label color
    pub label: Option<String>,
    /// Hints and secondary text
    pub muted: Option<String>,
    /// Accent color
    pub accent: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Move one tick toward the lower bound
    #[serde(default = "default_key_step_back")]
    pub step_back: String,
    /// Move one tick toward the upper bound
    #[serde(default = "default_key_step_forward")]
    pub step_forward: String,
    /// Move one major interval toward the lower bound
    #[serde(default = "default_key_major_back")]
    pub major_back: String,
    /// Move one major interval toward the upper bound
    #[serde(default = "default_key_major_forward")]
    pub major_forward: String,
    /// Jump to the first tick
    #[serde(default = "default_key_jump_to_start")]
    pub jump_to_start: String,
    /// Jump to the last tick
    #[serde(default = "default_key_jump_to_end")]
    pub jump_to_end: String,
    /// Switch between curved and flat ticks
    #[serde(default = "default_key_toggle_style")]
    pub toggle_style: String,
    /// Switch between horizontal and vertical track
    #[serde(default = "default_key_toggle_axis")]
    pub toggle_axis: String,
    /// Switch between mount-only and follow resync
    #[serde(default = "default_key_toggle_resync")]
    pub toggle_resync: String,
    /// Reset the bound value from outside the wheel
    #[serde(default = "default_key_reset_value")]
    pub reset_value: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            step_back: default_key_step_back(),
            step_forward: default_key_step_forward(),
            major_back: default_key_major_back(),
            major_forward: default_key_major_forward(),
            jump_to_start: default_key_jump_to_start(),
            jump_to_end: default_key_jump_to_end(),
            toggle_style: default_key_toggle_style(),
            toggle_axis: default_key_toggle_axis(),
            toggle_resync: default_key_toggle_resync(),
            reset_value: default_key_reset_value(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_step_back() -> String { "h".to_string() }
fn default_key_step_forward() -> String { "l".to_string() }
fn default_key_major_back() -> String { "H".to_string() }
fn default_key_major_forward() -> String { "L".to_string() }
fn default_key_jump_to_start() -> String { "gg".to_string() }
fn default_key_jump_to_end() -> String { "G".to_string() }
fn default_key_toggle_style() -> String { "s".to_string() }
fn default_key_toggle_axis() -> String { "a".to_string() }
fn default_key_toggle_resync() -> String { "f".to_string() }
fn default_key_reset_value() -> String { "r".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wheelslider")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    30.0
}

fn default_step() -> f64 {
    0.5
}

fn default_step_count() -> usize {
    10
}

fn default_value() -> f64 {
    5.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_visible_ticks_horizontal() -> f64 {
    19.0
}

fn default_visible_ticks_vertical() -> f64 {
    18.66
}

fn default_cell_width_units() -> f64 {
    8.0
}

fn default_cell_height_units() -> f64 {
    16.0
}

fn default_animation_duration() -> u64 {
    250 // ms
}

fn default_animation_fps() -> u32 {
    60
}

fn default_inertia() -> u64 {
    150 // ms
}

fn default_wheel_ticks() -> usize {
    1
}

fn default_major_step() -> usize {
    5
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/wheelslider/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("wheelslider")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("wheelslider.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_preview_model() {
        let config = AppConfig::default();
        let model = config.slider.model().unwrap();
        assert_eq!(model.step_count(), 60);
        assert_eq!(config.slider.value, 5.0);
        assert_eq!(config.ui.scroll.animation_duration_ms, 250);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.slider.max, 30.0);
        assert_eq!(config.keymap.quit, "q");
        assert_eq!(config.gesture.inertia(), Duration::from_millis(150));
    }

    #[test]
    fn test_parse_slider_section() {
        let config = AppConfig::from_toml(
            r#"
            [slider]
            min = 0.0
            max = 10.0
            step_count = 10
            style = "flat"
            axis = "vertical"
            rounding = "nearest"
            resync = "follow"
            "#,
        )
        .unwrap();
        assert_eq!(config.slider.style, RenderStyle::Flat);
        assert_eq!(config.slider.axis, Axis::Vertical);
        assert_eq!(config.slider.resync, ResyncPolicy::Follow);
        let model = config.slider.model().unwrap();
        assert!((model.step() - 1.0).abs() < 1e-12);
        assert_eq!(model.rounding(), IndexRounding::Nearest);
    }

    #[test]
    fn test_step_and_count_are_exclusive() {
        let slider = SliderConfig {
            step: Some(1.0),
            step_count: Some(4),
            ..Default::default()
        };
        assert!(matches!(slider.model(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_missing_step_defaults_to_ten_intervals() {
        let slider = SliderConfig {
            step: None,
            step_count: None,
            max: 20.0,
            ..Default::default()
        };
        assert_eq!(slider.model().unwrap().step_count(), 10);
    }

    #[test]
    fn test_slider_table_without_step_uses_ten_intervals() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.slider.step, Some(0.5));

        let config = AppConfig::from_toml("[slider]\nmax = 20.0\n").unwrap();
        assert_eq!(config.slider.step, None);
        let model = config.slider.model().unwrap();
        assert_eq!(model.step_count(), 10);
        assert_eq!(model.step(), 2.0);

        let config = AppConfig::from_toml("[slider]\nstep_count = 4\n").unwrap();
        assert_eq!(config.slider.model().unwrap().step_count(), 4);
    }

    #[test]
    fn test_invalid_range_surfaces_model_error() {
        let slider = SliderConfig {
            min: 10.0,
            max: 0.0,
            ..Default::default()
        };
        assert!(matches!(slider.model(), Err(crate::Error::InvalidRange { .. })));
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"dracula\"\n[ui.theme.colors]\nindicator = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.indicator.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_round_trips_through_file() {
        let dir = std::env::temp_dir().join(format!("wheelslider-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.slider.value = 12.5;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.slider.value, 12.5);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("wheelslider-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.slider.min, 0.0);
    }
}
