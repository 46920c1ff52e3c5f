pub mod app;
pub mod event;
pub mod feedback;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use themes::{available_themes, load_theme};
pub use widgets::{WheelSlider, WheelSliderOptions, WheelSliderState};
