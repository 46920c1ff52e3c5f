mod popup;
mod status_bar;
mod wheel_slider;

pub use popup::{centered_rect, PopupWidget};
pub use status_bar::StatusBarWidget;
pub use wheel_slider::{
    format_value, value_precision, TrackLayout, WheelSlider, WheelSliderOptions, WheelSliderState,
};
