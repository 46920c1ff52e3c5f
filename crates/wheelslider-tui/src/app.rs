use tracing::info;
use wheelslider_core::{AppConfig, RenderStyle, ResyncPolicy};

use crate::feedback::TerminalFeedback;
use crate::input::Action;
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::widgets::{format_value, WheelSliderOptions, WheelSliderState};

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Demo application: one wheel bound to one value
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    /// The bound value; only the wheel's settle and explicit resets write it
    pub value: f64,
    pub slider: WheelSliderState,
    pub feedback: TerminalFeedback,
    /// Status message to display
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences like "gg"
    pub pending_key: Option<char>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> wheelslider_core::Result<Self> {
        let model = config.slider.model()?;
        let theme = load_theme(&config.ui.theme);
        let slider = WheelSliderState::new(model, WheelSliderOptions::from_config(&config));
        Ok(Self {
            value: config.slider.value,
            feedback: TerminalFeedback::new(config.ui.bell_on_settle),
            theme,
            slider,
            config,
            mode: Mode::Normal,
            status_message: None,
            pending_key: None,
            should_quit: false,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Whether the event loop should poll at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.slider.needs_update()
    }

    /// Advance the wheel one frame and report any settle
    pub fn tick(&mut self) {
        if let Some(value) = self.slider.update(&mut self.value, &mut self.feedback) {
            let text = format_value(value, self.slider.model());
            self.set_status(format!("Selected {}", text));
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        if action == Action::PendingG {
            self.pending_key = Some('g');
            return;
        }
        self.clear_pending_key();

        let major = self.config.gesture.major_step as i64;
        let wheel = self.config.gesture.wheel_ticks as i64;
        match action {
            Action::Quit => self.should_quit = true,
            Action::StepBack => self.slider.step_by(-1),
            Action::StepForward => self.slider.step_by(1),
            Action::MajorBack => self.slider.step_by(-major),
            Action::MajorForward => self.slider.step_by(major),
            Action::JumpToStart => self.slider.jump_to(0),
            Action::JumpToEnd => self.slider.jump_to(self.slider.model().step_count()),
            Action::ToggleStyle => {
                self.config.slider.style = match self.config.slider.style {
                    RenderStyle::Curved => RenderStyle::Flat,
                    RenderStyle::Flat => RenderStyle::Curved,
                };
                self.rebuild_slider();
                self.set_status(format!("Style: {:?}", self.config.slider.style));
            }
            Action::ToggleAxis => {
                self.config.slider.axis = self.config.slider.axis.toggled();
                self.rebuild_slider();
                self.set_status(format!("Axis: {:?}", self.config.slider.axis));
            }
            Action::ToggleResync => {
                self.config.slider.resync = match self.config.slider.resync {
                    ResyncPolicy::MountOnly => ResyncPolicy::Follow,
                    ResyncPolicy::Follow => ResyncPolicy::MountOnly,
                };
                self.rebuild_slider();
                self.set_status(format!("Resync: {:?}", self.config.slider.resync));
            }
            Action::ResetValue => self.reset_value(),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.clear_status();
            }
            Action::PointerDown { column, row } => {
                self.slider.begin_drag(column, row);
            }
            Action::PointerDrag { column, row } => self.slider.drag_to(column, row),
            Action::PointerUp => self.slider.end_drag(),
            Action::Wheel(notches) => self.slider.step_by(notches * wheel),
            Action::PendingG | Action::None => {}
        }
    }

    /// Write the configured start value from outside the wheel
    fn reset_value(&mut self) {
        self.value = self.config.slider.value;
        let text = format_value(self.value, self.slider.model());
        let note = match self.config.slider.resync {
            ResyncPolicy::Follow => "wheel follows",
            ResyncPolicy::MountOnly => "wheel keeps its position",
        };
        self.set_status(format!("Value reset to {} ({})", text, note));
    }

    /// Replace the wheel with a fresh instance that re-aligns on its next render
    fn rebuild_slider(&mut self) {
        let model = *self.slider.model();
        let options = WheelSliderOptions::from_config(&self.config);
        info!(style = ?options.style, axis = ?options.axis, resync = ?options.resync, "rebuilding wheel");
        self.slider = WheelSliderState::new(model, options);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use wheelslider_core::{Axis, ScrollPosition};

    use super::*;
    use crate::ui;

    fn instant_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        config
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    }

    #[test]
    fn test_new_app_uses_config() {
        let app = App::new(instant_config()).unwrap();
        assert_eq!(app.value, 5.0);
        assert_eq!(app.slider.model().step_count(), 60);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_invalid_slider_config_is_rejected() {
        let mut config = instant_config();
        config.slider.min = 10.0;
        config.slider.max = 0.0;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_step_writes_value_on_settle() {
        let mut app = App::new(instant_config()).unwrap();
        draw(&mut app);
        app.handle_action(Action::StepForward);
        app.tick();
        assert_eq!(app.value, 5.5);
        assert_eq!(app.feedback.count(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Selected 5.5"));

        app.handle_action(Action::MajorBack);
        app.tick();
        assert_eq!(app.value, 3.0);
    }

    #[test]
    fn test_gg_and_g_jump_to_ends() {
        let mut app = App::new(instant_config()).unwrap();
        draw(&mut app);
        app.handle_action(Action::JumpToEnd);
        app.tick();
        assert_eq!(app.value, 30.0);

        app.handle_action(Action::PendingG);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::JumpToStart);
        assert_eq!(app.pending_key, None);
        app.tick();
        assert_eq!(app.value, 0.0);
    }

    #[test]
    fn test_toggle_axis_rebuilds_at_current_value() {
        let mut app = App::new(instant_config()).unwrap();
        draw(&mut app);
        app.handle_action(Action::StepForward);
        app.tick();

        app.handle_action(Action::ToggleAxis);
        assert_eq!(app.slider.options().axis, Axis::Vertical);
        assert_eq!(app.slider.position(), ScrollPosition::Uninitialized);
        draw(&mut app);
        assert_eq!(app.slider.offset(), 11.0);
        assert_eq!(app.value, 5.5);
    }

    #[test]
    fn test_reset_value_respects_resync_policy() {
        let mut app = App::new(instant_config()).unwrap();
        draw(&mut app);
        app.handle_action(Action::JumpToEnd);
        app.tick();
        assert_eq!(app.slider.offset(), 60.0);

        app.handle_action(Action::ResetValue);
        app.tick();
        assert_eq!(app.value, 5.0);
        assert_eq!(app.slider.offset(), 60.0);

        app.handle_action(Action::ToggleResync);
        draw(&mut app);
        app.handle_action(Action::JumpToEnd);
        app.tick();
        app.handle_action(Action::ResetValue);
        app.tick();
        assert_eq!(app.slider.offset(), 10.0);
        assert_eq!(app.value, 5.0);
    }

    #[test]
    fn test_help_mode() {
        let mut app = App::new(instant_config()).unwrap();
        app.handle_action(Action::Help);
        assert_eq!(app.mode, Mode::Help);
        draw(&mut app);
        app.handle_action(Action::ExitMode);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(instant_config()).unwrap();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
