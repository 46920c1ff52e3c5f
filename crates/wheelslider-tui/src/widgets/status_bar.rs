use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use wheelslider_core::{RenderStyle, ResyncPolicy, ScrollPosition};

use crate::app::{App, Mode};
use crate::widgets::format_value;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            Self::summary(app)
        };

        let help_hint = " q:quit h/l:step H/L:major ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.label).bg(theme.surface),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.surface)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.surface)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn summary(app: &App) -> String {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };
        let options = app.slider.options();
        let style = match options.style {
            RenderStyle::Curved => "curved",
            RenderStyle::Flat => "flat",
        };
        let resync = match options.resync {
            ResyncPolicy::MountOnly => "mount-only",
            ResyncPolicy::Follow => "follow",
        };
        let position = match app.slider.position() {
            ScrollPosition::Uninitialized => "-".to_string(),
            ScrollPosition::Positioned(index) => index.to_string(),
        };
        format!(
            " {} | {} | {} | tick {}/{} | value {} | settles: {}",
            mode_str,
            style,
            resync,
            position,
            app.slider.model().step_count(),
            format_value(app.value, app.slider.model()),
            app.feedback.count()
        )
    }
}
