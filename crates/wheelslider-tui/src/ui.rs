//! Frame layout: the wheel centered in the screen above a status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};
use wheelslider_core::Axis;

use crate::app::{App, Mode};
use crate::widgets::{centered_rect, PopupWidget, StatusBarWidget, WheelSlider};

/// Rows of a horizontal wheel including its border
const HORIZONTAL_HEIGHT: u16 = 5;
/// Columns of a vertical wheel including its border
const VERTICAL_WIDTH: u16 = 18;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.background)), size);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    let wheel_area = wheel_area(main_layout[0], app.slider.options().axis);
    let block = Block::default()
        .title(" WheelSlider ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.muted));

    frame.render_stateful_widget(
        WheelSlider::new(app.value, &app.theme).block(block),
        wheel_area,
        &mut app.slider,
    );
    StatusBarWidget::render(frame, main_layout[1], app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, &app.config.keymap, &app.theme);
    }
}

/// Where the wheel goes inside `area` for the given axis
pub fn wheel_area(area: Rect, axis: Axis) -> Rect {
    match axis {
        Axis::Horizontal => centered_rect(area.width.saturating_sub(4), HORIZONTAL_HEIGHT, area),
        Axis::Vertical => centered_rect(VERTICAL_WIDTH, area.height.saturating_sub(2), area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_area_per_axis() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(wheel_area(area, Axis::Horizontal), Rect::new(2, 7, 56, 5));
        assert_eq!(wheel_area(area, Axis::Vertical), Rect::new(21, 1, 18, 18));
    }
}
