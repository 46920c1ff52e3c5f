//! Wheel slider widget - a ruler of ticks scrolled under a fixed indicator
//!
//! Rendering is split from interaction the way ratatui's stateful widgets
//! are: [`WheelSlider`] draws one frame, [`WheelSliderState`] owns the scroll
//! offset, the drag gesture and the binding to the caller's value.
//!
//! Offsets are measured in ticks. Offset `k` puts tick `k` under the
//! indicator; the track is padded by half the viewport on both ends so the
//! first and last tick can both reach the center.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, StatefulWidget, Widget},
};
use tracing::debug;
use wheelslider_core::{
    config::AppConfig,
    decay::{DecayProfile, RenderStyle, TickContext},
    gesture::DragGesture,
    snap, Axis, ResyncPolicy, ScrollPosition, ScrollPositionBinding, SelectionFeedback, SliderModel,
};

use crate::scroll::{ScrollAnimator, ScrollConfig};
use crate::theme::{blend, Theme};

/// Minor tick length relative to a major tick (12 of 16 units)
const MINOR_TICK_LENGTH: f64 = 0.75;
/// Minor tick opacity on a horizontal track
const MINOR_OPACITY_HORIZONTAL: f64 = 0.75;
/// Minor tick opacity on a vertical track
const MINOR_OPACITY_VERTICAL: f64 = 0.5;

/// Construction-time settings of one wheel instance
#[derive(Debug, Clone)]
pub struct WheelSliderOptions {
    pub style: RenderStyle,
    pub axis: Axis,
    pub resync: ResyncPolicy,
    /// Draw the centered tick at double thickness (flat style only)
    pub flare: bool,
    pub decay: DecayProfile,
    /// Tick slots that fit along the track
    pub visible_ticks: f64,
    /// Layout units per cell along the track, for the decay radius
    pub cell_units: f64,
    /// Coasting time applied to release velocity
    pub inertia: std::time::Duration,
    pub scroll: ScrollConfig,
    pub show_value: bool,
}

impl Default for WheelSliderOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl WheelSliderOptions {
    /// Options for the axis and style configured in `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let axis = config.slider.axis;
        let (visible_ticks, cell_units) = match axis {
            Axis::Horizontal => (config.ui.visible_ticks_horizontal, config.ui.cell_width_units),
            Axis::Vertical => (config.ui.visible_ticks_vertical, config.ui.cell_height_units),
        };
        Self {
            style: config.slider.style,
            axis,
            resync: config.slider.resync,
            flare: config.slider.flare,
            decay: config.ui.decay,
            visible_ticks,
            cell_units,
            inertia: config.gesture.inertia(),
            scroll: config.ui.scroll.clone(),
            show_value: config.ui.show_value,
        }
    }
}

/// Geometry of the track inside a render area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLayout {
    pub axis: Axis,
    pub area: Rect,
    /// Cells along the track
    pub extent: u16,
    /// Cells across the track available to ticks
    pub track_cross: u16,
    /// Cells between neighbouring ticks
    pub spacing: u16,
    /// Cell (relative to the area) under the indicator
    pub center: u16,
    /// Whether a row is reserved for the value label
    pub label_row: bool,
}

impl TrackLayout {
    pub fn new(area: Rect, axis: Axis, visible_ticks: f64, show_value: bool) -> Self {
        let extent = axis.main(area.width, area.height);
        let cross = axis.cross(area.width, area.height);
        let spacing = if visible_ticks > 0.0 {
            (extent as f64 / visible_ticks).round().max(1.0) as u16
        } else {
            1
        };
        // A vertical track prints its label on the indicator row instead
        let label_row = show_value && axis == Axis::Horizontal && cross >= 3;
        Self {
            axis,
            area,
            extent,
            track_cross: if label_row { cross - 1 } else { cross },
            spacing,
            center: extent / 2,
            label_row,
        }
    }

    /// Empty space before tick 0 when the track rests at offset 0
    pub fn leading_padding(&self) -> u16 {
        self.center
    }

    /// Length of the whole scrollable content in cells
    pub fn content_extent(&self, step_count: usize) -> u64 {
        let trailing = self.extent - self.center;
        self.center as u64 + step_count as u64 * self.spacing as u64 + trailing as u64
    }

    /// Cell (relative to the area) of `tick` when the track sits at `offset`
    pub fn tick_position(&self, tick: usize, offset: f64) -> Option<u16> {
        let pos = (self.center as f64 + (tick as f64 - offset) * self.spacing as f64).round();
        if pos >= 0.0 && pos < self.extent as f64 {
            Some(pos as u16)
        } else {
            None
        }
    }

    /// Whether the whole slot of a tick drawn at `pos` lies inside the track
    pub fn slot_fully_visible(&self, pos: u16) -> bool {
        let half = self.spacing / 2;
        pos >= half && pos as u32 + (half as u32) < self.extent as u32
    }

    /// Range of ticks that can appear on screen at `offset`
    pub fn visible_range(&self, offset: f64, step_count: usize) -> std::ops::RangeInclusive<usize> {
        let spacing = self.spacing as f64;
        let before = self.center as f64 / spacing;
        let after = (self.extent - self.center) as f64 / spacing;
        let lo = (offset - before).floor() - 1.0;
        let hi = (offset + after).ceil() + 1.0;
        let lo = lo.clamp(0.0, step_count as f64) as usize;
        let hi = hi.clamp(0.0, step_count as f64) as usize;
        lo..=hi
    }

    /// Pointer position along the track in tick units, if inside the area
    pub fn pointer_ticks(&self, column: u16, row: u16) -> Option<f64> {
        let inside = column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom();
        if !inside {
            return None;
        }
        Some(self.pointer_ticks_unbounded(column, row))
    }

    /// Pointer position along the track in tick units, even outside the area
    pub fn pointer_ticks_unbounded(&self, column: u16, row: u16) -> f64 {
        let main = match self.axis {
            Axis::Horizontal => column as f64 - self.area.x as f64,
            Axis::Vertical => row as f64 - self.area.y as f64,
        };
        main / self.spacing as f64
    }
}

/// Interaction state of one wheel instance
///
/// Create a fresh state to reset the wheel: a new instance starts
/// unaligned and re-reads the bound value on its first render.
#[derive(Debug, Clone)]
pub struct WheelSliderState {
    binding: ScrollPositionBinding,
    options: WheelSliderOptions,
    animator: ScrollAnimator,
    drag: Option<DragGesture>,
    settle_pending: bool,
    /// The current press stopped a snap that had not settled yet
    interrupted: bool,
    mounted: bool,
    layout: Option<TrackLayout>,
}

impl WheelSliderState {
    pub fn new(model: SliderModel, options: WheelSliderOptions) -> Self {
        Self {
            binding: ScrollPositionBinding::new(model, options.resync),
            animator: ScrollAnimator::new(options.scroll.clone()),
            options,
            drag: None,
            settle_pending: false,
            interrupted: false,
            mounted: false,
            layout: None,
        }
    }

    pub fn model(&self) -> &SliderModel {
        self.binding.model()
    }

    pub fn options(&self) -> &WheelSliderOptions {
        &self.options
    }

    pub fn position(&self) -> ScrollPosition {
        self.binding.position()
    }

    /// Current (possibly mid-animation) track offset in ticks
    pub fn offset(&self) -> f64 {
        self.animator.offset()
    }

    /// Layout from the last render
    pub fn layout(&self) -> Option<&TrackLayout> {
        self.layout.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether frames should run at animation rate
    pub fn needs_update(&self) -> bool {
        self.drag.is_some() || self.settle_pending || self.animator.needs_update()
    }

    fn max_offset(&self) -> f64 {
        self.model().step_count() as f64
    }

    /// Tick under the indicator right now, moving or not
    pub fn displayed_index(&self) -> usize {
        snap::nearest_tick(self.animator.offset(), self.model().step_count())
    }

    /// Tick the visual decay is centered on
    pub fn center_index(&self, value: f64) -> usize {
        if self.drag.is_some() || self.animator.is_animating() {
            self.displayed_index()
        } else {
            self.binding.center_index(value)
        }
    }

    /// Align the track with `value` the first time the wheel is shown
    pub fn mount(&mut self, value: f64) {
        if self.mounted {
            return;
        }
        let index = self.binding.align_on_mount(value);
        self.animator.set_offset(snap::offset_for_tick(index));
        self.mounted = true;
    }

    /// Press on the track; returns whether the press landed on it
    pub fn begin_drag(&mut self, column: u16, row: u16) -> bool {
        self.begin_drag_at(column, row, Instant::now())
    }

    pub fn begin_drag_at(&mut self, column: u16, row: u16, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(pointer) = self.layout.and_then(|l| l.pointer_ticks(column, row)) else {
            return false;
        };
        self.interrupted = self.settle_pending || self.animator.needs_update();
        self.animator.cancel();
        self.settle_pending = false;
        self.drag = Some(DragGesture::begin(
            pointer,
            self.animator.offset(),
            self.max_offset(),
            now,
        ));
        true
    }

    /// Move the pressed pointer; the offset follows but nothing is committed
    pub fn drag_to(&mut self, column: u16, row: u16) {
        self.drag_to_at(column, row, Instant::now());
    }

    pub fn drag_to_at(&mut self, column: u16, row: u16, now: Instant) {
        let (Some(drag), Some(layout)) = (self.drag.as_mut(), self.layout) else {
            return;
        };
        let offset = drag.move_to(layout.pointer_ticks_unbounded(column, row), now);
        self.animator.set_offset(offset);
    }

    /// Release the pointer and snap to the nearest tick
    ///
    /// A press that never moved the track commits nothing, unless it stopped
    /// a snap on its way; that snap is finished on the nearest tick.
    pub fn end_drag(&mut self) {
        self.end_drag_at(Instant::now());
    }

    pub fn end_drag_at(&mut self, now: Instant) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if !drag.moved() {
            let offset = self.animator.offset();
            if self.interrupted || offset.fract() != 0.0 {
                let target = snap::nearest_tick(offset, self.model().step_count());
                debug!(offset, target, "press stopped a snap");
                self.animator
                    .scroll_to_at(snap::offset_for_tick(target), self.max_offset(), now);
                self.settle_pending = true;
            }
            return;
        }
        let release = drag.release(now);
        let target = snap::snap_target(
            release.offset,
            release.velocity,
            self.options.inertia,
            self.model().step_count(),
        );
        debug!(offset = release.offset, velocity = release.velocity, target, "drag released");
        self.animator
            .scroll_to_at(snap::offset_for_tick(target), self.max_offset(), now);
        self.settle_pending = true;
    }

    /// Abandon the drag and return to the tick it started from
    pub fn cancel_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let back = match self.binding.position() {
            ScrollPosition::Positioned(index) => index,
            ScrollPosition::Uninitialized => {
                snap::nearest_tick(drag.start_offset(), self.model().step_count())
            }
        };
        self.animator.scroll_to(snap::offset_for_tick(back), self.max_offset());
        // A stopped snap still owes its settle
        self.settle_pending = self.interrupted;
    }

    /// Move by `delta` ticks (keyboard or mouse wheel); settles when the motion ends
    pub fn step_by(&mut self, delta: i64) {
        if !self.mounted || self.drag.is_some() || delta == 0 {
            return;
        }
        let current = self.animator.requested_offset().round();
        let target = (current + delta as f64).clamp(0.0, self.max_offset());
        if target == current {
            return;
        }
        self.animator.scroll_by(target - current, self.max_offset());
        self.settle_pending = true;
    }

    /// Scroll to `index` and settle there
    pub fn jump_to(&mut self, index: usize) {
        if !self.mounted || self.drag.is_some() {
            return;
        }
        let index = self.model().clamp_index(index as i64);
        let target = snap::offset_for_tick(index);
        if !self.animator.needs_update() && self.animator.offset() == target {
            return;
        }
        self.animator.scroll_to(target, self.max_offset());
        self.settle_pending = true;
    }

    /// Advance one frame
    ///
    /// Applies the resync policy while idle, moves the animation, and once a
    /// gesture has come to rest commits the centered tick to `value`. Returns
    /// the new value when a settle wrote one.
    pub fn update<F>(&mut self, value: &mut f64, feedback: &mut F) -> Option<f64>
    where
        F: SelectionFeedback + ?Sized,
    {
        self.update_at(value, feedback, Instant::now())
    }

    pub fn update_at<F>(&mut self, value: &mut f64, feedback: &mut F, now: Instant) -> Option<f64>
    where
        F: SelectionFeedback + ?Sized,
    {
        if !self.mounted {
            return None;
        }

        let max_offset = self.max_offset();
        let idle = self.drag.is_none() && !self.settle_pending && !self.animator.needs_update();
        if idle {
            if let Some(index) = self.binding.resync(*value, self.displayed_index()) {
                self.animator.set_offset(snap::offset_for_tick(index));
            }
        }

        self.animator.update_at(max_offset, now);

        if self.settle_pending && self.drag.is_none() && !self.animator.needs_update() {
            self.settle_pending = false;
            let index = self.displayed_index();
            return self.binding.settle(Some(index), value, feedback);
        }
        None
    }
}

/// Wheel slider widget
pub struct WheelSlider<'a> {
    value: f64,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> WheelSlider<'a> {
    /// Draw the wheel for the caller's current `value`
    pub fn new(value: f64, theme: &'a Theme) -> Self {
        Self {
            value,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for WheelSlider<'_> {
    type State = WheelSliderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if area.width == 0 || area.height == 0 {
            state.layout = None;
            return;
        }

        buf.set_style(area, Style::default().bg(self.theme.background));

        let options = &state.options;
        let layout = TrackLayout::new(area, options.axis, options.visible_ticks, options.show_value);
        state.layout = Some(layout);
        state.mount(self.value);

        let model = *state.model();
        let offset = state.offset();
        let center = state.center_index(self.value);
        let viewport_size = layout.extent as f64 * state.options.cell_units;

        for tick in layout.visible_range(offset, model.step_count()) {
            let Some(pos) = layout.tick_position(tick, offset) else {
                continue;
            };
            let ctx = TickContext {
                tick,
                center,
                viewport_size,
                fully_visible: layout.slot_fully_visible(pos),
            };
            let appearance = state
                .options
                .style
                .appearance(ctx, &state.options.decay, state.options.flare);
            draw_tick(buf, &layout, self.theme, pos, model.is_major(tick), appearance);
        }

        draw_indicator(buf, &layout, self.theme);

        if state.options.show_value {
            draw_label(buf, &layout, self.theme, self.value, &model);
        }
    }
}

fn draw_tick(
    buf: &mut Buffer,
    layout: &TrackLayout,
    theme: &Theme,
    pos: u16,
    major: bool,
    appearance: wheelslider_core::TickAppearance,
) {
    let cross = layout.track_cross as f64;
    let base_length = if major {
        cross
    } else {
        (cross * MINOR_TICK_LENGTH).round().max(1.0)
    };
    let length = (base_length * appearance.scale).round() as u16;
    if length == 0 {
        return;
    }

    let base_opacity = match (major, layout.axis) {
        (true, _) => 1.0,
        (false, Axis::Horizontal) => MINOR_OPACITY_HORIZONTAL,
        (false, Axis::Vertical) => MINOR_OPACITY_VERTICAL,
    };
    let color = if major { theme.tick } else { theme.tick_minor };
    let color = blend(color, theme.background, base_opacity * appearance.opacity);
    let thick = appearance.cross_scale > 1.0;

    // Ticks shrink toward the middle of the track
    let start = (layout.track_cross - length) / 2;
    let area = layout.area;
    match layout.axis {
        Axis::Horizontal => {
            let symbol = if thick { "┃" } else { "│" };
            for row in start..start + length {
                if let Some(cell) = buf.cell_mut((area.x + pos, area.y + row)) {
                    cell.set_symbol(symbol).set_fg(color);
                }
            }
        }
        Axis::Vertical => {
            let symbol = if thick { "━" } else { "─" };
            for col in start..start + length {
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + pos)) {
                    cell.set_symbol(symbol).set_fg(color);
                }
            }
        }
    }
}

fn draw_indicator(buf: &mut Buffer, layout: &TrackLayout, theme: &Theme) {
    let area = layout.area;
    match layout.axis {
        Axis::Horizontal => {
            for row in 0..layout.track_cross {
                if let Some(cell) = buf.cell_mut((area.x + layout.center, area.y + row)) {
                    cell.set_symbol("┃").set_fg(theme.indicator);
                }
            }
        }
        Axis::Vertical => {
            for col in 0..layout.track_cross {
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + layout.center)) {
                    cell.set_symbol("━").set_fg(theme.indicator);
                }
            }
        }
    }
}

fn draw_label(buf: &mut Buffer, layout: &TrackLayout, theme: &Theme, value: f64, model: &SliderModel) {
    let text = format_value(value, model);
    let len = text.chars().count() as u16;
    let area = layout.area;
    let style = Style::default().fg(theme.label).bg(theme.background);

    match layout.axis {
        Axis::Horizontal => {
            if !layout.label_row || len > area.width {
                return;
            }
            let x = (area.x + layout.center)
                .saturating_sub(len / 2)
                .clamp(area.x, area.right() - len);
            buf.set_string(x, area.bottom() - 1, &text, style);
        }
        Axis::Vertical => {
            if len + 2 > area.width {
                return;
            }
            buf.set_string(area.right() - len, area.y + layout.center, &text, style);
        }
    }
}

/// Decimal places needed to show every tick value of `model` exactly
pub fn value_precision(model: &SliderModel) -> usize {
    fn decimals(x: f64) -> usize {
        (0..4)
            .find(|&p| {
                let scaled = x * 10f64.powi(p as i32);
                (scaled - scaled.round()).abs() < 1e-6
            })
            .unwrap_or(4)
    }
    decimals(model.step()).max(decimals(model.range().lower))
}

/// Format a value with the precision of the model's lattice
pub fn format_value(value: f64, model: &SliderModel) -> String {
    format!("{:.*}", value_precision(model), value)
}
