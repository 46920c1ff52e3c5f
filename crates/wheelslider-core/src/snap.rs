//! Snap-to-tick resolution for released gestures
//!
//! Offsets are measured in ticks: offset `k` puts tick `k` under the
//! indicator. A release is projected forward by its velocity for the inertia
//! window, then rounded to the nearest tick inside the track.

use std::time::Duration;

/// Offset reached by coasting for `inertia` at `velocity` ticks per second
#[inline]
pub fn project(offset: f64, velocity: f64, inertia: Duration) -> f64 {
    offset + velocity * inertia.as_secs_f64()
}

/// Nearest tick to a fractional offset, clamped to `0..=step_count`
#[inline]
pub fn nearest_tick(offset: f64, step_count: usize) -> usize {
    if offset.is_nan() {
        return 0;
    }
    offset.round().clamp(0.0, step_count as f64) as usize
}

/// Tick a gesture released at `offset` with `velocity` will settle on
pub fn snap_target(offset: f64, velocity: f64, inertia: Duration, step_count: usize) -> usize {
    nearest_tick(project(offset, velocity, inertia), step_count)
}

/// Offset for centering `index`
#[inline]
pub fn offset_for_tick(index: usize) -> f64 {
    index as f64
}
