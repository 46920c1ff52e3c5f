//! Drag tracking along the track axis
//!
//! Pointer positions are given in tick units (cells divided by tick spacing),
//! so the gesture is independent of how wide a tick is on screen.

use std::time::{Duration, Instant};

/// Weight of the newest sample in the smoothed velocity
const VELOCITY_SMOOTHING: f64 = 0.6;

/// A pause longer than this before release discards the velocity
const RELEASE_STALE_AFTER: Duration = Duration::from_millis(100);

/// Result of letting go of the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Offset under the pointer at release
    pub offset: f64,
    /// Offset velocity in ticks per second (positive toward higher ticks)
    pub velocity: f64,
}

/// In-flight drag of the tick track
#[derive(Debug, Clone)]
pub struct DragGesture {
    start_offset: f64,
    anchor: f64,
    offset: f64,
    max_offset: f64,
    last_at: Instant,
    velocity: f64,
    moved: bool,
}

impl DragGesture {
    /// Start dragging with the pointer at `pointer` while the track sits at `offset`
    pub fn begin(pointer: f64, offset: f64, max_offset: f64, now: Instant) -> Self {
        Self {
            start_offset: offset,
            anchor: pointer,
            offset,
            max_offset,
            last_at: now,
            velocity: 0.0,
            moved: false,
        }
    }

    /// Offset the track had when the press began
    #[inline]
    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    /// Live offset of the track
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether the pointer moved the track at all
    #[inline]
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Follow the pointer; content moves with it, so the offset moves against it
    pub fn move_to(&mut self, pointer: f64, now: Instant) -> f64 {
        let offset = (self.start_offset - (pointer - self.anchor)).clamp(0.0, self.max_offset);
        let dt = now.saturating_duration_since(self.last_at).as_secs_f64();
        if dt > 0.0 {
            let sample = (offset - self.offset) / dt;
            self.velocity = VELOCITY_SMOOTHING * sample + (1.0 - VELOCITY_SMOOTHING) * self.velocity;
            self.last_at = now;
        }
        if offset != self.offset {
            self.moved = true;
        }
        self.offset = offset;
        offset
    }

    /// Let go of the track
    pub fn release(self, now: Instant) -> Release {
        let stale = now.saturating_duration_since(self.last_at) > RELEASE_STALE_AFTER;
        Release {
            offset: self.offset,
            velocity: if stale { 0.0 } else { self.velocity },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_against_pointer() {
        let t0 = Instant::now();
        let mut drag = DragGesture::begin(10.0, 5.0, 60.0, t0);
        assert_eq!(drag.move_to(8.0, t0 + Duration::from_millis(10)), 7.0);
        assert_eq!(drag.move_to(12.0, t0 + Duration::from_millis(20)), 3.0);
        assert!(drag.moved());
    }

    #[test]
    fn test_drag_is_clamped_to_track() {
        let t0 = Instant::now();
        let mut drag = DragGesture::begin(10.0, 5.0, 60.0, t0);
        assert_eq!(drag.move_to(30.0, t0 + Duration::from_millis(10)), 0.0);
        assert_eq!(drag.move_to(-80.0, t0 + Duration::from_millis(20)), 60.0);
    }

    #[test]
    fn test_velocity_sign_follows_offset() {
        let t0 = Instant::now();
        let mut drag = DragGesture::begin(10.0, 5.0, 60.0, t0);
        drag.move_to(9.0, t0 + Duration::from_millis(50));
        drag.move_to(8.0, t0 + Duration::from_millis(100));
        assert!(drag.velocity() > 0.0);

        let release = drag.release(t0 + Duration::from_millis(110));
        assert_eq!(release.offset, 7.0);
        assert!(release.velocity > 0.0);
    }

    #[test]
    fn test_stale_release_has_no_velocity() {
        let t0 = Instant::now();
        let mut drag = DragGesture::begin(10.0, 5.0, 60.0, t0);
        drag.move_to(8.0, t0 + Duration::from_millis(20));
        let release = drag.release(t0 + Duration::from_millis(500));
        assert_eq!(release.velocity, 0.0);
        assert_eq!(release.offset, 7.0);
    }

    #[test]
    fn test_click_without_motion() {
        let t0 = Instant::now();
        let drag = DragGesture::begin(10.0, 5.0, 60.0, t0);
        assert!(!drag.moved());
        assert_eq!(drag.release(t0).offset, 5.0);
    }
}
