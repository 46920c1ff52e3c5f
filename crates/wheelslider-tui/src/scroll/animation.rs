//! Snap animation controller
//!
//! Moves the track offset (in ticks) toward a target with the configured
//! easing. The wheel state asks it where the track is each frame and fires
//! the settle once it reports that no animation is left.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Offset animator for the tick track
///
/// Call `scroll_to()` or `scroll_by()` to start moving, then `update_at()` every
/// frame to advance the interpolated offset.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Interpolated offset, always up to date after `update_at()`
    offset: f64,
    /// Tick deltas requested since the last frame
    pending_delta: f64,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            offset: 0.0,
            pending_delta: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frames should run at animation rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Offset the track will come to rest at
    pub fn target_offset(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.offset)
    }

    /// Target including deltas no frame has picked up yet
    pub fn requested_offset(&self) -> f64 {
        self.target_offset() + self.pending_delta
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Place the track immediately, dropping any animation
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.offset = offset;
        self.pending_delta = 0.0;
    }

    /// Animate toward `target` (clamped to `0..=max_offset`)
    pub fn scroll_to(&mut self, target: f64, max_offset: f64) {
        self.scroll_to_at(target, max_offset, Instant::now());
    }

    pub fn scroll_to_at(&mut self, target: f64, max_offset: f64, now: Instant) {
        let target = target.clamp(0.0, max_offset.max(0.0));
        self.pending_delta = 0.0;

        if !self.config.is_smooth() || self.offset == target {
            self.offset = target;
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.offset,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Move by `delta` ticks relative to the current target
    ///
    /// Requests arriving within one frame are batched so that repeated key
    /// presses chain into a single animation.
    pub fn scroll_by(&mut self, delta: f64, max_offset: f64) {
        if !self.config.is_smooth() {
            self.offset = (self.target_offset() + delta).clamp(0.0, max_offset.max(0.0));
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance to `now` and return the offset
    pub fn update_at(&mut self, max_offset: f64, now: Instant) -> f64 {
        let max_offset = max_offset.max(0.0);

        if self.pending_delta != 0.0 {
            let target = (self.target_offset() + self.pending_delta).clamp(0.0, max_offset);
            self.pending_delta = 0.0;
            if target != self.offset {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.offset,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            } else {
                self.animation = None;
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.offset = anim.to.min(max_offset);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.offset = lerp(anim.from, anim.to, t).clamp(0.0, max_offset);
            }
        }

        self.offset
    }

    /// Stop where the track currently is
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.scroll_to(12.0, 60.0);
        assert_eq!(animator.offset(), 12.0);
        assert!(!animator.is_animating());

        animator.scroll_by(-3.0, 60.0);
        assert_eq!(animator.offset(), 9.0);
    }

    #[test]
    fn test_animation_reaches_target() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.scroll_to_at(10.0, 60.0, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target_offset(), 10.0);

        let mid = animator.update_at(60.0, t0 + Duration::from_millis(50));
        assert!((mid - 5.0).abs() < 1e-9);
        assert!(animator.is_animating());

        assert_eq!(animator.update_at(60.0, t0 + Duration::from_millis(100)), 10.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_to_current_offset_does_not_animate() {
        let mut animator = smooth(100);
        animator.set_offset(4.0);
        animator.scroll_to(4.0, 60.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batches_within_frame() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.set_offset(10.0);
        animator.scroll_by(1.0, 60.0);
        animator.scroll_by(1.0, 60.0);
        animator.scroll_by(1.0, 60.0);
        assert!(animator.needs_update());

        assert_eq!(animator.requested_offset(), 13.0);

        animator.update_at(60.0, t0);
        assert_eq!(animator.target_offset(), 13.0);
    }

    #[test]
    fn test_targets_are_clamped() {
        let mut animator = smooth(100);
        animator.set_offset(5.0);
        animator.scroll_to(300.0, 60.0);
        assert_eq!(animator.target_offset(), 60.0);
        animator.scroll_to(-4.0, 60.0);
        assert_eq!(animator.target_offset(), 0.0);
    }

    #[test]
    fn test_cancel_keeps_current_offset() {
        let t0 = Instant::now();
        let mut animator = smooth(100);
        animator.scroll_to_at(10.0, 60.0, t0);
        animator.update_at(60.0, t0 + Duration::from_millis(30));
        let here = animator.offset();
        animator.cancel();
        assert!(!animator.needs_update());
        assert_eq!(animator.target_offset(), here);
    }
}
