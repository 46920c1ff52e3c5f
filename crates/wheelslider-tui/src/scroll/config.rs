//! Snap animation settings
//!
//! The settings live in `wheelslider-core` so they can be read from the config
//! file; this module adds the derived durations the animator needs.

use std::time::Duration;

pub use wheelslider_core::{EasingType, ScrollConfig};

/// Derived values for [`ScrollConfig`]
pub trait ScrollConfigExt {
    /// Length of one snap animation
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Whether snapping animates at all
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis(1000 / fps as u64),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
