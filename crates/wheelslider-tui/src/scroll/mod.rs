//! Snap animation for the wheel track
//!
//! The track offset is measured in ticks (offset `k` centers tick `k`), so
//! the animation is unaffected by how many cells a tick occupies.
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - settings and derived durations (settings live in wheelslider-core)
//! - `animation` - the animator combining the above
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use wheelslider_tui::scroll::{ScrollAnimator, ScrollConfig};
//!
//! let mut animator = ScrollAnimator::new(ScrollConfig::default());
//! animator.scroll_to(12.0, max_offset);
//!
//! // Each frame
//! let offset = animator.update_at(max_offset, Instant::now());
//! if !animator.is_animating() {
//!     // the track has landed
//! }
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
