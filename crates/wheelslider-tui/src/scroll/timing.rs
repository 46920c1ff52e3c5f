//! Time helpers for the snap animation

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] at `now`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether an animation started at `start` has run its course at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two offsets
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(2.0, 12.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((lerp(2.0, 12.0, 0.5) - 7.0).abs() < 1e-12);
        assert!((lerp(12.0, 2.0, 1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_progress_over_time() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, duration, start), 0.0);
        assert!((progress(start, duration, start + Duration::from_millis(50)) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, duration, start + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
        assert!(is_complete(start, Duration::ZERO, start));
    }

    #[test]
    fn test_clock_before_start_is_not_complete() {
        let start = Instant::now() + Duration::from_millis(10);
        let earlier = start - Duration::from_millis(5);
        assert_eq!(progress(start, Duration::from_millis(100), earlier), 0.0);
        assert!(!is_complete(start, Duration::from_millis(100), earlier));
    }
}
