//! Easing curves for the snap animation
//!
//! Each curve maps animation progress in [0, 1] to travelled distance in
//! [0, 1]. All curves except `None` decelerate into the target tick.

pub use wheelslider_core::EasingType;

/// Curve evaluation for [`EasingType`]
pub trait EasingTypeExt {
    /// Fraction of the distance covered at progress `t` (clamped to [0, 1])
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quintic => ease_out_pow(t, 5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// `1 - (1 - t)^n`
#[inline]
fn ease_out_pow(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_land_on_target() {
        for easing in ALL {
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?}", easing);
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?}", easing);
        }
    }

    #[test]
    fn test_curves_never_overshoot() {
        for easing in ALL {
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!((0.0..=1.0).contains(&v), "{:?} overshoots at step {}", easing, i);
            }
        }
    }

    #[test]
    fn test_decelerating_curves_lead_linear() {
        for easing in [EasingType::Cubic, EasingType::Quintic, EasingType::EaseOut] {
            assert!(easing.apply(0.5) > EasingType::Linear.apply(0.5), "{:?}", easing);
        }
    }

    #[test]
    fn test_none_jumps_at_end() {
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }
}
