//! Per-tick visual transforms
//!
//! Both styles are pure functions of the tick's position relative to the
//! centered tick; nothing here keeps per-tick state. Renderers call
//! [`RenderStyle::appearance`] once per tick per frame.

use serde::{Deserialize, Serialize};

/// Scale and opacity applied to a single tick, each in `[0, 1]` except
/// `cross_scale` which may exceed 1 for the flared center tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickAppearance {
    /// Scale along the tick's own length
    pub scale: f64,
    /// Scale across the tick (its thickness)
    pub cross_scale: f64,
    pub opacity: f64,
}

impl TickAppearance {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        cross_scale: 1.0,
        opacity: 1.0,
    };

    pub const UNSETTLED: Self = Self {
        scale: 0.5,
        cross_scale: 1.0,
        opacity: 0.5,
    };
}

/// Tick decoration strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Fisheye falloff: ticks shrink and fade with distance from the center
    #[default]
    Curved,
    /// Binary transition: fully visible ticks are settled, clipped ticks are not
    Flat,
}

/// Divisors turning the viewport size into falloff radii
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayProfile {
    /// `viewport / scale_divisor` is the distance where scale reaches 0
    #[serde(default = "default_scale_divisor")]
    pub scale_divisor: f64,
    /// `viewport / opacity_divisor` is the distance where opacity reaches 0
    #[serde(default = "default_opacity_divisor")]
    pub opacity_divisor: f64,
}

impl Default for DecayProfile {
    fn default() -> Self {
        Self {
            scale_divisor: default_scale_divisor(),
            opacity_divisor: default_opacity_divisor(),
        }
    }
}

fn default_scale_divisor() -> f64 {
    24.0
}

fn default_opacity_divisor() -> f64 {
    23.0
}

impl DecayProfile {
    /// Distance (in ticks) at which the scale reaches its floor
    pub fn falloff_radius(&self, viewport_size: f64) -> f64 {
        viewport_size / self.scale_divisor
    }

    /// Fisheye appearance of `tick` when `center` is aligned with the indicator
    pub fn curved(&self, tick: usize, center: usize, viewport_size: f64) -> TickAppearance {
        let distance = tick.abs_diff(center) as f64;
        TickAppearance {
            scale: 1.0 - falloff(distance, self.falloff_radius(viewport_size)),
            cross_scale: 1.0,
            opacity: 1.0 - falloff(distance, viewport_size / self.opacity_divisor),
        }
    }
}

/// `clamp(distance / radius, 0, 1)`, treating a non-positive radius as a step
#[inline]
fn falloff(distance: f64, radius: f64) -> f64 {
    if distance == 0.0 {
        return 0.0;
    }
    if radius.is_nan() || radius <= 0.0 {
        return 1.0;
    }
    (distance / radius).clamp(0.0, 1.0)
}

/// Appearance of a tick under the flat style
///
/// `fully_visible` plays the role of the settled transition phase. With
/// `flare` the centered tick is drawn at double thickness.
pub fn flat(fully_visible: bool, centered: bool, flare: bool) -> TickAppearance {
    if !fully_visible {
        return TickAppearance::UNSETTLED;
    }
    TickAppearance {
        cross_scale: if flare && centered { 2.0 } else { 1.0 },
        ..TickAppearance::IDENTITY
    }
}

/// Everything a style needs to know about one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: usize,
    pub center: usize,
    /// Viewport extent along the track axis in layout units
    pub viewport_size: f64,
    /// Whether the whole tick slot lies inside the viewport
    pub fully_visible: bool,
}

impl RenderStyle {
    pub fn appearance(&self, ctx: TickContext, profile: &DecayProfile, flare: bool) -> TickAppearance {
        match self {
            RenderStyle::Curved => profile.curved(ctx.tick, ctx.center, ctx.viewport_size),
            RenderStyle::Flat => flat(ctx.fully_visible, ctx.tick == ctx.center, flare),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_identity() {
        let profile = DecayProfile::default();
        let a = profile.curved(10, 10, 390.0);
        assert_eq!(a.scale, 1.0);
        assert_eq!(a.opacity, 1.0);
    }

    #[test]
    fn test_linear_falloff() {
        let profile = DecayProfile::default();
        assert_eq!(profile.falloff_radius(240.0), 10.0);
        let a = profile.curved(15, 10, 240.0);
        assert!((a.scale - 0.5).abs() < 1e-12);
        // opacity radius is 240 / 23, slightly larger
        assert!(a.opacity > 0.5);
        assert!(a.opacity < 0.55);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let profile = DecayProfile::default();
        for viewport in [0.0, 1.0, 80.0, 390.0, 2000.0] {
            let mut prev = profile.curved(20, 20, viewport);
            for tick in 21..80 {
                let a = profile.curved(tick, 20, viewport);
                assert!(a.scale <= prev.scale && a.opacity <= prev.opacity);
                assert!((0.0..=1.0).contains(&a.scale));
                assert!((0.0..=1.0).contains(&a.opacity));
                assert!(a.scale < 1.0);
                prev = a;
            }
        }
    }

    #[test]
    fn test_symmetric_around_center() {
        let profile = DecayProfile::default();
        assert_eq!(profile.curved(7, 10, 300.0), profile.curved(13, 10, 300.0));
    }

    #[test]
    fn test_beyond_radius_floors_at_zero() {
        let profile = DecayProfile::default();
        let a = profile.curved(100, 0, 240.0);
        assert_eq!(a.scale, 0.0);
        assert_eq!(a.opacity, 0.0);
    }

    #[test]
    fn test_degenerate_viewport() {
        let profile = DecayProfile::default();
        assert_eq!(profile.curved(3, 3, 0.0).scale, 1.0);
        assert_eq!(profile.curved(4, 3, 0.0).scale, 0.0);
        assert_eq!(profile.curved(4, 3, -10.0).opacity, 0.0);
    }

    #[test]
    fn test_flat_phases() {
        assert_eq!(flat(false, true, true), TickAppearance::UNSETTLED);
        assert_eq!(flat(true, false, true), TickAppearance::IDENTITY);
        assert_eq!(flat(true, true, false), TickAppearance::IDENTITY);
        assert_eq!(flat(true, true, true).cross_scale, 2.0);
    }

    #[test]
    fn test_style_dispatch() {
        let profile = DecayProfile::default();
        let ctx = TickContext {
            tick: 30,
            center: 0,
            viewport_size: 240.0,
            fully_visible: true,
        };
        assert_eq!(RenderStyle::Curved.appearance(ctx, &profile, false).scale, 0.0);
        assert_eq!(
            RenderStyle::Flat.appearance(ctx, &profile, false),
            TickAppearance::IDENTITY
        );
    }
}
