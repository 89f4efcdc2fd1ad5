//! Deep blue to cyan palette, breathing and vignette

use super::warp::WarpField;
use crate::math::{smoothstep, Rgb, Vec2};

pub const DEEP_BLUE: Rgb = Rgb::new(0.02, 0.05, 0.2);
pub const OCEAN_BLUE: Rgb = Rgb::new(0.05, 0.2, 0.5);
pub const CYAN_GLOW: Rgb = Rgb::new(0.1, 0.7, 0.9);

/// Scale on `dot(r, q)` when blending toward [`CYAN_GLOW`]
pub const GLOW_WEIGHT: f32 = 0.8;

const BREATH_BASE: f32 = 0.85;
const BREATH_DEPTH: f32 = 0.15;
const BREATH_RATE: f32 = 0.2;

const VIGNETTE_INNER: f32 = 0.2;
const VIGNETTE_OUTER: f32 = 0.8;

/// Map a warp field to color
///
/// The scalar field blends deep blue toward ocean blue; the warp alignment
/// then pulls toward the cyan glow. Neither weight is clamped.
pub fn colorize(field: &WarpField) -> Rgb {
    let base = Rgb::mix(DEEP_BLUE, OCEAN_BLUE, field.value);
    Rgb::mix(base, CYAN_GLOW, field.alignment() * GLOW_WEIGHT)
}

/// Slow brightness modulation in [0.7, 1.0]
#[inline]
pub fn breathing(time: f32) -> f32 {
    BREATH_BASE + BREATH_DEPTH * (time * BREATH_RATE).sin()
}

/// Radial falloff from the viewport center in texture space
///
/// 1 within radius 0.2 of the center, 0 beyond 0.8.
#[inline]
pub fn vignette(uv: Vec2) -> f32 {
    let d = (uv - Vec2::splat(0.5)).length();
    1.0 - smoothstep(VIGNETTE_INNER, VIGNETTE_OUTER, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_zero_field_is_deep_blue() {
        let field = WarpField {
            q: Vec2::ZERO,
            r: Vec2::ZERO,
            value: 0.0,
        };
        assert_eq!(colorize(&field), DEEP_BLUE);
    }

    #[test]
    fn test_colorize_alignment_pulls_toward_glow() {
        let dim = WarpField {
            q: Vec2::new(0.1, 0.1),
            r: Vec2::new(0.1, 0.1),
            value: 0.5,
        };
        let bright = WarpField {
            q: Vec2::new(0.8, 0.8),
            r: Vec2::new(0.8, 0.8),
            value: 0.5,
        };
        assert!(colorize(&bright).g > colorize(&dim).g);
    }

    #[test]
    fn test_breathing_range() {
        assert!((breathing(0.0) - 0.85).abs() < 1e-6);
        for i in 0..200 {
            let b = breathing(i as f32 * 0.37);
            assert!((0.7 - 1e-5..=1.0 + 1e-5).contains(&b));
        }
        // Peak at sin = 1, i.e. time = (pi / 2) / 0.2
        let peak = breathing(std::f32::consts::FRAC_PI_2 / 0.2);
        assert!((peak - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_vignette_profile() {
        assert!((vignette(Vec2::splat(0.5)) - 1.0).abs() < 1e-6);
        assert!((vignette(Vec2::new(0.65, 0.5)) - 1.0).abs() < 1e-6);
        assert!(vignette(Vec2::new(1.4, 0.5)).abs() < 1e-6);
        // Texture corners sit at radius ~0.707, almost fully dark
        assert!(vignette(Vec2::new(0.0, 0.0)) < 0.1);
        let mid = vignette(Vec2::new(1.0, 0.5));
        assert!((mid - 0.5).abs() < 1e-4);
    }
}
