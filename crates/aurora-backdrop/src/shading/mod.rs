//! Procedural aurora shading
//!
//! CPU reference of the per-pixel color function. The WGSL shader used by
//! the GPU renderer evaluates the same steps with the same constants:
//!
//! 1. Center the pixel and normalize by the shorter viewport side, then
//!    scale by [`COORDINATE_SCALE`]
//! 2. Two-stage domain warp over 5-octave fractal value noise
//! 3. Deep blue to cyan palette, glow where the warp fields align
//! 4. Breathing brightness and radial vignette

mod noise;
mod palette;
mod warp;

pub use noise::{fbm, hash, value_noise, OCTAVES, OCTAVE_MATRIX};
pub use palette::{breathing, colorize, vignette, CYAN_GLOW, DEEP_BLUE, GLOW_WEIGHT, OCEAN_BLUE};
pub use warp::{warp, WarpField, WARP_GAIN};

use serde::{Deserialize, Serialize};

use crate::math::{Rgb, Vec2};

/// Scale from normalized viewport coordinates into noise space
pub const COORDINATE_SCALE: f32 = 1.5;

/// Inputs consumed by the shading function each frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadingParameters {
    /// Virtual time in seconds
    pub time: f32,
    /// Viewport resolution (width, height)
    pub resolution: Vec2,
}

impl ShadingParameters {
    pub fn new(time: f32, resolution: Vec2) -> Self {
        Self { time, resolution }
    }
}

/// Map texture coordinates (origin bottom-left, [0, 1]) into noise space
///
/// The result is centered on the viewport, aspect-corrected by the shorter
/// side and scaled by [`COORDINATE_SCALE`].
pub fn noise_coord(uv: Vec2, resolution: Vec2) -> Vec2 {
    let frag = uv * resolution;
    let extent = resolution.min_element().max(1.0);
    (frag - resolution * 0.5) / extent * COORDINATE_SCALE
}

/// Color of the pixel at `uv` for the given parameters
pub fn shade(uv: Vec2, params: &ShadingParameters) -> Rgb {
    let p = noise_coord(uv, params.resolution);
    let field = warp(p, params.time);
    colorize(&field) * breathing(params.time) * vignette(uv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(time: f32) -> ShadingParameters {
        ShadingParameters::new(time, Vec2::new(1600.0, 900.0))
    }

    #[test]
    fn test_noise_coord_centered_and_aspect_corrected() {
        let res = Vec2::new(1600.0, 900.0);
        let center = noise_coord(Vec2::splat(0.5), res);
        assert!(center.length() < 1e-5);

        // Top edge is half the short side away from center
        let top = noise_coord(Vec2::new(0.5, 1.0), res);
        assert!((top.y - 0.5 * COORDINATE_SCALE).abs() < 1e-5);

        // Right edge reaches further because the viewport is wider
        let right = noise_coord(Vec2::new(1.0, 0.5), res);
        assert!((right.x - (800.0 / 900.0) * COORDINATE_SCALE).abs() < 1e-5);
    }

    #[test]
    fn test_shade_is_deterministic() {
        let uv = Vec2::new(0.3, 0.6);
        assert_eq!(shade(uv, &params(4.0)), shade(uv, &params(4.0)));
    }

    #[test]
    fn test_shade_changes_over_time() {
        let uv = Vec2::new(0.45, 0.55);
        assert_ne!(shade(uv, &params(0.0)), shade(uv, &params(25.0)));
    }

    #[test]
    fn test_shade_is_dark_outside_vignette() {
        let c = shade(Vec2::new(1.4, 0.5), &params(1.0));
        assert!(c.r.abs() < 1e-6 && c.g.abs() < 1e-6 && c.b.abs() < 1e-6);
    }

    #[test]
    fn test_center_brighter_than_corners() {
        let p = params(3.0);
        let mut center = 0.0;
        let mut corner = 0.0;
        for i in 0..5 {
            for j in 0..5 {
                let d = Vec2::new(i as f32 * 0.01, j as f32 * 0.01);
                center += shade(Vec2::new(0.48, 0.48) + d, &p).luminance();
                corner += shade(Vec2::new(0.0, 0.0) + d, &p).luminance();
            }
        }
        assert!(center > corner);
    }

    #[test]
    fn test_blue_dominates_palette() {
        let c = shade(Vec2::splat(0.5), &params(0.0));
        assert!(c.b > c.r);
    }

    #[test]
    fn test_degenerate_resolution_stays_finite() {
        let p = ShadingParameters::new(1.0, Vec2::ZERO);
        let c = shade(Vec2::splat(0.5), &p);
        assert!(c.r.is_finite() && c.g.is_finite() && c.b.is_finite());
    }
}
