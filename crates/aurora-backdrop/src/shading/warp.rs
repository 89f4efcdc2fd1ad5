//! Two-stage domain warping

use super::noise::fbm;
use crate::math::Vec2;

/// Gain applied to each warp vector before it offsets the next lookup
pub const WARP_GAIN: f32 = 4.0;

const Q_OFFSET: [Vec2; 2] = [Vec2::new(0.0, 0.0), Vec2::new(5.2, 1.3)];
const Q_DRIFT: [f32; 2] = [0.05, 0.02];
const R_OFFSET: [Vec2; 2] = [Vec2::new(1.7, 9.2), Vec2::new(8.3, 2.8)];
const R_DRIFT: [f32; 2] = [0.15, 0.126];

/// Result of warping one coordinate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpField {
    /// First warp vector
    pub q: Vec2,
    /// Second warp vector, sampled at `p + 4q`
    pub r: Vec2,
    /// Final scalar field, sampled at `p + 4r`
    pub value: f32,
}

impl WarpField {
    /// Alignment of the two warp fields, `dot(r, q)`
    #[inline]
    pub fn alignment(&self) -> f32 {
        self.r.dot(self.q)
    }
}

/// Evaluate the nested warp at `p` for virtual time `time`
pub fn warp(p: Vec2, time: f32) -> WarpField {
    let q = Vec2::new(
        fbm(p + Q_OFFSET[0] + Q_DRIFT[0] * time),
        fbm(p + Q_OFFSET[1] + Q_DRIFT[1] * time),
    );

    let pq = p + q * WARP_GAIN;
    let r = Vec2::new(
        fbm(pq + R_OFFSET[0] + R_DRIFT[0] * time),
        fbm(pq + R_OFFSET[1] + R_DRIFT[1] * time),
    );

    WarpField {
        q,
        r,
        value: fbm(p + r * WARP_GAIN),
    }
}
