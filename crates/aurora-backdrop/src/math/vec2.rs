//! 2D vector type for shading coordinates

use serde::{Deserialize, Serialize};

use super::interp::fract;

/// 2D vector for coordinates, offsets and resolutions
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length of the vector
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Component-wise floor
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Component-wise fractional part
    #[inline]
    pub fn fract(self) -> Self {
        Self::new(fract(self.x), fract(self.y))
    }

    /// Smaller of the two components
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y)
    }
}

/// Column-major 2x2 matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    pub x_axis: Vec2,
    pub y_axis: Vec2,
}

impl Mat2 {
    /// Build from four scalars in column-major order
    #[inline]
    pub const fn from_cols(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            x_axis: Vec2::new(m00, m01),
            y_axis: Vec2::new(m10, m11),
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

/// Adds the scalar to both components
impl std::ops::Add<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, s: f32) -> Vec2 {
        Vec2::new(self.x + s, self.y + s)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Sub<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, s: f32) -> Vec2 {
        Vec2::new(self.x - s, self.y - s)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

/// Component-wise product
impl std::ops::Mul for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }
}

/// Row vector times matrix, as `v * m` in GLSL/WGSL
impl std::ops::Mul<Mat2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, m: Mat2) -> Vec2 {
        Vec2::new(self.dot(m.x_axis), self.dot(m.y_axis))
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, s: f32) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
