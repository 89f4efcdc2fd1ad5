//! Linear RGB color

use super::interp::mix;

/// Linear RGB triple; components may leave [0, 1] mid-computation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Blend from `a` to `b` by `t` (unclamped, like GLSL `mix`)
    #[inline]
    pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
        Rgb::new(mix(a.r, b.r, t), mix(a.g, b.g, t), mix(a.b, b.b, t))
    }

    /// Clamp every channel to [0, 1]
    #[inline]
    pub fn saturate(self) -> Rgb {
        Rgb::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Relative luminance (Rec. 709 weights)
    #[inline]
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Quantize to opaque 8-bit RGBA
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.saturate();
        [
            (c.r * 255.0 + 0.5) as u8,
            (c.g * 255.0 + 0.5) as u8,
            (c.b * 255.0 + 0.5) as u8,
            255,
        ]
    }
}

impl std::ops::Mul<f32> for Rgb {
    type Output = Rgb;
    #[inline]
    fn mul(self, s: f32) -> Rgb {
        Rgb::new(self.r * s, self.g * s, self.b * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb::new(0.0, 0.2, 0.4);
        let b = Rgb::new(1.0, 0.6, 0.0);
        assert_eq!(Rgb::mix(a, b, 0.0), a);
        let end = Rgb::mix(a, b, 1.0);
        assert!((end.r - 1.0).abs() < 0.001);
        assert!((end.g - 0.6).abs() < 0.001);
        assert!(end.b.abs() < 0.001);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(Rgb::new(1.5, -0.2, 0.5).to_rgba8(), [255, 0, 128, 255]);
        assert_eq!(Rgb::BLACK.to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_scale() {
        let c = Rgb::new(0.2, 0.4, 0.8) * 0.5;
        assert!((c.r - 0.1).abs() < 0.001);
        assert!((c.b - 0.4).abs() < 0.001);
    }
}
