//! Scalar interpolation helpers with GLSL semantics

/// Fractional part, `x - floor(x)`; always in [0, 1) for finite input
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Linear blend from `a` to `b`; `t` is not clamped
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite step between `edge0` and `edge1`
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic fade `t * t * (3 - 2t)` without clamping
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fract() {
        assert!((fract(1.25) - 0.25).abs() < 0.001);
        assert!((fract(-0.25) - 0.75).abs() < 0.001);
        assert!(fract(3.0).abs() < 0.001);
    }

    #[test]
    fn test_mix_extrapolates() {
        assert!((mix(0.0, 10.0, 0.5) - 5.0).abs() < 0.001);
        assert!((mix(0.0, 10.0, 1.5) - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_smoothstep() {
        // Start at 0
        assert!(smoothstep(0.2, 0.8, 0.0).abs() < 0.001);
        // End at 1
        assert!((smoothstep(0.2, 0.8, 1.0) - 1.0).abs() < 0.001);
        // Midpoint at 0.5
        assert!((smoothstep(0.2, 0.8, 0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_fade_matches_smoothstep_on_unit_interval() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((fade(t) - smoothstep(0.0, 1.0, t)).abs() < 0.0001);
        }
    }
}
