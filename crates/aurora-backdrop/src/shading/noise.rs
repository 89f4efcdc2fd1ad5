//! Hashed value noise and fractal sum

use crate::math::{fade, fract, mix, Mat2, Vec2};

const HASH_SCALE: Vec2 = Vec2::new(123.34, 456.21);
const HASH_OFFSET: f32 = 45.32;

/// Number of octaves summed by [`fbm`]
pub const OCTAVES: usize = 5;

/// Rotation-scale applied to the coordinate between octaves.
/// Breaks up the axis-aligned lattice that plain octave stacking shows.
pub const OCTAVE_MATRIX: Mat2 = Mat2::from_cols(1.6, 1.2, -1.2, 1.6);

/// Scramble a 2D coordinate into a pseudo-random scalar in [0, 1)
#[inline]
pub fn hash(p: Vec2) -> f32 {
    let q = (p * HASH_SCALE).fract();
    let q = q + q.dot(q + HASH_OFFSET);
    fract(q.x * q.y)
}

/// 2D value noise: hashed lattice corners blended with a cubic fade
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p.fract();
    let u = Vec2::new(fade(f.x), fade(f.y));

    let a = hash(i);
    let b = hash(i + Vec2::new(1.0, 0.0));
    let c = hash(i + Vec2::new(0.0, 1.0));
    let d = hash(i + Vec2::new(1.0, 1.0));

    mix(mix(a, b, u.x), mix(c, d, u.x), u.y)
}

/// Fractal sum of [`OCTAVES`] octaves of value noise
///
/// Amplitude starts at 0.5 and halves, frequency starts at 1 and doubles,
/// and the base coordinate is multiplied by [`OCTAVE_MATRIX`] after each
/// octave. The result lies in [0, 0.96875).
pub fn fbm(p: Vec2) -> f32 {
    let mut p = p;
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for _ in 0..OCTAVES {
        value += amplitude * value_noise(p * frequency);
        p = p * OCTAVE_MATRIX;
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> impl Iterator<Item = Vec2> {
        (0..40).flat_map(|i| {
            (0..40).map(move |j| Vec2::new(i as f32 * 0.37 - 7.0, j as f32 * 0.53 - 9.0))
        })
    }

    #[test]
    fn test_hash_range() {
        for p in sample_points() {
            let h = hash(p);
            assert!((0.0..1.0).contains(&h), "hash({:?}) = {}", p, h);
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        let p = Vec2::new(3.0, -2.0);
        assert_eq!(hash(p), hash(p));
        assert_ne!(hash(Vec2::new(0.0, 0.0)), hash(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_value_noise_hits_lattice_values() {
        let corner = Vec2::new(4.0, 7.0);
        assert!((value_noise(corner) - hash(corner)).abs() < 1e-5);
    }

    #[test]
    fn test_value_noise_continuous_across_cells() {
        let eps = 1e-3;
        for k in -3..3 {
            let edge = k as f32;
            let left = value_noise(Vec2::new(edge - eps, 0.3));
            let right = value_noise(Vec2::new(edge + eps, 0.3));
            assert!((left - right).abs() < 0.01, "jump at x = {}", edge);
        }
    }

    #[test]
    fn test_value_noise_range() {
        for p in sample_points() {
            let n = value_noise(p);
            assert!((0.0..1.0).contains(&n));
        }
    }

    #[test]
    fn test_fbm_bounds() {
        for p in sample_points() {
            let v = fbm(p);
            assert!((0.0..0.96875).contains(&v), "fbm({:?}) = {}", p, v);
        }
    }

    #[test]
    fn test_fbm_varies() {
        let a = fbm(Vec2::new(0.1, 0.2));
        let b = fbm(Vec2::new(2.7, -1.9));
        assert!((a - b).abs() > 1e-4);
    }
}
