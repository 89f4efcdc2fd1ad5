use bytemuck::{Pod, Zeroable};

use crate::shading::ShadingParameters;

/// Uniform block shared with the aurora shader
///
/// Layout matches the WGSL `Uniforms` struct: `resolution` is a `vec2<f32>`
/// and must start on an 8-byte boundary, hence the padding after `time`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub time: f32,
    pub _pad: f32,
    pub resolution: [f32; 2],
}

impl Uniforms {
    pub fn from_params(params: &ShadingParameters) -> Self {
        Self {
            time: params.time,
            _pad: 0.0,
            resolution: [params.resolution.x, params.resolution.y],
        }
    }

    pub fn default_with_resolution(width: u32, height: u32) -> Self {
        Self {
            resolution: [width as f32, height as f32],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_uniform_block_size() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);
    }

    #[test]
    fn test_from_params() {
        let u = Uniforms::from_params(&ShadingParameters::new(2.5, Vec2::new(800.0, 600.0)));
        assert_eq!(u.time, 2.5);
        assert_eq!(u.resolution, [800.0, 600.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 16);
    }
}
