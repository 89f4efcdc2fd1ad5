//! CPU renderer into an RGBA8 buffer

use super::{RenderError, Renderer};
use crate::math::Vec2;
use crate::shading::{shade, ShadingParameters};

/// Evaluates the shading function per pixel on the CPU
///
/// Row 0 is the top of the image. Used for headless rendering and as the
/// reference the GPU shader is checked against.
#[derive(Clone, Debug, Default)]
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    frames: u64,
    released: bool,
}

impl SoftwareRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut renderer = Self::default();
        renderer.resize(width, height);
        renderer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixels, row-major from the top
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at (x, y), if in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of frames drawn
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether [`Renderer::release`] has been called
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Renderer for SoftwareRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width as usize) * (height as usize) * 4];
    }

    fn draw(&mut self, params: &ShadingParameters) -> Result<(), RenderError> {
        if self.released {
            return Err(RenderError::Backend("renderer released".to_string()));
        }
        let (w, h) = (self.width as f32, self.height as f32);
        for (i, px) in self.pixels.chunks_exact_mut(4).enumerate() {
            let x = (i as u32 % self.width) as f32;
            let y = (i as u32 / self.width) as f32;
            // Texture space has its origin bottom-left
            let uv = Vec2::new((x + 0.5) / w, 1.0 - (y + 0.5) / h);
            px.copy_from_slice(&shade(uv, params).to_rgba8());
        }
        self.frames += 1;
        Ok(())
    }

    fn release(&mut self) {
        self.released = true;
        self.pixels = Vec::new();
    }
}
