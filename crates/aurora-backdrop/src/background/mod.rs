//! wgpu renderer for browser canvases
//!
//! Renders the aurora shader as a single fullscreen-triangle pass.

mod init;
mod render;
mod renderer;
mod shaders;
mod uniforms;

pub use renderer::GpuRenderer;
pub use shaders::SHADER_AURORA;
pub use uniforms::Uniforms;
