//! Rendering seam between the backdrop lifecycle and a drawing backend

mod software;

pub use software::SoftwareRenderer;

use std::fmt;

use crate::shading::ShadingParameters;

/// Errors a renderer can report for a single frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The surface was lost or outdated and has been reconfigured
    SurfaceLost,
    /// The backend did not hand out a frame in time
    Timeout,
    /// The backend ran out of memory
    OutOfMemory,
    /// Any other backend failure
    Backend(String),
}

impl RenderError {
    /// Whether the renderer is unusable after this error
    ///
    /// Non-fatal errors skip the current frame only.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::OutOfMemory | RenderError::Backend(_))
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface reconfigured, skip frame"),
            RenderError::Timeout => write!(f, "GPU timeout, skip frame"),
            RenderError::OutOfMemory => write!(f, "Out of GPU memory"),
            RenderError::Backend(msg) => write!(f, "Renderer failure: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// A drawing backend for the aurora shading function
pub trait Renderer {
    /// Resize the backing store in device pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one full frame
    fn draw(&mut self, params: &ShadingParameters) -> Result<(), RenderError>;

    /// Release backend resources. Called once when the backdrop is torn down.
    fn release(&mut self) {}
}
