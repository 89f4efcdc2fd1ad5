//! Serializable view of a backdrop for diagnostics

use aurora_host::Host;
use serde::{Deserialize, Serialize};

use super::shared::BackdropCore;
use crate::state::BackdropState;

/// Point-in-time view of a backdrop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackdropSnapshot {
    pub state: BackdropState,
    /// Virtual time in seconds
    pub time: f64,
    /// Shading resolution in CSS pixels
    pub resolution: [f32; 2],
    /// Backing store size in device pixels; zero once destroyed
    pub pixel_size: [u32; 2],
    pub pixel_ratio: f32,
    pub has_renderer: bool,
    pub frames_drawn: u64,
}

impl BackdropSnapshot {
    pub(crate) fn capture<H: Host>(core: &BackdropCore<H>) -> Self {
        let (pixel_size, pixel_ratio) = match (&core.surface, core.surface_size) {
            (Some(_), Some(size)) => ([size.pixel_width, size.pixel_height], size.pixel_ratio),
            _ => ([0, 0], 1.0),
        };
        Self {
            state: core.state(),
            time: core.render.time,
            resolution: [core.resolution.x, core.resolution.y],
            pixel_size,
            pixel_ratio,
            has_renderer: core.renderer.is_some(),
            frames_drawn: core.frames_drawn,
        }
    }

    pub(crate) fn destroyed() -> Self {
        Self {
            state: BackdropState::Destroyed,
            time: 0.0,
            resolution: [0.0, 0.0],
            pixel_size: [0, 0],
            pixel_ratio: 1.0,
            has_renderer: false,
            frames_drawn: 0,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
