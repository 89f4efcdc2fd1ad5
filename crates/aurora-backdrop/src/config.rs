//! Backdrop configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier reserved for the backdrop surface element
pub const DEFAULT_ELEMENT_ID: &str = "aurora-bg";

/// Real-to-virtual time factor. Slow enough that the motion never shows a
/// short visible loop.
pub const DEFAULT_TIME_SCALE: f64 = 0.3;

/// Upper bound on the device pixel ratio used for the backing store
pub const DEFAULT_MAX_PIXEL_RATIO: f32 = 2.0;

/// Backdrop configuration
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropConfig {
    /// Reserved element id of the surface
    pub element_id: String,
    /// Virtual seconds per real second
    pub time_scale: f64,
    /// Cap on the device pixel ratio
    pub max_pixel_ratio: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            time_scale: DEFAULT_TIME_SCALE,
            max_pixel_ratio: DEFAULT_MAX_PIXEL_RATIO,
        }
    }
}

impl BackdropConfig {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BackdropConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config.validated())
    }

    /// Replace out-of-range values with their defaults
    pub fn validated(mut self) -> Self {
        if self.element_id.trim().is_empty() {
            self.element_id = DEFAULT_ELEMENT_ID.to_string();
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            self.time_scale = DEFAULT_TIME_SCALE;
        }
        if !self.max_pixel_ratio.is_finite() || self.max_pixel_ratio < 1.0 {
            self.max_pixel_ratio = DEFAULT_MAX_PIXEL_RATIO;
        }
        self
    }
}

/// Configuration errors
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid backdrop config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
