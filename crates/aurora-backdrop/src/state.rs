//! Backdrop lifecycle and render state

use serde::{Deserialize, Serialize};

/// Lifecycle state of an [`AnimatedBackdrop`](crate::AnimatedBackdrop)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackdropState {
    /// Frames are being requested and time advances
    Active,
    /// Page hidden; no frames requested, time frozen
    Paused,
    /// Torn down; every operation is a no-op
    Destroyed,
}

impl BackdropState {
    /// Get the string ID for this state
    pub fn id(&self) -> &'static str {
        match self {
            BackdropState::Active => "active",
            BackdropState::Paused => "paused",
            BackdropState::Destroyed => "destroyed",
        }
    }
}

/// Mutable animation state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    /// Virtual time in seconds
    pub time: f64,
    /// Whether frames advance time
    pub playing: bool,
}

impl RenderState {
    pub fn new(playing: bool) -> Self {
        Self {
            time: 0.0,
            playing,
        }
    }

    /// Advance virtual time by `real_delta` seconds scaled by `time_scale`
    ///
    /// Does nothing while paused. Negative or non-finite steps are dropped
    /// so time never runs backwards.
    pub fn advance(&mut self, real_delta: f64, time_scale: f64) -> f64 {
        if self.playing {
            let step = real_delta * time_scale;
            if step.is_finite() && step > 0.0 {
                self.time += step;
            }
        }
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_ids() {
        assert_eq!(BackdropState::Active.id(), "active");
        assert_eq!(BackdropState::Paused.id(), "paused");
        assert_eq!(BackdropState::Destroyed.id(), "destroyed");
    }

    #[test]
    fn test_state_serializes_lowercase() {
        let json = serde_json::to_string(&BackdropState::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
        let back: BackdropState = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(back, BackdropState::Active);
    }

    #[test]
    fn test_advance_scales_time() {
        let mut state = RenderState::new(true);
        state.advance(1.0, 0.3);
        state.advance(0.5, 0.3);
        assert!((state.time - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_advance_frozen_while_paused() {
        let mut state = RenderState::new(true);
        state.advance(2.0, 0.5);
        state.playing = false;
        state.advance(100.0, 0.5);
        assert!((state.time - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_rejects_backwards_steps() {
        let mut state = RenderState::new(true);
        state.advance(1.0, 1.0);
        state.advance(-5.0, 1.0);
        state.advance(f64::NAN, 1.0);
        assert!((state.time - 1.0).abs() < 1e-9);
    }
}
