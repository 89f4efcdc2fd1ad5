//! Frame delta clock
//!
//! Timestamps are injected (milliseconds on the host's monotonic base) so
//! the clock is deterministic under test.

/// Measures real time between consecutive frames
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Create a clock whose first delta is measured from `now_ms`
    pub fn started_at(now_ms: f64) -> Self {
        Self {
            last_ms: Some(now_ms),
        }
    }

    /// Seconds since the previous call (or since start/reset)
    ///
    /// The first call on an unstarted clock returns 0. Timestamps earlier
    /// than the previous one yield 0 and do not move the clock back.
    pub fn delta_seconds(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        match self.last_ms {
            // A stale timestamp cannot add time or move the mark back
            Some(last) if now_ms <= last => 0.0,
            Some(last) => {
                self.last_ms = Some(now_ms);
                (now_ms - last) / 1000.0
            }
            None => {
                self.last_ms = Some(now_ms);
                0.0
            }
        }
    }

    /// Discard any elapsed time; the next delta is measured from `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_between_frames() {
        let mut clock = FrameClock::started_at(1000.0);
        assert!((clock.delta_seconds(1016.0) - 0.016).abs() < 1e-9);
        assert!((clock.delta_seconds(1048.0) - 0.032).abs() < 1e-9);
    }

    #[test]
    fn test_unstarted_clock_first_delta_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.delta_seconds(5000.0), 0.0);
        assert!((clock.delta_seconds(5100.0) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_reset_discards_elapsed_time() {
        let mut clock = FrameClock::started_at(0.0);
        clock.reset(60_000.0);
        assert!((clock.delta_seconds(60_016.0) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_stale_timestamp_yields_zero() {
        let mut clock = FrameClock::started_at(100.0);
        assert_eq!(clock.delta_seconds(90.0), 0.0);
        // Still measured from 100, not 90
        assert!((clock.delta_seconds(110.0) - 0.010).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_timestamp_ignored() {
        let mut clock = FrameClock::started_at(100.0);
        assert_eq!(clock.delta_seconds(f64::NAN), 0.0);
        assert!((clock.delta_seconds(200.0) - 0.1).abs() < 1e-9);
    }
}
