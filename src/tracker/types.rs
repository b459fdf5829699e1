//! Tracker type definitions.

use crate::constants::{
    DEFAULT_AMP_THRES, DEFAULT_CLICK_INTERVAL_MAX, DEFAULT_DIFF_MAX, NO_TRACK_ID,
};
use crate::error::{Error, Result};

/// A single detected acoustic click.
///
/// Clicks are identified by their 0-based position in the input sequence,
/// which must be sorted by `time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    /// Detection time in seconds.
    pub time: f64,
    /// Click amplitude.
    pub amplitude: f64,
    /// Time-difference-of-arrival in seconds.
    pub tdoa: f64,
}

/// Decision parameters for one association run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingParams {
    /// Minimum amplitude for a click to be considered at all.
    pub amp_thres: f64,
    /// Maximum time gap between consecutive clicks within a track.
    pub click_interval_max: f64,
    /// Maximum difference between expected and observed TDOA for
    /// assignment to a track.
    pub diff_max: f64,
    /// Use polynomial extrapolation instead of last-value prediction.
    pub polynomial_expectation: bool,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            amp_thres: DEFAULT_AMP_THRES,
            click_interval_max: DEFAULT_CLICK_INTERVAL_MAX,
            diff_max: DEFAULT_DIFF_MAX,
            polynomial_expectation: false,
        }
    }
}

impl TrackingParams {
    /// Validate parameter ranges.
    ///
    /// Configuration errors are rejected here, before the associator
    /// runs; the core never sees out-of-range thresholds.
    pub fn validate(&self) -> Result<()> {
        if !self.amp_thres.is_finite() || self.amp_thres < 0.0 {
            return Err(Error::InvalidParameter {
                message: format!("amp_thres must be finite and >= 0, got {}", self.amp_thres),
            });
        }
        if !self.click_interval_max.is_finite() || self.click_interval_max <= 0.0 {
            return Err(Error::InvalidParameter {
                message: format!(
                    "click_interval_max must be finite and > 0, got {}",
                    self.click_interval_max
                ),
            });
        }
        if !self.diff_max.is_finite() || self.diff_max <= 0.0 {
            return Err(Error::InvalidParameter {
                message: format!("diff_max must be finite and > 0, got {}", self.diff_max),
            });
        }
        Ok(())
    }
}

/// Result of one association run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingResult {
    /// Multi-member tracks, each a strictly time-increasing sequence of
    /// click indices. Singleton tracks are dropped before this is built.
    pub tracks: Vec<Vec<usize>>,
    /// Per-click track id, same length as the input. Unassigned clicks
    /// carry [`NO_TRACK_ID`](crate::constants::NO_TRACK_ID).
    pub assignment: Vec<i64>,
}

impl TrackingResult {
    /// Number of clicks assigned to a multi-member track.
    pub fn assigned_clicks(&self) -> usize {
        self.assignment.iter().filter(|&&id| id != NO_TRACK_ID).count()
    }
}
