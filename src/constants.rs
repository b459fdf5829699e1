//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "clicktrack";

/// Sentinel track id for clicks not assigned to any multi-member track.
pub const NO_TRACK_ID: i64 = -1;

/// Default click amplitude threshold.
pub const DEFAULT_AMP_THRES: f64 = 0.1;

/// Default maximum interval between consecutive clicks within a track,
/// in seconds.
pub const DEFAULT_CLICK_INTERVAL_MAX: f64 = 0.1;

/// Default maximum difference between expected and observed TDOA for a
/// click to be assigned to a track, in seconds.
pub const DEFAULT_DIFF_MAX: f64 = 2e-5;

/// Minimum member count for a track to survive the final filter.
pub const MIN_TRACK_LEN: usize = 2;

/// Number of trailing track members used by the polynomial predictor.
pub const POLY_WINDOW: usize = 3;

/// Required feature table column names.
pub mod columns {
    /// Click time in seconds.
    pub const TIME: &str = "time";
    /// Click amplitude.
    pub const AMPLITUDE: &str = "amplitude";
    /// Time-difference-of-arrival in seconds.
    pub const TDOA: &str = "tdoa";
    /// Track id column appended to the output table.
    pub const TRACK_ID: &str = "track_id";
}

/// Suffix appended to the output path for the run-metadata sidecar.
pub const METADATA_SUFFIX: &str = ".meta.json";
