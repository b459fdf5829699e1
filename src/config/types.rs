//! Configuration type definitions.

use crate::constants::{DEFAULT_AMP_THRES, DEFAULT_CLICK_INTERVAL_MAX, DEFAULT_DIFF_MAX};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracking parameters.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default tracking parameters, overridable per run from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Click amplitude threshold.
    pub amp_thres: f64,

    /// Maximum interval between clicks within a track, in seconds.
    pub click_interval_max: f64,

    /// Maximum difference between expected and observed TDOA, in seconds.
    pub diff_max: f64,

    /// Use polynomial TDOA prediction by default.
    pub polynomial_expectation: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            amp_thres: DEFAULT_AMP_THRES,
            click_interval_max: DEFAULT_CLICK_INTERVAL_MAX,
            diff_max: DEFAULT_DIFF_MAX,
            polynomial_expectation: false,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the run-metadata sidecar next to the output file.
    pub metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { metadata: true }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.amp_thres, 0.1);
        assert_eq!(defaults.click_interval_max, 0.1);
        assert_eq!(defaults.diff_max, 2e-5);
        assert!(!defaults.polynomial_expectation);
    }

    #[test]
    fn test_metadata_enabled_by_default() {
        assert!(OutputConfig::default().metadata);
    }
}
