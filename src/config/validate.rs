//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::tracker::TrackingParams;

/// Validate the entire configuration.
///
/// The threshold ranges are the same ones the associator enforces; a
/// config file that would be rejected at run time is rejected at load
/// time instead.
pub fn validate_config(config: &Config) -> Result<()> {
    let defaults = &config.defaults;
    let params = TrackingParams {
        amp_thres: defaults.amp_thres,
        click_interval_max: defaults.click_interval_max,
        diff_max: defaults.diff_max,
        polynomial_expectation: defaults.polynomial_expectation,
    };
    params.validate().map_err(|e| Error::ConfigValidation {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_negative_amp_thres_rejected() {
        let mut config = Config::default();
        config.defaults.amp_thres = -1.0;
        let err = validate_config(&config);
        assert!(matches!(err, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default();
        config.defaults.click_interval_max = 0.0;
        assert!(validate_config(&config).is_err());
    }
}
