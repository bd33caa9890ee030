//! 2-opt configuration.

use crate::error::{Result, TourError};

/// Configuration for a single 2-opt run.
///
/// # Examples
///
/// ```
/// use u_tour::two_opt::TwoOptConfig;
///
/// let config = TwoOptConfig::default()
///     .with_threshold(1e-3)
///     .with_record_trajectory(false);
/// assert_eq!(config.threshold, 1e-3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptConfig {
    /// Stop once a sweep's relative improvement `1 - after / before` is at
    /// or below this value. `0.0` runs until a sweep brings no strict
    /// improvement; `1.0` or more stops after the first sweep.
    pub threshold: f64,

    /// Whether to keep every evaluated candidate in the trajectory.
    ///
    /// Turning this off changes nothing about the search itself.
    pub record_trajectory: bool,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            threshold: 1e-5,
            record_trajectory: true,
        }
    }
}

impl TwoOptConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_record_trajectory(mut self, record: bool) -> Self {
        self.record_trajectory = record;
        self
    }

    /// Validates the configuration.
    ///
    /// A negative or NaN threshold is rejected: the score of a sweep
    /// without improvement is 0, so such a threshold would never stop.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(TourError::invalid_config(format!(
            "threshold must be >= 0, got {threshold}"
        )));
    }
    Ok(())
}
