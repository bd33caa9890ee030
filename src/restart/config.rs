//! Restart controller configuration.

use crate::error::{Result, TourError};
use crate::tour::InitialTour;
use crate::two_opt::TwoOptConfig;

/// Configuration for a multi-restart solve.
///
/// # Examples
///
/// ```
/// use u_tour::restart::RestartConfig;
///
/// let config = RestartConfig::default()
///     .with_iterations(20)
///     .with_threshold(1e-4)
///     .with_seed(42);
/// assert_eq!(config.iterations, 20);
/// assert_eq!(config.seed, Some(42));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RestartConfig {
    /// Number of independent restarts. Must be positive.
    pub iterations: usize,

    /// Convergence threshold handed to every 2-opt run.
    pub threshold: f64,

    /// Random seed for [`RestartRunner::run`](super::RestartRunner::run).
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to run restarts in parallel using rayon.
    ///
    /// Only honoured with the `parallel` feature; results are identical to
    /// the sequential path for the same seed.
    pub parallel: bool,

    /// Whether 2-opt runs keep their candidate trajectories.
    pub record_trajectory: bool,

    /// Start of the first restart. Later restarts always start randomly.
    pub initial_order: InitialTour,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            iterations: 5,
            threshold: 1e-5,
            seed: None,
            parallel: false,
            record_trajectory: true,
            initial_order: InitialTour::Random,
        }
    }
}

impl RestartConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_record_trajectory(mut self, record: bool) -> Self {
        self.record_trajectory = record;
        self
    }

    /// Makes the first restart start from `order` (interior stops only).
    pub fn with_initial_order(mut self, order: Vec<usize>) -> Self {
        self.initial_order = InitialTour::Explicit(order);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TourError::invalid_config("iterations must be at least 1"));
        }
        self.two_opt().validate()
    }

    pub(crate) fn two_opt(&self) -> TwoOptConfig {
        TwoOptConfig::default()
            .with_threshold(self.threshold)
            .with_record_trajectory(self.record_trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RestartConfig::default();
        assert_eq!(config.iterations, 5);
        assert!((config.threshold - 1e-5).abs() < 1e-15);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.record_trajectory);
        assert_eq!(config.initial_order, InitialTour::Random);
    }

    #[test]
    fn test_builder() {
        let config = RestartConfig::default()
            .with_iterations(3)
            .with_threshold(0.5)
            .with_parallel(true)
            .with_record_trajectory(false)
            .with_initial_order(vec![2, 1]);
        assert_eq!(config.iterations, 3);
        assert_eq!(config.threshold, 0.5);
        assert!(config.parallel);
        assert_eq!(config.initial_order, InitialTour::Explicit(vec![2, 1]));

        let two_opt = config.two_opt();
        assert_eq!(two_opt.threshold, 0.5);
        assert!(!two_opt.record_trajectory);
    }

    #[test]
    fn test_validate_zero_iterations() {
        let err = RestartConfig::default().with_iterations(0).validate().unwrap_err();
        assert!(matches!(err, TourError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_bad_threshold() {
        assert!(RestartConfig::default().with_threshold(-1.0).validate().is_err());
    }
}
