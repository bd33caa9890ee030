//! 2-opt execution loop.
//!
//! # Algorithm
//!
//! 1. `dist` = cost of the start tour
//! 2. Sweep: remember `dist_before = dist`, then for every interior pair
//!    `1 <= start < stop <= k` (start ascending, then stop ascending):
//!    a. reverse positions `start..=stop` of the *current* tour
//!    b. record the candidate
//!    c. if its cost is strictly below `dist`, make it current
//! 3. `score = 1 - dist / dist_before`; sweep again while `score > threshold`
//! 4. Return the current tour, its cost and the trajectory

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::TwoOptConfig;
use super::types::{Candidate, SearchTrajectory};
use crate::error::Result;
use crate::geo::DistanceMatrix;
use crate::tour::Tour;

/// Result of one 2-opt run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptOutcome {
    /// Final tour.
    pub tour: Tour,

    /// Cost of the final tour.
    pub cost: f64,

    /// Cost of the start tour.
    pub initial_cost: f64,

    /// Every candidate evaluated, in order. Empty when recording is off.
    pub trajectory: SearchTrajectory,

    /// Number of completed sweeps (always at least 1).
    pub sweeps: usize,

    /// Tour cost at the end of each sweep.
    pub sweep_costs: Vec<f64>,

    /// Relative improvement of the last sweep.
    pub score: f64,

    /// Whether the last sweep met the threshold.
    pub converged: bool,

    /// Whether the run stopped on the cancellation flag instead.
    pub cancelled: bool,
}

/// Executes 2-opt local search.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Runs 2-opt from `start` until convergence.
    ///
    /// # Errors
    ///
    /// - [`TourError::InvalidConfig`](crate::TourError::InvalidConfig) for a negative or NaN threshold
    /// - [`TourError::InvalidInitialTour`](crate::TourError::InvalidInitialTour) if `start`
    ///   does not cover the matrix's locations
    pub fn run(matrix: &DistanceMatrix, start: &Tour, config: &TwoOptConfig) -> Result<TwoOptOutcome> {
        Self::run_with_cancel(matrix, start, config, None)
    }

    /// Runs 2-opt with an optional cancellation token.
    ///
    /// The flag is checked between sweeps. A cancelled run returns the
    /// tour reached so far with `cancelled = true`; the first sweep always
    /// completes.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        start: &Tour,
        config: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TwoOptOutcome> {
        config.validate()?;
        start.check_against(matrix)?;
        Ok(search(matrix, start.clone(), config, cancel.as_deref()))
    }
}

/// Runs 2-opt from `start` with the given convergence `threshold`,
/// recording the full trajectory.
///
/// # Examples
///
/// ```
/// use u_tour::geo::{build_distance_matrix, Location};
/// use u_tour::tour::Tour;
/// use u_tour::two_opt::run_two_opt;
///
/// let matrix = build_distance_matrix(&[
///     Location::new(0, "depot", 0.0, 0.0),
///     Location::new(1, "A", 0.0, 1.0),
///     Location::new(2, "B", 1.0, 1.0),
///     Location::new(3, "C", 1.0, 0.0),
/// ])
/// .unwrap();
///
/// let start = Tour::from_interior(&[2, 1, 3]).unwrap();
/// let outcome = run_two_opt(&matrix, &start, 1e-3).unwrap();
/// assert!(outcome.cost < start.cost(&matrix));
/// assert_eq!(outcome.trajectory.sweep_len(0), 3);
/// ```
pub fn run_two_opt(matrix: &DistanceMatrix, start: &Tour, threshold: f64) -> Result<TwoOptOutcome> {
    let config = TwoOptConfig::default().with_threshold(threshold);
    TwoOptRunner::run(matrix, start, &config)
}

/// The search proper. Inputs are already validated.
pub(crate) fn search(
    matrix: &DistanceMatrix,
    start: Tour,
    config: &TwoOptConfig,
    cancel: Option<&AtomicBool>,
) -> TwoOptOutcome {
    let k = start.interior_len();
    let mut current = start;
    let mut dist = current.cost(matrix);
    let initial_cost = dist;

    log::debug!("initial distance {dist:.3} for sequence {:?}", current.as_slice());

    let mut trajectory = SearchTrajectory::new();
    let mut sweep_costs = Vec::new();
    let mut sweep = 0usize;
    let mut converged = false;
    let mut cancelled = false;
    let mut score;

    loop {
        let dist_before = dist;

        for seg_start in 1..k {
            for seg_stop in (seg_start + 1)..=k {
                let candidate = current.with_reversed(seg_start, seg_stop);
                let cost = candidate.cost(matrix);
                let accepted = cost < dist;

                if config.record_trajectory {
                    trajectory.push(Candidate {
                        sweep,
                        start: seg_start,
                        stop: seg_stop,
                        tour: candidate.clone(),
                        cost,
                        accepted,
                    });
                }

                if accepted {
                    log::trace!("new best distance {cost:.3} (reversed {seg_start}..={seg_stop})");
                    current = candidate;
                    dist = cost;
                }
            }
        }

        sweep_costs.push(dist);
        sweep += 1;

        // NaN when every location coincides (dist_before == 0); that stops too.
        score = 1.0 - dist / dist_before;
        log::debug!("sweep {sweep}: score {score:.6}, distance {dist:.3}");

        if !(score > config.threshold) {
            converged = true;
            break;
        }

        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::warn!("2-opt cancelled after {sweep} sweeps at distance {dist:.3}");
            cancelled = true;
            break;
        }
    }

    TwoOptOutcome {
        tour: current,
        cost: dist,
        initial_cost,
        trajectory,
        sweeps: sweep,
        sweep_costs,
        score,
        converged,
        cancelled,
    }
}
