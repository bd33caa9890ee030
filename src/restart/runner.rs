//! Restart execution loop.
//!
//! # Algorithm
//!
//! 1. Draw one starting tour per restart from the RNG, in restart order
//! 2. Run 2-opt to convergence from each start
//! 3. Pick the first restart with the minimum final cost (linear scan)
//!
//! Drawing every start before any search runs keeps the RNG stream
//! independent of scheduling, so the parallel path reproduces the
//! sequential one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::RestartConfig;
use crate::error::Result;
use crate::geo::DistanceMatrix;
use crate::tour::{initial_tour, InitialTour, Tour};
use crate::two_opt::{search, SearchTrajectory, TwoOptConfig};

/// One restart's converged state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartOutcome {
    /// 0-based restart number.
    pub restart: usize,
    /// Converged tour.
    pub tour: Tour,
    /// Its total distance.
    pub cost: f64,
    /// Every candidate evaluated by this restart.
    pub trajectory: SearchTrajectory,
    /// Number of sweeps the restart took.
    pub sweeps: usize,
    /// Whether it met the threshold (as opposed to being cancelled).
    pub converged: bool,
}

/// Final tour and cost of one restart, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartSummary {
    pub restart: usize,
    pub tour: Tour,
    pub cost: f64,
    pub sweeps: usize,
}

/// Result of a multi-restart solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The winning restart, trajectory included.
    pub best: RestartOutcome,

    /// Final tour and cost of every restart that ran, in restart order.
    pub finals: Vec<RestartSummary>,

    /// Whether restarts were skipped or cut short by cancellation.
    pub cancelled: bool,
}

impl SolverResult {
    /// Winning tour.
    pub fn tour(&self) -> &Tour {
        &self.best.tour
    }

    /// Winning tour's total distance.
    pub fn cost(&self) -> f64 {
        self.best.cost
    }

    /// Trajectory of the winning restart.
    pub fn trajectory(&self) -> &SearchTrajectory {
        &self.best.trajectory
    }

    /// Index of the winning restart.
    pub fn best_restart(&self) -> usize {
        self.best.restart
    }

    /// `(tour, cost)` of every restart.
    pub fn final_pairs(&self) -> impl Iterator<Item = (&Tour, f64)> {
        self.finals.iter().map(|s| (&s.tour, s.cost))
    }
}

/// Multi-restart 2-opt runner.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs the restarts with an RNG seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &RestartConfig) -> Result<SolverResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_cancel(matrix, config, &mut rng, None)
    }

    /// Runs the restarts drawing starting tours from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(
        matrix: &DistanceMatrix,
        config: &RestartConfig,
        rng: &mut R,
    ) -> Result<SolverResult> {
        Self::run_with_cancel(matrix, config, rng, None)
    }

    /// Runs the restarts with an optional cancellation token.
    ///
    /// Once the flag is set, no further restart starts and running ones
    /// stop at their next sweep boundary. Restart 0 always runs, so a
    /// result is always available.
    pub fn run_with_cancel<R: Rng + ?Sized>(
        matrix: &DistanceMatrix,
        config: &RestartConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolverResult> {
        config.validate()?;

        let k = matrix.stop_count();
        let random = InitialTour::Random;
        let starts = (0..config.iterations)
            .map(|r| {
                let mode = if r == 0 { &config.initial_order } else { &random };
                initial_tour(k, mode, &mut *rng)
            })
            .collect::<Result<Vec<Tour>>>()?;

        let two_opt = config.two_opt();
        let flag = cancel.as_deref();

        let outcomes = if config.parallel {
            run_parallel(matrix, starts, &two_opt, flag)
        } else {
            run_sequential(matrix, starts, &two_opt, flag)
        };

        let ran = outcomes.len();
        let cancelled = ran < config.iterations || outcomes.iter().any(|o| !o.converged);
        Ok(select_best(outcomes, cancelled))
    }
}

/// Runs `iterations` random restarts with threshold `threshold`, drawing
/// starting tours from `rng`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tour::geo::{build_distance_matrix, Location};
/// use u_tour::restart::solve;
///
/// let matrix = build_distance_matrix(&[
///     Location::new(0, "depot", 0.0, 0.0),
///     Location::new(1, "A", 0.0, 1.0),
///     Location::new(2, "B", 1.0, 1.0),
///     Location::new(3, "C", 1.0, 0.0),
/// ])
/// .unwrap();
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let result = solve(&matrix, 4, 1e-3, &mut rng).unwrap();
/// assert_eq!(result.finals.len(), 4);
/// let interior = result.tour().interior();
/// assert!(interior == [1, 2, 3] || interior == [3, 2, 1]);
/// ```
pub fn solve<R: Rng + ?Sized>(
    matrix: &DistanceMatrix,
    iterations: usize,
    threshold: f64,
    rng: &mut R,
) -> Result<SolverResult> {
    let config = RestartConfig::default()
        .with_iterations(iterations)
        .with_threshold(threshold);
    RestartRunner::run_with_rng(matrix, &config, rng)
}

fn run_restart(
    matrix: &DistanceMatrix,
    restart: usize,
    start: Tour,
    config: &TwoOptConfig,
    cancel: Option<&AtomicBool>,
) -> RestartOutcome {
    let out = search(matrix, start, config, cancel);
    log::info!(
        "score of restart {restart}: {:.6}, distance {:.3}",
        out.score,
        out.cost
    );
    RestartOutcome {
        restart,
        tour: out.tour,
        cost: out.cost,
        trajectory: out.trajectory,
        sweeps: out.sweeps,
        converged: out.converged,
    }
}

fn is_set(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

fn run_sequential(
    matrix: &DistanceMatrix,
    starts: Vec<Tour>,
    config: &TwoOptConfig,
    cancel: Option<&AtomicBool>,
) -> Vec<RestartOutcome> {
    let mut outcomes = Vec::with_capacity(starts.len());
    for (restart, start) in starts.into_iter().enumerate() {
        if restart > 0 && is_set(cancel) {
            log::warn!("cancelled after {restart} restarts");
            break;
        }
        outcomes.push(run_restart(matrix, restart, start, config, cancel));
    }
    outcomes
}

#[cfg(feature = "parallel")]
fn run_parallel(
    matrix: &DistanceMatrix,
    starts: Vec<Tour>,
    config: &TwoOptConfig,
    cancel: Option<&AtomicBool>,
) -> Vec<RestartOutcome> {
    use rayon::prelude::*;

    let outcomes: Vec<Option<RestartOutcome>> = starts
        .into_par_iter()
        .enumerate()
        .map(|(restart, start)| {
            if restart > 0 && is_set(cancel) {
                None
            } else {
                Some(run_restart(matrix, restart, start, config, cancel))
            }
        })
        .collect();

    let ran: Vec<RestartOutcome> = outcomes.into_iter().flatten().collect();
    if is_set(cancel) {
        log::warn!("cancelled with {} restarts completed", ran.len());
    }
    ran
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(
    matrix: &DistanceMatrix,
    starts: Vec<Tour>,
    config: &TwoOptConfig,
    cancel: Option<&AtomicBool>,
) -> Vec<RestartOutcome> {
    log::debug!("built without the `parallel` feature; running restarts sequentially");
    run_sequential(matrix, starts, config, cancel)
}

/// Index of the first outcome with the minimum cost.
fn first_minimum(outcomes: &[RestartOutcome]) -> usize {
    let mut best = 0;
    for (i, outcome) in outcomes.iter().enumerate().skip(1) {
        if outcome.cost < outcomes[best].cost {
            best = i;
        }
    }
    best
}

/// Assembles the result; `outcomes` is never empty since restart 0 always runs.
fn select_best(mut outcomes: Vec<RestartOutcome>, cancelled: bool) -> SolverResult {
    let best_idx = first_minimum(&outcomes);
    let finals = outcomes
        .iter()
        .map(|o| RestartSummary {
            restart: o.restart,
            tour: o.tour.clone(),
            cost: o.cost,
            sweeps: o.sweeps,
        })
        .collect();
    let best = outcomes.swap_remove(best_idx);

    log::info!(
        "best result: distance {:.3} from restart {}",
        best.cost,
        best.restart
    );

    SolverResult {
        best,
        finals,
        cancelled,
    }
}
