//! 2-opt local search from a single starting tour.
//!
//! Every sweep enumerates all interior segment reversals in a fixed order
//! and adopts an improving candidate as soon as it is seen, so later
//! candidates of the same sweep already build on it. Sweeps repeat until
//! the relative improvement of a sweep drops to the configured threshold.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

mod config;
mod runner;
mod types;

pub use config::TwoOptConfig;
pub(crate) use runner::search;
pub use runner::{run_two_opt, TwoOptOutcome, TwoOptRunner};
pub use types::{Candidate, SearchTrajectory};
