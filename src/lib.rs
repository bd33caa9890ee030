//! Depot-anchored tour optimization over geographic locations.
//!
//! Finds a short closed tour that leaves a depot, visits every other
//! location once and returns, using:
//!
//! - **Haversine distances**: a symmetric great-circle matrix in kilometers,
//!   built once from latitude/longitude pairs ([`geo`]).
//! - **Starting tours**: random shuffles or caller-supplied orders, always
//!   anchored at the depot ([`tour`]).
//! - **2-opt local search**: repeated sweeps of segment reversals with
//!   immediate acceptance of improvements, recording every candidate
//!   evaluated ([`two_opt`]).
//! - **Random restarts**: independent 2-opt runs from fresh random starts,
//!   keeping the first shortest result ([`restart`]).
//!
//! Parsing input files and rendering results are left to the caller; the
//! result types derive `serde` traits behind the `serde` feature for that
//! purpose.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use u_tour::{build_distance_matrix, solve, Location};
//!
//! let locations = vec![
//!     Location::new(0, "Ismaning", 48.2289, 11.6859),
//!     Location::new(1, "Augsburg", 48.3705, 10.8978),
//!     Location::new(2, "Nuremberg", 49.4521, 11.0767),
//!     Location::new(3, "Regensburg", 49.0134, 12.1016),
//!     Location::new(4, "Passau", 48.5667, 13.4319),
//! ];
//! let matrix = build_distance_matrix(&locations).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let result = solve(&matrix, 5, 1e-5, &mut rng).unwrap();
//!
//! assert_eq!(result.tour().len(), locations.len() + 1);
//! assert_eq!(result.finals.len(), 5);
//! ```

pub mod error;
pub mod geo;
pub mod restart;
pub mod tour;
pub mod two_opt;

pub use error::{Result, TourError};
pub use geo::{build_distance_matrix, DistanceMatrix, Location};
pub use restart::{solve, RestartConfig, RestartOutcome, RestartRunner, SolverResult};
pub use tour::{initial_tour, InitialTour, Tour};
pub use two_opt::{run_two_opt, SearchTrajectory, TwoOptConfig, TwoOptOutcome};
