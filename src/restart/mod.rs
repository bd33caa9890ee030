//! Multi-restart controller.
//!
//! Runs the 2-opt search from several independent starting tours and keeps
//! the shortest result. Restarts share nothing but the read-only distance
//! matrix, so with the `parallel` feature they run on rayon's pool.

mod config;
mod runner;

pub use config::RestartConfig;
pub use runner::{solve, RestartOutcome, RestartRunner, RestartSummary, SolverResult};
