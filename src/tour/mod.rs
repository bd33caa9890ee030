//! Depot-anchored tours and their construction.

mod init;
mod types;

pub use init::{initial_tour, InitialTour};
pub use types::{tour_cost, Tour, DEPOT};
