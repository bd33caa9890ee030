//! Geographic input and the great-circle distance matrix.
//!
//! Locations arrive from an external loader; this module only reads them.
//! [`build_distance_matrix`] evaluates the haversine formula for every
//! pair once and freezes the result.
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine", *Sky and Telescope* 68(2), 159.

mod distance;
mod location;

pub use distance::{build_distance_matrix, haversine_km, DistanceMatrix, EARTH_RADIUS_KM};
pub use location::Location;
