//! Haversine distance matrix.

use super::location::Location;
use crate::error::{Result, TourError};

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two `(lat, lon)` points
/// given in degrees.
///
/// # Examples
///
/// ```
/// use u_tour::geo::haversine_km;
///
/// // One degree of longitude along the equator.
/// let d = haversine_km((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    haversine_radians(
        (from.0.to_radians(), from.1.to_radians()),
        (to.0.to_radians(), to.1.to_radians()),
    )
}

fn haversine_radians((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;
    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Symmetric pairwise distance table in kilometers.
///
/// Row/column `i` corresponds to [`Location::index`] `i`. Built once by
/// [`build_distance_matrix`] and read-only afterwards, so a single matrix
/// can be shared across restarts (and threads) without locking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of locations (rows), depot included.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always `false` for a matrix produced by [`build_distance_matrix`].
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from location `from` to location `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range (checked in debug builds).
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(
            from < self.size && to < self.size,
            "index ({from}, {to}) out of range for {} locations",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Distances from location `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of non-depot locations, i.e. interior positions of a tour.
    pub fn stop_count(&self) -> usize {
        self.size.saturating_sub(1)
    }
}

/// Builds the full haversine matrix for `locations`.
///
/// Only the upper triangle is evaluated; the lower triangle mirrors it so
/// `get(i, j) == get(j, i)` holds bit-for-bit, and the diagonal is exactly
/// zero.
///
/// # Errors
///
/// - [`TourError::EmptyInput`] for fewer than two locations
/// - [`TourError::LocationIndexMismatch`] if a location's index differs from its position
/// - [`TourError::InvalidCoordinate`] for a missing or non-finite coordinate
///
/// # Examples
///
/// ```
/// use u_tour::geo::{build_distance_matrix, Location};
///
/// let locations = vec![
///     Location::new(0, "depot", 0.0, 0.0),
///     Location::new(1, "east", 0.0, 1.0),
/// ];
/// let matrix = build_distance_matrix(&locations).unwrap();
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// assert_eq!(matrix.get(1, 1), 0.0);
/// ```
pub fn build_distance_matrix(locations: &[Location]) -> Result<DistanceMatrix> {
    if locations.len() < 2 {
        return Err(TourError::EmptyInput {
            count: locations.len(),
        });
    }

    for (position, loc) in locations.iter().enumerate() {
        if loc.index != position {
            return Err(TourError::LocationIndexMismatch {
                position,
                index: loc.index,
            });
        }
        if !loc.has_valid_coordinates() {
            return Err(TourError::InvalidCoordinate {
                index: loc.index,
                latitude: loc.latitude,
                longitude: loc.longitude,
            });
        }
    }

    let size = locations.len();
    let radians: Vec<(f64, f64)> = locations.iter().map(Location::radians).collect();
    let mut data = vec![0.0; size * size];

    for i in 0..size {
        for j in (i + 1)..size {
            let d = haversine_radians(radians[i], radians[j]);
            data[i * size + j] = d;
            data[j * size + i] = d;
        }
    }

    log::debug!("distance matrix built for {size} locations");

    Ok(DistanceMatrix { size, data })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coords(n: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 2..n)
    }

    proptest! {
        #[test]
        fn prop_matrix_symmetric_nonnegative(points in coords(12)) {
            let locations: Vec<Location> = points
                .iter()
                .enumerate()
                .map(|(i, &(lat, lon))| Location::new(i, format!("p{i}"), lat, lon))
                .collect();
            let m = build_distance_matrix(&locations).unwrap();

            for i in 0..m.len() {
                prop_assert_eq!(m.get(i, i), 0.0);
                for j in 0..m.len() {
                    prop_assert_eq!(m.get(i, j), m.get(j, i));
                    prop_assert!(m.get(i, j) >= 0.0);
                    prop_assert!(m.get(i, j) <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
                }
            }
        }

        #[test]
        fn prop_haversine_swap_invariant(a in (-90.0f64..90.0, -180.0f64..180.0),
                                         b in (-90.0f64..90.0, -180.0f64..180.0)) {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }
    }
}
