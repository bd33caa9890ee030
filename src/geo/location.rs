//! Location records consumed by the engine.

/// A named point on the globe.
///
/// `index` is the location's row/column in the [`DistanceMatrix`](super::DistanceMatrix)
/// and must equal its position in the slice handed to
/// [`build_distance_matrix`](super::build_distance_matrix). Index 0 is the depot.
///
/// # Examples
///
/// ```
/// use u_tour::geo::Location;
///
/// let depot = Location::new(0, "Ismaning", 48.2289, 11.6859);
/// assert_eq!(depot.index, 0);
/// assert!(depot.has_valid_coordinates());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Stable 0-based identity.
    pub index: usize,
    /// Display label.
    pub name: String,
    /// Latitude in degrees. NaN marks a missing value.
    pub latitude: f64,
    /// Longitude in degrees. NaN marks a missing value.
    pub longitude: f64,
}

impl Location {
    pub fn new(index: usize, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            index,
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are present and finite.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// `(latitude, longitude)` converted to radians.
    pub(crate) fn radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(Location::new(0, "a", 0.0, 0.0).has_valid_coordinates());
        assert!(Location::new(1, "b", -89.9, 179.9).has_valid_coordinates());
    }

    #[test]
    fn test_missing_or_infinite_coordinates() {
        assert!(!Location::new(0, "a", f64::NAN, 0.0).has_valid_coordinates());
        assert!(!Location::new(0, "a", 0.0, f64::INFINITY).has_valid_coordinates());
        assert!(!Location::new(0, "a", f64::NEG_INFINITY, f64::NAN).has_valid_coordinates());
    }

    #[test]
    fn test_radians() {
        let loc = Location::new(0, "a", 180.0, 90.0);
        let (lat, lon) = loc.radians();
        assert!((lat - std::f64::consts::PI).abs() < 1e-12);
        assert!((lon - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
