//! The [`Tour`] value type.

use crate::error::{Result, TourError};
use crate::geo::DistanceMatrix;

/// Location index of the depot.
pub const DEPOT: usize = 0;

/// A closed tour anchored at the depot.
///
/// For `k` non-depot locations the sequence holds `k + 2` indices:
/// `[0, s_1, ..., s_k, 0]`, where `s_1..s_k` is a permutation of `1..=k`.
/// Positions `1..=k` are the interior; the constructors reject anything
/// else, so every `Tour` in circulation is valid.
///
/// # Examples
///
/// ```
/// use u_tour::tour::Tour;
///
/// let tour = Tour::from_interior(&[2, 3, 1]).unwrap();
/// assert_eq!(tour.as_slice(), &[0, 2, 3, 1, 0]);
/// assert_eq!(tour.interior(), &[2, 3, 1]);
/// assert!(Tour::from_interior(&[1, 1, 3]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour {
    sequence: Vec<usize>,
}

impl Tour {
    /// Builds a tour from the interior order `s_1..s_k`.
    ///
    /// # Errors
    /// [`TourError::InvalidInitialTour`] unless `order` is a permutation of `1..=order.len()`.
    pub fn from_interior(order: &[usize]) -> Result<Self> {
        check_permutation(order)?;
        let mut sequence = Vec::with_capacity(order.len() + 2);
        sequence.push(DEPOT);
        sequence.extend_from_slice(order);
        sequence.push(DEPOT);
        Ok(Self { sequence })
    }

    /// Builds a tour from a full sequence including both depot ends.
    pub fn from_sequence(sequence: Vec<usize>) -> Result<Self> {
        if sequence.len() < 3 {
            return Err(TourError::invalid_initial_tour(format!(
                "sequence of length {} cannot hold a depot round trip",
                sequence.len()
            )));
        }
        let last = sequence.len() - 1;
        if sequence[0] != DEPOT || sequence[last] != DEPOT {
            return Err(TourError::invalid_initial_tour(
                "sequence must start and end at the depot",
            ));
        }
        check_permutation(&sequence[1..last])?;
        Ok(Self { sequence })
    }

    /// Full sequence, depot at both ends.
    pub fn as_slice(&self) -> &[usize] {
        &self.sequence
    }

    /// Interior positions only.
    pub fn interior(&self) -> &[usize] {
        &self.sequence[1..self.sequence.len() - 1]
    }

    /// Number of interior positions (non-depot locations).
    pub fn interior_len(&self) -> usize {
        self.sequence.len() - 2
    }

    /// Length of the full sequence, `interior_len() + 2`.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// A tour always holds the two depot ends.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total distance along the tour.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        tour_cost(matrix, self)
    }

    /// Returns a copy with positions `start..=stop` reversed (a 2-opt move).
    ///
    /// # Panics
    /// Panics unless `1 <= start < stop <= interior_len()`.
    pub fn with_reversed(&self, start: usize, stop: usize) -> Self {
        assert!(
            start >= 1 && start < stop && stop <= self.interior_len(),
            "segment {start}..={stop} is not interior to a tour of {} stops",
            self.interior_len()
        );
        let mut sequence = self.sequence.clone();
        sequence[start..=stop].reverse();
        Self { sequence }
    }

    /// Checks that this tour covers exactly the locations of `matrix`.
    pub fn check_against(&self, matrix: &DistanceMatrix) -> Result<()> {
        if self.interior_len() != matrix.stop_count() {
            return Err(TourError::invalid_initial_tour(format!(
                "tour visits {} stops but the matrix has {}",
                self.interior_len(),
                matrix.stop_count()
            )));
        }
        Ok(())
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.sequence
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TourError;

    fn try_from(sequence: Vec<usize>) -> Result<Self> {
        Self::from_sequence(sequence)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.into_vec()
    }
}

/// Sum of `matrix[t[k]][t[k+1]]` over consecutive positions of `tour`.
pub fn tour_cost(matrix: &DistanceMatrix, tour: &Tour) -> f64 {
    tour.sequence
        .windows(2)
        .map(|w| matrix.get(w[0], w[1]))
        .sum()
}

fn check_permutation(order: &[usize]) -> Result<()> {
    let k = order.len();
    if k == 0 {
        return Err(TourError::invalid_initial_tour("no stops besides the depot"));
    }
    let mut seen = vec![false; k + 1];
    for &idx in order {
        if idx == DEPOT || idx > k {
            return Err(TourError::invalid_initial_tour(format!(
                "index {idx} outside 1..={k}"
            )));
        }
        if seen[idx] {
            return Err(TourError::invalid_initial_tour(format!(
                "index {idx} appears more than once"
            )));
        }
        seen[idx] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{build_distance_matrix, Location};

    fn square() -> DistanceMatrix {
        build_distance_matrix(&[
            Location::new(0, "depot", 0.0, 0.0),
            Location::new(1, "A", 0.0, 1.0),
            Location::new(2, "B", 1.0, 1.0),
            Location::new(3, "C", 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_interior() {
        let t = Tour::from_interior(&[3, 1, 2]).unwrap();
        assert_eq!(t.as_slice(), &[0, 3, 1, 2, 0]);
        assert_eq!(t.len(), 5);
        assert_eq!(t.interior_len(), 3);
    }

    #[test]
    fn test_from_interior_rejects() {
        assert!(Tour::from_interior(&[]).is_err());
        assert!(Tour::from_interior(&[0, 1]).is_err());
        assert!(Tour::from_interior(&[1, 3]).is_err());
        assert!(Tour::from_interior(&[2, 2]).is_err());
    }

    #[test]
    fn test_from_sequence() {
        assert!(Tour::from_sequence(vec![0, 2, 1, 0]).is_ok());
        assert!(Tour::from_sequence(vec![0, 0]).is_err());
        assert!(Tour::from_sequence(vec![1, 0, 2, 0]).is_err());
        assert!(Tour::from_sequence(vec![0, 2, 1, 1]).is_err());
        assert!(Tour::from_sequence(vec![0, 2, 2, 0]).is_err());
    }

    #[test]
    fn test_with_reversed() {
        let t = Tour::from_interior(&[1, 2, 3, 4]).unwrap();
        assert_eq!(t.with_reversed(1, 4).interior(), &[4, 3, 2, 1]);
        assert_eq!(t.with_reversed(2, 3).interior(), &[1, 3, 2, 4]);
        assert_eq!(t.with_reversed(1, 2).as_slice(), &[0, 2, 1, 3, 4, 0]);
    }

    #[test]
    #[should_panic(expected = "not interior")]
    fn test_with_reversed_touching_depot_panics() {
        let t = Tour::from_interior(&[1, 2, 3]).unwrap();
        t.with_reversed(2, 4);
    }

    #[test]
    fn test_cost_matches_manual_sum() {
        let m = square();
        let t = Tour::from_interior(&[1, 2, 3]).unwrap();
        let manual = m.get(0, 1) + m.get(1, 2) + m.get(2, 3) + m.get(3, 0);
        assert_eq!(t.cost(&m), manual);
        assert!(t.cost(&m) > 0.0);
    }

    #[test]
    fn test_mirror_has_equal_cost() {
        let m = square();
        let forward = Tour::from_interior(&[1, 2, 3]).unwrap();
        let mirror = Tour::from_interior(&[3, 2, 1]).unwrap();
        assert!((forward.cost(&m) - mirror.cost(&m)).abs() < 1e-9);
    }

    #[test]
    fn test_check_against() {
        let m = square();
        assert!(Tour::from_interior(&[1, 2, 3]).unwrap().check_against(&m).is_ok());
        assert!(Tour::from_interior(&[1, 2]).unwrap().check_against(&m).is_err());
    }

    #[test]
    fn test_vec_conversions() {
        let t = Tour::try_from(vec![0, 1, 2, 0]).unwrap();
        let v: Vec<usize> = t.into();
        assert_eq!(v, vec![0, 1, 2, 0]);
    }
}
