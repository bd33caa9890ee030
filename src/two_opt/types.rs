//! Search trajectory records.

use crate::tour::Tour;

/// One evaluated 2-opt candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// 0-based sweep in which the candidate was evaluated.
    pub sweep: usize,
    /// First reversed position.
    pub start: usize,
    /// Last reversed position (inclusive).
    pub stop: usize,
    /// The candidate tour.
    pub tour: Tour,
    /// Its total distance.
    pub cost: f64,
    /// Whether it replaced the current tour.
    pub accepted: bool,
}

/// Every candidate evaluated during one 2-opt run, in evaluation order.
///
/// Only used for diagnostics and rendering; the search never reads it back.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTrajectory {
    candidates: Vec<Candidate>,
}

impl SearchTrajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Candidate costs in evaluation order.
    pub fn costs(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.cost).collect()
    }

    /// Number of candidates evaluated in `sweep`.
    pub fn sweep_len(&self, sweep: usize) -> usize {
        self.candidates.iter().filter(|c| c.sweep == sweep).count()
    }

    /// Accepted candidates only, i.e. the path the search actually took.
    pub fn accepted(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| c.accepted)
    }

    pub fn into_inner(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl<'a> IntoIterator for &'a SearchTrajectory {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(sweep: usize, cost: f64, accepted: bool) -> Candidate {
        Candidate {
            sweep,
            start: 1,
            stop: 2,
            tour: Tour::from_interior(&[2, 1]).unwrap(),
            cost,
            accepted,
        }
    }

    #[test]
    fn test_push_and_query() {
        let mut t = SearchTrajectory::new();
        assert!(t.is_empty());
        t.push(candidate(0, 5.0, true));
        t.push(candidate(0, 6.0, false));
        t.push(candidate(1, 5.0, false));

        assert_eq!(t.len(), 3);
        assert_eq!(t.costs(), vec![5.0, 6.0, 5.0]);
        assert_eq!(t.sweep_len(0), 2);
        assert_eq!(t.sweep_len(1), 1);
        assert_eq!(t.sweep_len(2), 0);
        assert_eq!(t.accepted().count(), 1);
        assert_eq!((&t).into_iter().count(), 3);
    }
}
