//! Starting tours for the local search.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Tour;
use crate::error::{Result, TourError};

/// How the interior of a starting tour is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialTour {
    /// Uniform shuffle of `1..=k`.
    #[default]
    Random,
    /// Caller-supplied interior order; must be a permutation of `1..=k`.
    Explicit(Vec<usize>),
}

/// Produces a starting [`Tour`] over `k` non-depot locations.
///
/// # Errors
///
/// - [`TourError::EmptyInput`] if `k == 0`
/// - [`TourError::InvalidInitialTour`] if an explicit order has the wrong
///   length or is not a permutation of `1..=k`
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tour::tour::{initial_tour, InitialTour};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///
/// let random = initial_tour(4, &InitialTour::Random, &mut rng).unwrap();
/// assert_eq!(random.len(), 6);
///
/// let fixed = initial_tour(3, &InitialTour::Explicit(vec![3, 1, 2]), &mut rng).unwrap();
/// assert_eq!(fixed.as_slice(), &[0, 3, 1, 2, 0]);
/// ```
pub fn initial_tour<R: Rng + ?Sized>(k: usize, mode: &InitialTour, rng: &mut R) -> Result<Tour> {
    if k == 0 {
        return Err(TourError::EmptyInput { count: 1 });
    }

    match mode {
        InitialTour::Random => {
            let mut order: Vec<usize> = (1..=k).collect();
            order.shuffle(rng);
            Tour::from_interior(&order)
        }
        InitialTour::Explicit(order) => {
            if order.len() != k {
                return Err(TourError::invalid_initial_tour(format!(
                    "expected {k} stops, got {}",
                    order.len()
                )));
            }
            Tour::from_interior(order)
        }
    }
}
