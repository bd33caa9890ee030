//! Crate-wide error type.

use thiserror::Error;

/// Errors raised at the boundary of a failing call.
///
/// No operation returns a partial result alongside an error: a failed
/// matrix build or initial tour never produces a degraded [`Tour`](crate::tour::Tour).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// A latitude or longitude is missing (NaN) or not finite.
    #[error("invalid coordinate for location {index}: lat={latitude}, lon={longitude}")]
    InvalidCoordinate {
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    /// An explicit initial order or start tour is malformed.
    #[error("invalid initial tour: {0}")]
    InvalidInitialTour(String),

    /// Fewer than two locations were supplied.
    #[error("at least 2 locations are required, got {count}")]
    EmptyInput { count: usize },

    /// A location's `index` does not match its position in the input.
    #[error("location at position {position} carries index {index}")]
    LocationIndexMismatch { position: usize, index: usize },

    /// A solver parameter is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn invalid_initial_tour(message: impl Into<String>) -> Self {
        Self::InvalidInitialTour(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TourError::EmptyInput { count: 1 };
        assert_eq!(err.to_string(), "at least 2 locations are required, got 1");

        let err = TourError::invalid_initial_tour("index 7 out of range");
        assert_eq!(err.to_string(), "invalid initial tour: index 7 out of range");

        let err = TourError::invalid_config("threshold must be >= 0");
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn test_coordinate_message_names_location() {
        let err = TourError::InvalidCoordinate {
            index: 3,
            latitude: f64::NAN,
            longitude: 11.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("location 3"), "unexpected message: {msg}");
        assert!(msg.contains("NaN"), "unexpected message: {msg}");
    }
}
