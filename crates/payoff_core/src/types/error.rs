//! Error types for structured error handling.
//!
//! The calculation path itself never fails on incomplete leg data; the only
//! errors the core can produce concern an unusable scan-window configuration.

use thiserror::Error;

/// Scan-window configuration errors.
///
/// # Variants
/// - `InvalidPointCount`: target/ceiling point counts are unusable
/// - `InvalidFallbackPrice`: fallback price is not positive
/// - `InvalidFraction`: a range or buffer fraction is not positive
///
/// # Examples
/// ```
/// use payoff_core::types::GridError;
///
/// let err = GridError::InvalidFallbackPrice { price: 0.0 };
/// assert!(format!("{}", err).contains("fallback price"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Target point count must be at least 2 and no greater than the ceiling.
    #[error("Invalid point counts: target {target} with ceiling {max} (need 2 <= target <= ceiling)")]
    InvalidPointCount {
        /// Configured target point count
        target: usize,
        /// Configured hard ceiling
        max: usize,
    },

    /// Fallback price for anchorless strategies must be positive.
    #[error("Invalid fallback price: {price} (must be positive)")]
    InvalidFallbackPrice {
        /// The rejected price
        price: f64,
    },

    /// A configured fraction must be positive.
    #[error("Invalid {name} fraction: {value} (must be positive)")]
    InvalidFraction {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_display() {
        let err = GridError::InvalidPointCount {
            target: 1,
            max: 500,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid point counts: target 1 with ceiling 500 (need 2 <= target <= ceiling)"
        );
    }

    #[test]
    fn test_fraction_display() {
        let err = GridError::InvalidFraction {
            name: "buffer floor",
            value: -0.1,
        };
        assert!(format!("{}", err).contains("buffer floor"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = GridError::InvalidFallbackPrice { price: -1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = GridError::InvalidFallbackPrice { price: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
