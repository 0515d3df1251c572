//! Scan-window configuration.
//!
//! The source system derived its scan windows from magic constants scattered
//! across call sites; here every knob (buffer fractions, rounding units,
//! target point count, precision, fallback price) is explicit configuration
//! carried by `GridConfig` and threaded into every curve build.

use serde::{Deserialize, Serialize};

use crate::math::precision_unit;
use crate::types::GridError;

/// Configuration for settlement-price scan-window generation.
///
/// A single `GridConfig` governs every curve build: how far past the anchor
/// prices the window extends, how tick values are rounded to human-readable
/// numbers, and how many points the scan may produce. The hard ceiling
/// (`max_points`) is the engine's only defence against pathological input
/// such as anchors separated by many orders of magnitude.
///
/// # Examples
/// ```
/// use payoff_core::config::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.target_points, 110);
/// assert_eq!(config.max_points, 500);
/// assert!(config.validate().is_ok());
///
/// // Low-priced instruments get a proportionally wider buffer.
/// assert!(config.buffer_fraction(20.0) > config.buffer_fraction(20_000.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Point count the step size aims for before nice-increment snapping.
    pub target_points: usize,

    /// Hard ceiling on the number of sampled points per curve.
    pub max_points: usize,

    /// Decimal places prices and P&L values are rounded to.
    pub price_decimals: u32,

    /// Window centre used when no leg carries a usable anchor price.
    pub fallback_price: f64,

    /// Fraction of the anchor price used to synthesise a range when all
    /// legs share a single price.
    pub single_anchor_range_fraction: f64,

    /// Buffer floor, as a fraction of the largest anchor, guarding against
    /// a near-zero-width window when the anchors sit close together.
    pub buffer_floor_fraction: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            target_points: 110,
            max_points: 500,
            price_decimals: 2,
            fallback_price: 100.0,
            single_anchor_range_fraction: 0.20,
            buffer_floor_fraction: 0.05,
        }
    }
}

impl GridConfig {
    /// Buffer fraction applied to the raw anchor range, tiered by price
    /// magnitude. Low-priced instruments need proportionally more margin for
    /// the curve tails to be visible.
    pub fn buffer_fraction(&self, magnitude: f64) -> f64 {
        if magnitude < 50.0 {
            0.50
        } else if magnitude < 500.0 {
            0.35
        } else if magnitude < 5_000.0 {
            0.25
        } else {
            0.15
        }
    }

    /// Rounding unit for window edges, tiered by price magnitude so tick
    /// values stay human-readable at any scale.
    pub fn rounding_unit(&self, magnitude: f64) -> f64 {
        if magnitude < 50.0 {
            1.0
        } else if magnitude < 500.0 {
            5.0
        } else if magnitude < 5_000.0 {
            50.0
        } else if magnitude < 50_000.0 {
            100.0
        } else {
            500.0
        }
    }

    /// The smallest price increment at the configured precision.
    #[inline]
    pub fn price_unit(&self) -> f64 {
        precision_unit(self.price_decimals)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns a [`GridError`] when the point counts cannot describe a
    /// usable scan or a price/fraction field is non-positive.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.target_points < 2 || self.target_points > self.max_points {
            return Err(GridError::InvalidPointCount {
                target: self.target_points,
                max: self.max_points,
            });
        }
        if self.fallback_price <= 0.0 {
            return Err(GridError::InvalidFallbackPrice {
                price: self.fallback_price,
            });
        }
        if self.single_anchor_range_fraction <= 0.0 {
            return Err(GridError::InvalidFraction {
                name: "single-anchor range",
                value: self.single_anchor_range_fraction,
            });
        }
        if self.buffer_floor_fraction <= 0.0 {
            return Err(GridError::InvalidFraction {
                name: "buffer floor",
                value: self.buffer_floor_fraction,
            });
        }
        Ok(())
    }
}
