//! Payoff curve assembly.
//!
//! Samples the scan window, rounds each sampled price to the configured
//! decimal precision before evaluation (so step accumulation cannot produce
//! duplicate or jittery prices), sums the leg contributions, and rounds the
//! total the same way.

use payoff_core::config::GridConfig;
use payoff_core::math::round_to;
use payoff_core::types::{GridError, Leg, PayoffCurve, PayoffPoint};

use crate::evaluate::strategy_pnl;
use crate::grid::{self, PriceGrid};

/// Builds payoff curves under one scan-window configuration.
///
/// The builder holds no other state: every build is a pure function of the
/// supplied legs, so two builds from identical, unmutated input produce
/// identical curves.
///
/// # Examples
/// ```
/// use payoff_core::types::{Direction, Leg};
/// use payoff_engine::curve::CurveBuilder;
///
/// let builder = CurveBuilder::with_defaults();
/// let curve = builder.build(&[Leg::call(Direction::Long, 18000.0, 300.0, 50.0)]);
///
/// assert!(curve.is_strictly_increasing());
/// assert!(curve.len() <= builder.config().max_points);
/// ```
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    config: GridConfig,
}

impl CurveBuilder {
    /// Creates a builder after validating the configuration.
    ///
    /// # Errors
    /// Returns a [`GridError`] for unusable point counts or non-positive
    /// price/fraction fields.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a builder with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: GridConfig::default(),
        }
    }

    /// The active scan-window configuration.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Builds the curve over a window derived from the legs' anchor prices.
    ///
    /// An empty leg list (or one with no usable prices) yields a single
    /// degenerate point at the fallback price with zero P&L, never an error.
    pub fn build(&self, legs: &[Leg]) -> PayoffCurve {
        self.sample(grid::derive(legs, &self.config), legs)
    }

    /// Builds the curve over an explicit centre-price/percent window.
    ///
    /// Used by interactive callers that steer the window directly; the
    /// sampling, rounding, and ceiling rules are identical to [`Self::build`].
    pub fn build_with_window(
        &self,
        legs: &[Leg],
        centre_price: f64,
        range_percent: f64,
    ) -> PayoffCurve {
        self.sample(
            grid::window(centre_price, range_percent, &self.config),
            legs,
        )
    }

    fn sample(&self, grid: PriceGrid, legs: &[Leg]) -> PayoffCurve {
        let decimals = self.config.price_decimals;
        let mut points: Vec<PayoffPoint> = Vec::with_capacity(grid.point_count());
        for raw_price in grid.prices() {
            let price = round_to(raw_price, decimals);
            if points.last().is_some_and(|p| p.settlement_price >= price) {
                continue;
            }
            let pnl = round_to(strategy_pnl(legs, price), decimals);
            points.push(PayoffPoint::new(price, pnl));
        }
        PayoffCurve::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use payoff_core::types::Direction;

    #[test]
    fn test_empty_legs_degenerate_point() {
        let builder = CurveBuilder::with_defaults();
        let curve = builder.build(&[]);
        assert_eq!(curve.len(), 1);
        assert_relative_eq!(curve.points()[0].settlement_price, 100.0);
        assert_relative_eq!(curve.points()[0].pnl, 0.0);
    }

    #[test]
    fn test_curve_invariants() {
        let builder = CurveBuilder::with_defaults();
        let legs = vec![
            Leg::put(Direction::Long, 17000.0, 80.0, 50.0),
            Leg::call(Direction::Long, 19000.0, 80.0, 50.0),
        ];
        let curve = builder.build(&legs);
        assert!(curve.is_strictly_increasing());
        assert!(curve.len() <= builder.config().max_points);
        assert!(curve.len() > 10);
    }

    #[test]
    fn test_prices_rounded_to_precision() {
        let builder = CurveBuilder::with_defaults();
        let curve = builder.build(&[Leg::call(Direction::Long, 123.45, 2.5, 10.0)]);
        for point in &curve {
            let cents = (point.settlement_price * 100.0).round() / 100.0;
            assert_relative_eq!(point.settlement_price, cents);
        }
    }

    #[test]
    fn test_idempotent_builds() {
        let builder = CurveBuilder::with_defaults();
        let legs = vec![
            Leg::future(Direction::Long, 18000.0, 50.0),
            Leg::call(Direction::Short, 18500.0, 200.0, 50.0),
        ];
        let first = builder.build(&legs);
        let second = builder.build(&legs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_window_build_matches_percent_range() {
        let builder = CurveBuilder::with_defaults();
        let legs = vec![Leg::call(Direction::Long, 18000.0, 300.0, 50.0)];
        let curve = builder.build_with_window(&legs, 18000.0, 30.0);
        let first = curve.points().first().unwrap().settlement_price;
        let last = curve.points().last().unwrap().settlement_price;
        assert!(first <= 18000.0 * 0.70);
        assert!(last >= 18000.0 * 1.30);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GridConfig {
            target_points: 0,
            ..Default::default()
        };
        assert!(CurveBuilder::new(config).is_err());
    }

    #[test]
    fn test_curve_values_match_direct_evaluation() {
        let builder = CurveBuilder::with_defaults();
        let legs = vec![
            Leg::put(Direction::Short, 17500.0, 150.0, 50.0),
            Leg::call(Direction::Short, 18500.0, 150.0, 50.0),
        ];
        let curve = builder.build(&legs);
        for point in &curve {
            let expected = round_to(strategy_pnl(&legs, point.settlement_price), 2);
            assert_relative_eq!(point.pnl, expected);
        }
    }
}
