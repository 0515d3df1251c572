//! Payoff curve output types.

use serde::{Deserialize, Serialize};

/// One sampled point of a payoff curve.
///
/// Immutable pair of hypothetical settlement price and the total strategy
/// P&L at that price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPoint {
    /// Hypothetical settlement price of the underlying (x-axis).
    pub settlement_price: f64,
    /// Total strategy P&L at that settlement price (y-axis).
    pub pnl: f64,
}

impl PayoffPoint {
    /// Creates a new payoff point.
    #[inline]
    pub fn new(settlement_price: f64, pnl: f64) -> Self {
        Self {
            settlement_price,
            pnl,
        }
    }
}

/// An ordered payoff curve.
///
/// Invariants maintained by the builder:
/// - settlement prices strictly increase
/// - no duplicate prices
/// - length bounded by the configured point-count ceiling
///
/// # Examples
/// ```
/// use payoff_core::types::{PayoffCurve, PayoffPoint};
///
/// let curve = PayoffCurve::new(vec![
///     PayoffPoint::new(100.0, -5.0),
///     PayoffPoint::new(110.0, 5.0),
/// ]);
/// assert_eq!(curve.len(), 2);
/// assert!(curve.is_strictly_increasing());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoffCurve {
    points: Vec<PayoffPoint>,
}

impl PayoffCurve {
    /// Creates a curve from pre-ordered points.
    pub fn new(points: Vec<PayoffPoint>) -> Self {
        Self { points }
    }

    /// The sampled points in ascending settlement-price order.
    #[inline]
    pub fn points(&self) -> &[PayoffPoint] {
        &self.points
    }

    /// Number of sampled points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the sampled points.
    pub fn iter(&self) -> std::slice::Iter<'_, PayoffPoint> {
        self.points.iter()
    }

    /// Checks the strictly-increasing settlement-price invariant.
    pub fn is_strictly_increasing(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].settlement_price < w[1].settlement_price)
    }

    /// Largest P&L on the curve, if any points exist.
    pub fn max_pnl(&self) -> Option<f64> {
        self.points.iter().map(|p| p.pnl).fold(None, |acc, pnl| {
            Some(acc.map_or(pnl, |m: f64| m.max(pnl)))
        })
    }

    /// Smallest P&L on the curve, if any points exist.
    pub fn min_pnl(&self) -> Option<f64> {
        self.points.iter().map(|p| p.pnl).fold(None, |acc, pnl| {
            Some(acc.map_or(pnl, |m: f64| m.min(pnl)))
        })
    }
}

impl<'a> IntoIterator for &'a PayoffCurve {
    type Item = &'a PayoffPoint;
    type IntoIter = std::slice::Iter<'a, PayoffPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
