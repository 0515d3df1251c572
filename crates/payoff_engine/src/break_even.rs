//! Break-even detection on a built payoff curve.
//!
//! Walks adjacent point pairs; wherever the P&L changes sign (or touches
//! zero) the crossing price is linearly interpolated from the segment's two
//! endpoints. A break-even is therefore not necessarily a sampled point.

use payoff_core::math::round_to;
use payoff_core::types::PayoffCurve;

/// Finds the zero-crossing settlement prices of a curve, ascending.
///
/// Zero-slope segments (equal P&L at both ends) are skipped: a flat
/// stretch lying exactly on zero is not a crossing. Crossings from adjacent
/// segments that land on the same rounded price are de-duplicated.
///
/// Returns an empty list when the curve never touches zero; multiple
/// crossings are normal (two for a straddle, two for a condor).
///
/// # Examples
/// ```
/// use payoff_core::types::{PayoffCurve, PayoffPoint};
/// use payoff_engine::break_even::scan;
///
/// let curve = PayoffCurve::new(vec![
///     PayoffPoint::new(100.0, -50.0),
///     PayoffPoint::new(110.0, 50.0),
/// ]);
/// assert_eq!(scan(&curve, 2), vec![105.0]);
/// ```
pub fn scan(curve: &PayoffCurve, price_decimals: u32) -> Vec<f64> {
    let mut crossings = Vec::new();
    for pair in curve.points().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.pnl == b.pnl {
            continue;
        }
        let spans_zero = (a.pnl <= 0.0 && b.pnl >= 0.0) || (a.pnl >= 0.0 && b.pnl <= 0.0);
        if !spans_zero {
            continue;
        }
        let fraction = -a.pnl / (b.pnl - a.pnl);
        let price = a.settlement_price + fraction * (b.settlement_price - a.settlement_price);
        let price = round_to(price, price_decimals);
        if crossings.last() != Some(&price) {
            crossings.push(price);
        }
    }
    crossings
}
