//! Per-leg intrinsic-value P&L.
//!
//! Pure functions, no time value: an option is worth exactly its intrinsic
//! value at the hypothetical settlement price, a future is linear against its
//! entry price. Missing numeric fields are zero and contribute nothing;
//! nothing here can fail. Units are caller-defined.

use payoff_core::types::{Direction, InstrumentKind, Leg};

/// Signed P&L contribution of one leg at a settlement price.
///
/// | kind   | formula |
/// |--------|---------|
/// | Future | `(S − entry) × size`, negated for short |
/// | Call   | long `(max(0, S − K) − premium) × size`; short `(premium − max(0, S − K)) × size` |
/// | Put    | long `(max(0, K − S) − premium) × size`; short `(premium − max(0, K − S)) × size` |
///
/// # Examples
/// ```
/// use payoff_core::types::{Direction, Leg};
/// use payoff_engine::evaluate::leg_pnl;
///
/// let short_call = Leg::call(Direction::Short, 18500.0, 200.0, 50.0);
/// assert_eq!(leg_pnl(&short_call, 18000.0), 10_000.0);
/// assert_eq!(leg_pnl(&short_call, 19000.0), -15_000.0);
/// ```
#[inline]
pub fn leg_pnl(leg: &Leg, settlement_price: f64) -> f64 {
    match leg.kind {
        InstrumentKind::Future => {
            (settlement_price - leg.reference_price) * leg.contract_size * leg.direction.sign()
        }
        InstrumentKind::Call | InstrumentKind::Put => {
            let intrinsic = match leg.kind {
                InstrumentKind::Call => (settlement_price - leg.strike).max(0.0),
                _ => (leg.strike - settlement_price).max(0.0),
            };
            let per_unit = match leg.direction {
                Direction::Long => intrinsic - leg.premium,
                Direction::Short => leg.premium - intrinsic,
            };
            per_unit * leg.contract_size
        }
    }
}

/// Total strategy P&L: the sum of every leg's contribution.
#[inline]
pub fn strategy_pnl(legs: &[Leg], settlement_price: f64) -> f64 {
    legs.iter().map(|leg| leg_pnl(leg, settlement_price)).sum()
}
