//! Leg-set constructions for the named strategies.
//!
//! Parameter keys and defaults follow the strategy builder's wire format;
//! defaults are derived from the supplied underlying price so a bare request
//! still produces a sensible strategy around the current market level.

use payoff_core::types::{Direction, Leg};

use crate::{ParamBag, StrategyKind};

/// Builds the leg list for a strategy.
///
/// `CustomStrategy` has no construction of its own and yields an empty
/// list; callers supply explicit legs for it.
///
/// # Examples
/// ```
/// use payoff_strategies::{build_legs, ParamBag, StrategyKind};
///
/// let legs = build_legs(StrategyKind::IronCondor, &ParamBag::default(), 18000.0);
/// assert_eq!(legs.len(), 4);
/// ```
pub fn build_legs(kind: StrategyKind, params: &ParamBag, underlying_price: f64) -> Vec<Leg> {
    match kind {
        StrategyKind::CoveredCall => covered_call(params, underlying_price),
        StrategyKind::BullCallSpread => bull_call_spread(params, underlying_price),
        StrategyKind::IronCondor => iron_condor(params, underlying_price),
        StrategyKind::LongStraddle => long_straddle(params, underlying_price),
        StrategyKind::ProtectivePut => protective_put(params, underlying_price),
        StrategyKind::ButterflySpread => butterfly_spread(params, underlying_price),
        StrategyKind::Collar => collar(params, underlying_price),
        StrategyKind::CustomStrategy => Vec::new(),
    }
}

/// Long futures, short call above the market.
fn covered_call(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let futures_price = params.get_or("futuresPrice", underlying);
    let call_strike = params.get_or("callStrike", underlying + 500.0);
    let premium = params.get_or("premium", 200.0);
    let futures_lot = params.get_or("futuresLotSize", 50.0);
    let call_lot = params.get_or("callLotSize", 50.0);

    vec![
        Leg::future(Direction::Long, futures_price, futures_lot).with_id("futures"),
        Leg::call(Direction::Short, call_strike, premium, call_lot).with_id("short-call"),
    ]
}

/// Long call at the lower strike, short call at the higher strike.
fn bull_call_spread(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let long_strike = params.get_or("longCallStrike", underlying);
    let short_strike = params.get_or("shortCallStrike", underlying + 1000.0);
    let long_premium = params.get_or("longCallPremium", 300.0);
    let short_premium = params.get_or("shortCallPremium", 150.0);
    let lot = params.get_or("lotSize", 50.0);

    vec![
        Leg::call(Direction::Long, long_strike, long_premium, lot).with_id("long-call"),
        Leg::call(Direction::Short, short_strike, short_premium, lot).with_id("short-call"),
    ]
}

/// Short put/call spread pair around the market.
///
/// The wire format carries one aggregate `netPremium` rather than per-leg
/// premiums; it is split across the two short legs so the leg set carries
/// exactly the strategy's net credit.
fn iron_condor(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let put_buy = params.get_or("putBuyStrike", underlying - 1000.0);
    let put_sell = params.get_or("putSellStrike", underlying - 500.0);
    let call_sell = params.get_or("callSellStrike", underlying + 500.0);
    let call_buy = params.get_or("callBuyStrike", underlying + 1000.0);
    let net_premium = params.get_or("netPremium", 100.0);
    let lot = params.get_or("lotSize", 50.0);

    vec![
        Leg::put(Direction::Long, put_buy, 0.0, lot).with_id("long-put"),
        Leg::put(Direction::Short, put_sell, net_premium / 2.0, lot).with_id("short-put"),
        Leg::call(Direction::Short, call_sell, net_premium / 2.0, lot).with_id("short-call"),
        Leg::call(Direction::Long, call_buy, 0.0, lot).with_id("long-call"),
    ]
}

/// Long call and long put at the same strike.
fn long_straddle(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let strike = params.get_or("strike", underlying);
    let call_premium = params.get_or("callPremium", 300.0);
    let put_premium = params.get_or("putPremium", 300.0);
    let lot = params.get_or("lotSize", 50.0);

    vec![
        Leg::call(Direction::Long, strike, call_premium, lot).with_id("long-call"),
        Leg::put(Direction::Long, strike, put_premium, lot).with_id("long-put"),
    ]
}

/// Long futures insured with a long put below the market.
fn protective_put(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let entry_price = params.get_or("stockPrice", underlying);
    let put_strike = params.get_or("putStrike", underlying - 500.0);
    let put_premium = params.get_or("putPremium", 200.0);
    let lot = params.get_or("lotSize", 50.0);

    vec![
        Leg::future(Direction::Long, entry_price, lot).with_id("position"),
        Leg::put(Direction::Long, put_strike, put_premium, lot).with_id("long-put"),
    ]
}

/// Long wings around a doubled short body, all calls.
fn butterfly_spread(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let lower = params.get_or("lowerStrike", underlying - 500.0);
    let middle = params.get_or("middleStrike", underlying);
    let upper = params.get_or("upperStrike", underlying + 500.0);
    let lower_premium = params.get_or("lowerPremium", 300.0);
    let middle_premium = params.get_or("middlePremium", 200.0);
    let upper_premium = params.get_or("upperPremium", 100.0);
    let lot = params.get_or("lotSize", 50.0);

    vec![
        Leg::call(Direction::Long, lower, lower_premium, lot).with_id("lower-call"),
        // The body is sold twice; one leg at double size carries both.
        Leg::call(Direction::Short, middle, middle_premium, 2.0 * lot).with_id("body"),
        Leg::call(Direction::Long, upper, upper_premium, lot).with_id("upper-call"),
    ]
}

/// Long futures fenced by a long put below and a short call above.
fn collar(params: &ParamBag, underlying: f64) -> Vec<Leg> {
    let futures_price = params.get_or("futuresPrice", underlying);
    let put_strike = params.get_or("putStrike", underlying - 500.0);
    let put_premium = params.get_or("putPremium", 200.0);
    let call_strike = params.get_or("callStrike", underlying + 500.0);
    let call_premium = params.get_or("callPremium", 200.0);
    let lot = params.get_or("lotSize", 50.0);

    vec![
        Leg::future(Direction::Long, futures_price, lot).with_id("futures"),
        Leg::put(Direction::Long, put_strike, put_premium, lot).with_id("long-put"),
        Leg::call(Direction::Short, call_strike, call_premium, lot).with_id("short-call"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use payoff_engine::evaluate::strategy_pnl;

    const UNDERLYING: f64 = 18_000.0;

    #[test]
    fn test_covered_call_defaults() {
        let legs = build_legs(StrategyKind::CoveredCall, &ParamBag::default(), UNDERLYING);
        assert_eq!(legs.len(), 2);
        // Keep the premium below the strike, give back gains above it.
        assert_relative_eq!(strategy_pnl(&legs, 18_000.0), 10_000.0);
        assert_relative_eq!(strategy_pnl(&legs, 18_500.0), 35_000.0);
        assert_relative_eq!(strategy_pnl(&legs, 19_000.0), 35_000.0);
    }

    #[test]
    fn test_covered_call_explicit_params() {
        let mut params = ParamBag::new();
        params
            .set("futuresPrice", 18_100.0)
            .set("callStrike", 18_600.0)
            .set("premium", 250.0)
            .set("futuresLotSize", 25.0)
            .set("callLotSize", 25.0);
        let legs = build_legs(StrategyKind::CoveredCall, &params, UNDERLYING);
        assert_relative_eq!(strategy_pnl(&legs, 18_100.0), 250.0 * 25.0);
    }

    #[test]
    fn test_bull_call_spread_caps_both_sides() {
        let legs = build_legs(
            StrategyKind::BullCallSpread,
            &ParamBag::default(),
            UNDERLYING,
        );
        // Maximum loss below both strikes is the net debit.
        assert_relative_eq!(strategy_pnl(&legs, 17_000.0), -(300.0 - 150.0) * 50.0);
        // Maximum gain above both strikes is the spread minus the debit.
        assert_relative_eq!(strategy_pnl(&legs, 20_000.0), (1000.0 - 150.0) * 50.0);
    }

    #[test]
    fn test_iron_condor_matches_net_premium_plateau() {
        let legs = build_legs(StrategyKind::IronCondor, &ParamBag::default(), UNDERLYING);
        assert_eq!(legs.len(), 4);
        // Inside the short strikes the whole net premium is kept.
        assert_relative_eq!(strategy_pnl(&legs, 18_000.0), 100.0 * 50.0);
        // Breaching a short strike erodes it one-for-one.
        assert_relative_eq!(strategy_pnl(&legs, 18_600.0), (100.0 - 100.0) * 50.0);
        // Beyond the wings the loss is capped by the long options.
        assert_relative_eq!(strategy_pnl(&legs, 19_500.0), (100.0 - 500.0) * 50.0);
        assert_relative_eq!(strategy_pnl(&legs, 16_000.0), (100.0 - 500.0) * 50.0);
    }

    #[test]
    fn test_long_straddle_symmetric_loss_at_strike() {
        let legs = build_legs(StrategyKind::LongStraddle, &ParamBag::default(), UNDERLYING);
        assert_relative_eq!(strategy_pnl(&legs, 18_000.0), -600.0 * 50.0);
        assert_relative_eq!(strategy_pnl(&legs, 19_000.0), (1000.0 - 600.0) * 50.0);
        assert_relative_eq!(strategy_pnl(&legs, 17_000.0), (1000.0 - 600.0) * 50.0);
    }

    #[test]
    fn test_protective_put_floors_the_downside() {
        let legs = build_legs(
            StrategyKind::ProtectivePut,
            &ParamBag::default(),
            UNDERLYING,
        );
        // Below the put strike the loss stops at strike - entry - premium.
        let floor = ((17_500.0 - 18_000.0) - 200.0) * 50.0;
        assert_relative_eq!(strategy_pnl(&legs, 16_000.0), floor);
        assert_relative_eq!(strategy_pnl(&legs, 15_000.0), floor);
        // Upside stays open, net of the premium.
        assert_relative_eq!(strategy_pnl(&legs, 19_000.0), (1000.0 - 200.0) * 50.0);
    }

    #[test]
    fn test_butterfly_peak_at_middle_strike() {
        let legs = build_legs(
            StrategyKind::ButterflySpread,
            &ParamBag::default(),
            UNDERLYING,
        );
        assert_eq!(legs.len(), 3);
        let body = legs.iter().find(|l| l.id == "body").unwrap();
        assert_relative_eq!(body.contract_size, 100.0);

        // Net debit 300 + 100 - 2*200 = 0 at the defaults.
        assert_relative_eq!(strategy_pnl(&legs, 17_000.0), 0.0);
        assert_relative_eq!(strategy_pnl(&legs, 19_000.0), 0.0);
        // Peak at the middle: lower wing is 500 in the money.
        assert_relative_eq!(strategy_pnl(&legs, 18_000.0), 500.0 * 50.0);
    }

    #[test]
    fn test_collar_fenced_both_sides() {
        let legs = build_legs(StrategyKind::Collar, &ParamBag::default(), UNDERLYING);
        assert_eq!(legs.len(), 3);
        // Premiums offset at the defaults; downside floored by the put.
        assert_relative_eq!(strategy_pnl(&legs, 16_000.0), -500.0 * 50.0);
        // Upside capped by the short call.
        assert_relative_eq!(strategy_pnl(&legs, 20_000.0), 500.0 * 50.0);
    }

    #[test]
    fn test_custom_strategy_builds_nothing() {
        assert!(build_legs(StrategyKind::CustomStrategy, &ParamBag::default(), UNDERLYING)
            .is_empty());
    }
}
