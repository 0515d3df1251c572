//! Realised P&L from per-leg exit prices.
//!
//! Answers "what did the trader actually realise by closing", as opposed to
//! the hypothetical settlement curve. Exit-price semantics differ by
//! instrument kind and the asymmetry is load-bearing: for futures the exit
//! price is an underlying settlement price, for options it is the option's
//! market price at exit. Completely decoupled from curve construction.

use payoff_core::math::round_to;
use payoff_core::types::{Direction, InstrumentKind, Leg};
use serde::{Deserialize, Serialize};

/// Realised P&L of one closed leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegExitPnl {
    /// Caller-assigned leg identifier.
    pub leg_id: String,
    /// Realised P&L of the leg.
    pub pnl: f64,
}

/// Realised P&L report: per-leg breakdown plus total.
///
/// Only legs with a defined, nonzero exit price appear; partially closed
/// strategies are supported by silently excluding the open legs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitPnlReport {
    /// Per-leg realised P&L, in input order.
    pub legs: Vec<LegExitPnl>,
    /// Sum of the per-leg values.
    pub total: f64,
}

impl ExitPnlReport {
    /// Whether no leg carried a usable exit price.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Computes the realised P&L report for a leg list.
///
/// | kind / direction | formula |
/// |------------------|---------|
/// | Future long      | `(exit − entry) × size` |
/// | Future short     | `(entry − exit) × size` |
/// | Option long      | `(exit − premium) × size` |
/// | Option short     | `(premium − exit) × size` |
///
/// # Examples
/// ```
/// use payoff_core::types::{Direction, Leg};
/// use payoff_engine::exit::realised;
///
/// let legs = vec![
///     Leg::future(Direction::Long, 18000.0, 50.0)
///         .with_id("fut")
///         .with_exit_price(18200.0),
///     Leg::call(Direction::Short, 18500.0, 200.0, 50.0).with_id("call"),
/// ];
/// let report = realised(&legs, 2);
///
/// // The open call is absent from both the breakdown and the total.
/// assert_eq!(report.legs.len(), 1);
/// assert_eq!(report.total, 10_000.0);
/// ```
pub fn realised(legs: &[Leg], price_decimals: u32) -> ExitPnlReport {
    let mut report = ExitPnlReport::default();
    for leg in legs {
        let Some(exit_price) = leg.exit_price.filter(|p| *p != 0.0) else {
            continue;
        };
        let pnl = match leg.kind {
            InstrumentKind::Future => match leg.direction {
                Direction::Long => (exit_price - leg.reference_price) * leg.contract_size,
                Direction::Short => (leg.reference_price - exit_price) * leg.contract_size,
            },
            InstrumentKind::Call | InstrumentKind::Put => match leg.direction {
                Direction::Long => (exit_price - leg.premium) * leg.contract_size,
                Direction::Short => (leg.premium - exit_price) * leg.contract_size,
            },
        };
        let pnl = round_to(pnl, price_decimals);
        report.legs.push(LegExitPnl {
            leg_id: leg.id.clone(),
            pnl,
        });
        report.total += pnl;
    }
    report.total = round_to(report.total, price_decimals);
    report
}
