//! Strategy leg definitions.
//!
//! A leg is one option or futures position within a multi-position strategy.
//! Legs are deliberately permissive: numeric fields that the caller leaves out
//! deserialise to zero rather than failing, so a partially-configured leg
//! evaluates to a zero contribution instead of raising an error. Required-field
//! validation belongs to the boundary layer.

use serde::{Deserialize, Serialize};

/// Kind of instrument a leg trades.
///
/// # Variants
/// - `Call`: call option, intrinsic value max(S - K, 0)
/// - `Put`: put option, intrinsic value max(K - S, 0)
/// - `Future`: futures position, linear in the settlement price
///
/// The wire format uses the upper-case identifiers `CALL`, `PUT` and
/// `FUTURE`; the legacy aliases `CE`, `PE` and `FUT` are also accepted.
///
/// # Examples
/// ```
/// use payoff_core::types::InstrumentKind;
///
/// let kind: InstrumentKind = serde_json::from_str("\"CE\"").unwrap();
/// assert_eq!(kind, InstrumentKind::Call);
/// assert!(kind.is_option());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    /// Call option: intrinsic value max(S - K, 0)
    #[serde(alias = "CE")]
    Call,
    /// Put option: intrinsic value max(K - S, 0)
    #[serde(alias = "PE")]
    Put,
    /// Futures position: linear payoff against the entry price
    #[serde(alias = "FUT")]
    Future,
}

impl InstrumentKind {
    /// Returns whether this kind is an option (Call or Put).
    #[inline]
    pub fn is_option(&self) -> bool {
        matches!(self, InstrumentKind::Call | InstrumentKind::Put)
    }
}

/// Direction of a leg.
///
/// The wire format uses `LONG`/`SHORT`; the legacy aliases `BUY`/`SELL`
/// are also accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Bought position
    #[serde(alias = "BUY")]
    Long,
    /// Sold position
    #[serde(alias = "SELL")]
    Short,
}

impl Direction {
    /// Sign applied to a linear payoff: +1 for long, -1 for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

/// One option or futures position within a strategy.
///
/// Field semantics by kind:
/// - `strike` and `premium` apply to `Call`/`Put` legs only
/// - `reference_price` (the entry price) applies to `Future` legs only
/// - `exit_price` is the underlying settlement price at close for futures,
///   but the option's market price at close for options; the two meanings
///   must never be collapsed into one
/// - `exit_date` is opaque pass-through data, never read by any calculation
///
/// Missing numeric fields default to zero and contribute nothing to the
/// payoff; no calculation on a `Leg` ever fails.
///
/// # Examples
/// ```
/// use payoff_core::types::{Direction, Leg};
///
/// let short_call = Leg::call(Direction::Short, 18500.0, 200.0, 50.0);
/// let long_future = Leg::future(Direction::Long, 18000.0, 50.0);
///
/// assert_eq!(short_call.anchor_price(), Some(18500.0));
/// assert_eq!(long_future.anchor_price(), Some(18000.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Caller-assigned identifier, echoed in per-leg reports.
    #[serde(default)]
    pub id: String,

    /// Instrument kind.
    pub kind: InstrumentKind,

    /// Position direction.
    pub direction: Direction,

    /// Strike price (options only).
    #[serde(default)]
    pub strike: f64,

    /// Entry price (futures only).
    #[serde(default)]
    pub reference_price: f64,

    /// Contract or lot size multiplier.
    #[serde(default)]
    pub contract_size: f64,

    /// Premium paid (long) or received (short) per unit (options only).
    #[serde(default)]
    pub premium: f64,

    /// Price at which the leg was closed, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<f64>,

    /// Date the leg was closed. Opaque; never read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
}

impl Leg {
    /// Creates a call option leg.
    pub fn call(direction: Direction, strike: f64, premium: f64, contract_size: f64) -> Self {
        Self {
            id: String::new(),
            kind: InstrumentKind::Call,
            direction,
            strike,
            reference_price: 0.0,
            contract_size,
            premium,
            exit_price: None,
            exit_date: None,
        }
    }

    /// Creates a put option leg.
    pub fn put(direction: Direction, strike: f64, premium: f64, contract_size: f64) -> Self {
        Self {
            kind: InstrumentKind::Put,
            ..Self::call(direction, strike, premium, contract_size)
        }
    }

    /// Creates a futures leg.
    pub fn future(direction: Direction, reference_price: f64, contract_size: f64) -> Self {
        Self {
            id: String::new(),
            kind: InstrumentKind::Future,
            direction,
            strike: 0.0,
            reference_price,
            contract_size,
            premium: 0.0,
            exit_price: None,
            exit_date: None,
        }
    }

    /// Sets the caller-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the exit price.
    pub fn with_exit_price(mut self, exit_price: f64) -> Self {
        self.exit_price = Some(exit_price);
        self
    }

    /// The price this leg anchors the scan window to, if it has one.
    ///
    /// Options anchor at their strike, futures at their entry price.
    /// Non-positive values yield `None` so a blank leg never distorts the
    /// window.
    #[inline]
    pub fn anchor_price(&self) -> Option<f64> {
        let anchor = match self.kind {
            InstrumentKind::Call | InstrumentKind::Put => self.strike,
            InstrumentKind::Future => self.reference_price,
        };
        (anchor > 0.0).then_some(anchor)
    }
}
