//! Strategy identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A strategy identifier was not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strategy type: {0}")]
pub struct UnknownStrategy(pub String);

/// The fixed named strategies, plus the custom escape hatch.
///
/// Identifiers follow the kebab-case wire vocabulary of the strategy
/// builder front end (`covered-call`, `iron-condor`, ...). Each named
/// variant maps to one leg-set construction in [`crate::build_legs`];
/// `Custom` carries no construction of its own, the caller supplies
/// explicit legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Long futures hedged with a short call.
    CoveredCall,
    /// Long call at a lower strike, short call at a higher strike.
    BullCallSpread,
    /// Short put/call spread pair around the current price.
    IronCondor,
    /// Long call and long put at the same strike.
    LongStraddle,
    /// Long futures insured with a long put.
    ProtectivePut,
    /// Long wings around a doubled short body.
    ButterflySpread,
    /// Long futures fenced by a long put and a short call.
    Collar,
    /// Explicit caller-supplied legs.
    CustomStrategy,
}

impl StrategyKind {
    /// The wire identifier of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::CoveredCall => "covered-call",
            StrategyKind::BullCallSpread => "bull-call-spread",
            StrategyKind::IronCondor => "iron-condor",
            StrategyKind::LongStraddle => "long-straddle",
            StrategyKind::ProtectivePut => "protective-put",
            StrategyKind::ButterflySpread => "butterfly-spread",
            StrategyKind::Collar => "collar",
            StrategyKind::CustomStrategy => "custom-strategy",
        }
    }

    /// All named strategies (excludes `CustomStrategy`).
    pub fn named() -> &'static [StrategyKind] {
        &[
            StrategyKind::CoveredCall,
            StrategyKind::BullCallSpread,
            StrategyKind::IronCondor,
            StrategyKind::LongStraddle,
            StrategyKind::ProtectivePut,
            StrategyKind::ButterflySpread,
            StrategyKind::Collar,
        ]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "covered-call" => Ok(StrategyKind::CoveredCall),
            "bull-call-spread" => Ok(StrategyKind::BullCallSpread),
            "iron-condor" => Ok(StrategyKind::IronCondor),
            "long-straddle" => Ok(StrategyKind::LongStraddle),
            "protective-put" => Ok(StrategyKind::ProtectivePut),
            "butterfly-spread" => Ok(StrategyKind::ButterflySpread),
            "collar" => Ok(StrategyKind::Collar),
            "custom-strategy" => Ok(StrategyKind::CustomStrategy),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}
