//! # payoff_strategies: Named Strategies as Leg-Set Constructions
//!
//! Every fixed named strategy (covered call, bull call spread, iron condor,
//! long straddle, protective put, butterfly spread, collar) is modelled
//! purely as a specific leg-set construction from a loosely-typed parameter
//! bag. There is no per-strategy payoff logic anywhere: once the legs are
//! built, the engine treats every strategy identically.
//!
//! ## Usage
//!
//! ```rust
//! use payoff_strategies::{build_legs, ParamBag, StrategyKind};
//!
//! let kind: StrategyKind = "covered-call".parse().unwrap();
//! let legs = build_legs(kind, &ParamBag::default(), 18000.0);
//! assert_eq!(legs.len(), 2);
//! ```

mod kind;
mod params;
mod presets;

pub use kind::{StrategyKind, UnknownStrategy};
pub use params::ParamBag;
pub use presets::build_legs;
