//! # payoff_engine: Payoff Curve Calculation
//!
//! The calculation kernel of the workspace. Every operation here is a
//! stateless, synchronous, pure transform: identical inputs always produce
//! bit-identical outputs, no I/O, no shared mutable state, and worst-case
//! work per call is fixed by the point-count ceiling in
//! [`payoff_core::config::GridConfig`].
//!
//! ## Components
//!
//! - [`grid`]: settlement-price scan-window generation
//! - [`evaluate`]: per-leg intrinsic-value P&L
//! - [`curve`]: curve assembly ([`curve::CurveBuilder`])
//! - [`break_even`]: zero-crossing detection on a built curve
//! - [`exit`]: realised P&L from per-leg exit prices
//!
//! ## Usage
//!
//! ```rust
//! use payoff_core::types::{Direction, Leg};
//! use payoff_engine::{break_even, curve::CurveBuilder};
//!
//! let legs = vec![
//!     Leg::future(Direction::Long, 18000.0, 50.0),
//!     Leg::call(Direction::Short, 18500.0, 200.0, 50.0),
//! ];
//!
//! let builder = CurveBuilder::with_defaults();
//! let curve = builder.build(&legs);
//! assert!(curve.is_strictly_increasing());
//!
//! let crossings = break_even::scan(&curve, builder.config().price_decimals);
//! assert_eq!(crossings.len(), 1);
//! ```

pub mod break_even;
pub mod curve;
pub mod evaluate;
pub mod exit;
pub mod grid;
