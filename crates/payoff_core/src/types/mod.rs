//! Core types for payoff calculation.
//!
//! This module provides:
//! - `Leg`, `InstrumentKind`, `Direction`: strategy leg definitions
//! - `PayoffPoint`, `PayoffCurve`: assembled curve output
//! - `GridError`: configuration error type

mod curve;
mod error;
mod leg;

pub use curve::{PayoffCurve, PayoffPoint};
pub use error::GridError;
pub use leg::{Direction, InstrumentKind, Leg};
