//! # payoff_core: Foundation Types for Strategy Payoff Calculation
//!
//! ## Layer Role
//!
//! payoff_core is the bottom layer of the workspace, providing:
//! - Strategy leg types: `Leg`, `InstrumentKind`, `Direction` (`types::leg`)
//! - Curve types: `PayoffPoint`, `PayoffCurve` (`types::curve`)
//! - Error types: `GridError` (`types::error`)
//! - Scan-window configuration: `GridConfig` (`config`)
//! - Decimal rounding helpers (`math`)
//!
//! ## Zero Dependency Principle
//!
//! payoff_core has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - serde: Serialisation of legs and curve points
//! - thiserror: Structured configuration errors
//!
//! ## Usage Examples
//!
//! ```rust
//! use payoff_core::types::{Direction, InstrumentKind, Leg};
//! use payoff_core::config::GridConfig;
//!
//! let leg = Leg::call(Direction::Long, 18500.0, 200.0, 50.0);
//! assert_eq!(leg.kind, InstrumentKind::Call);
//! assert_eq!(leg.anchor_price(), Some(18500.0));
//!
//! let config = GridConfig::default();
//! assert!(config.validate().is_ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod math;
pub mod types;
