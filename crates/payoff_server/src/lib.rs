//! REST API server for the strategy payoff engine
//!
//! Exposes payoff curve calculation, break-even analysis, realised-P&L
//! reporting, and saved-strategy CRUD over HTTP. All calculation is
//! delegated to the payoff crates; this layer only translates strategy
//! descriptors into leg lists and wire types.

pub mod config;
pub mod routes;
pub mod server;

// Re-export payoff dependencies for integration
pub use payoff_core;
pub use payoff_engine;
pub use payoff_strategies;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
