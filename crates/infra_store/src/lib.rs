//! # infra_store: Saved-Strategy Persistence
//!
//! Stores user-configured strategies so they can be reloaded into the
//! builder later. The calculation crates never touch this layer: curves,
//! break-even lists, and exit reports are transient derived data, only the
//! strategy definition itself is kept.
//!
//! The default implementation is an in-memory map behind `RwLock`, suitable
//! for a single-process deployment and for tests; the [`StrategyStore`]
//! trait is the seam a database-backed implementation would plug into.

mod memory;
mod record;

pub use memory::InMemoryStrategyStore;
pub use record::{NewStrategy, StrategyRecord, StrategyUpdate};

use thiserror::Error;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No strategy with the requested id exists.
    #[error("Strategy {0} not found")]
    NotFound(u64),
}

/// CRUD operations over saved strategies.
///
/// Implementations must be safe to share across request handlers.
pub trait StrategyStore: Send + Sync {
    /// Persists a new strategy and returns it with its assigned id.
    fn create(&self, strategy: NewStrategy) -> StrategyRecord;

    /// Lists saved strategies in insertion order, with pagination.
    fn list(&self, offset: usize, limit: usize) -> Vec<StrategyRecord>;

    /// Fetches one strategy by id.
    fn get(&self, id: u64) -> Result<StrategyRecord, StoreError>;

    /// Applies a partial update and returns the updated record.
    fn update(&self, id: u64, update: StrategyUpdate) -> Result<StrategyRecord, StoreError>;

    /// Deletes a strategy by id.
    fn delete(&self, id: u64) -> Result<(), StoreError>;
}
