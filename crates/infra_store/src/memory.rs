//! In-memory strategy store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use crate::record::{NewStrategy, StrategyRecord, StrategyUpdate};
use crate::{StoreError, StrategyStore};

/// Thread-safe in-memory strategy store.
///
/// Ids are assigned from an atomic counter; listing returns records in
/// insertion order. Lock poisoning is unrecoverable here, so the guards
/// unwrap like the rest of the workspace's in-process stores.
#[derive(Debug)]
pub struct InMemoryStrategyStore {
    records: RwLock<HashMap<u64, StrategyRecord>>,
    order: RwLock<Vec<u64>>,
    next_id: AtomicU64,
}

impl InMemoryStrategyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored strategies.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StrategyStore for InMemoryStrategyStore {
    fn create(&self, strategy: NewStrategy) -> StrategyRecord {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        let record = StrategyRecord {
            id,
            name: strategy.name,
            strategy_type: strategy.strategy_type,
            entry_date: strategy.entry_date,
            expiry_date: strategy.expiry_date,
            parameters: strategy.parameters,
            custom_legs: strategy.custom_legs,
            notes: strategy.notes,
            created_at: now,
            updated_at: now,
        };
        self.records.write().unwrap().insert(id, record.clone());
        self.order.write().unwrap().push(id);
        record
    }

    fn list(&self, offset: usize, limit: usize) -> Vec<StrategyRecord> {
        let records = self.records.read().unwrap();
        let order = self.order.read().unwrap();
        order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| records.get(id).cloned())
            .collect()
    }

    fn get(&self, id: u64) -> Result<StrategyRecord, StoreError> {
        self.records
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: u64, update: StrategyUpdate) -> Result<StrategyRecord, StoreError> {
        let mut records = self.records.write().unwrap();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        update.apply(record, Utc::now());
        Ok(record.clone())
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        let removed = self.records.write().unwrap().remove(&id);
        if removed.is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.order.write().unwrap().retain(|stored| *stored != id);
        Ok(())
    }
}
