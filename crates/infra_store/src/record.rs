//! Saved-strategy records.

use chrono::{DateTime, Utc};
use payoff_core::types::Leg;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved strategy as stored and returned to callers.
///
/// `parameters` holds the named-strategy parameter bag verbatim;
/// `custom_legs` the explicit legs of a custom strategy. Dates are opaque
/// strings exactly as supplied; only the store's own timestamps are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    /// Store-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Strategy identifier (`covered-call`, `custom-strategy`, ...).
    pub strategy_type: String,
    /// Entry date as supplied by the caller.
    pub entry_date: String,
    /// Expiry date as supplied by the caller.
    pub expiry_date: String,
    /// Named-strategy parameter bag.
    pub parameters: Value,
    /// Explicit legs of a custom strategy.
    pub custom_legs: Vec<Leg>,
    /// Free-form user notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategy {
    /// Display name.
    pub name: String,
    /// Strategy identifier.
    pub strategy_type: String,
    /// Entry date, opaque.
    #[serde(default)]
    pub entry_date: String,
    /// Expiry date, opaque.
    #[serde(default)]
    pub expiry_date: String,
    /// Named-strategy parameter bag.
    #[serde(default)]
    pub parameters: Value,
    /// Explicit legs of a custom strategy.
    #[serde(default)]
    pub custom_legs: Vec<Leg>,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyUpdate {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New strategy identifier.
    #[serde(default)]
    pub strategy_type: Option<String>,
    /// New entry date.
    #[serde(default)]
    pub entry_date: Option<String>,
    /// New expiry date.
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// New parameter bag.
    #[serde(default)]
    pub parameters: Option<Value>,
    /// New custom legs.
    #[serde(default)]
    pub custom_legs: Option<Vec<Leg>>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl StrategyUpdate {
    /// Applies this update onto a record, refreshing `updated_at`.
    pub fn apply(self, record: &mut StrategyRecord, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(strategy_type) = self.strategy_type {
            record.strategy_type = strategy_type;
        }
        if let Some(entry_date) = self.entry_date {
            record.entry_date = entry_date;
        }
        if let Some(expiry_date) = self.expiry_date {
            record.expiry_date = expiry_date;
        }
        if let Some(parameters) = self.parameters {
            record.parameters = parameters;
        }
        if let Some(custom_legs) = self.custom_legs {
            record.custom_legs = custom_legs;
        }
        if let Some(notes) = self.notes {
            record.notes = Some(notes);
        }
        record.updated_at = now;
    }
}
