//! Loosely-typed strategy parameter bags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String-keyed parameter bag for named strategies.
///
/// The strategy builder front end sends numeric parameters either as JSON
/// numbers or as numeric strings (`"premium": "200"`); both are accepted.
/// Anything missing or unparseable falls back to the caller's default,
/// matching the permissive posture of the rest of the engine.
///
/// # Examples
/// ```
/// use payoff_strategies::ParamBag;
///
/// let bag: ParamBag = serde_json::from_str(
///     r#"{"callStrike": "18500", "premium": 200}"#
/// ).unwrap();
///
/// assert_eq!(bag.get_or("callStrike", 0.0), 18500.0);
/// assert_eq!(bag.get_or("premium", 0.0), 200.0);
/// assert_eq!(bag.get_or("lotSize", 50.0), 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBag(HashMap<String, Value>);

impl ParamBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a numeric parameter (mainly for tests and the CLI).
    pub fn set(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.0.insert(key.into(), Value::from(value));
        self
    }

    /// Reads a numeric parameter, falling back to `default` when the key is
    /// absent or its value is not a number or numeric string.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }
}

impl From<HashMap<String, Value>> for ParamBag {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}
