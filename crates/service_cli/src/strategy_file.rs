//! Strategy descriptor files.
//!
//! The CLI accepts the same JSON descriptor the REST boundary does, loaded
//! from disk instead of a request body.

use serde::Deserialize;

use payoff_core::types::Leg;
use payoff_strategies::{build_legs, ParamBag, StrategyKind};

use crate::{CliError, Result};

/// A strategy descriptor loaded from disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyFile {
    /// Strategy identifier (`covered-call`, `custom-strategy`, ...)
    pub strategy_type: String,
    /// Named-strategy parameter bag
    #[serde(default)]
    pub parameters: ParamBag,
    /// Explicit legs for a custom strategy
    #[serde(default)]
    pub custom_legs: Vec<Leg>,
    /// Underlying price anchoring defaults and the window override
    #[serde(default)]
    pub underlying_price: Option<f64>,
    /// Percent half-width of an explicit scan window
    #[serde(default)]
    pub price_range_percent: Option<f64>,
}

impl StrategyFile {
    /// Loads and parses a descriptor file.
    pub fn load(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The underlying price to anchor defaults on.
    pub fn underlying_or(&self, default: f64) -> f64 {
        self.underlying_price.unwrap_or(default)
    }

    /// Resolves the descriptor into a leg list.
    pub fn legs(&self, default_underlying: f64) -> Result<Vec<Leg>> {
        let kind: StrategyKind = self.strategy_type.parse()?;
        if kind == StrategyKind::CustomStrategy {
            return Ok(self.custom_legs.clone());
        }
        Ok(build_legs(
            kind,
            &self.parameters,
            self.underlying_or(default_underlying),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_named_strategy() {
        let file = write_file(
            r#"{"strategyType": "covered-call", "parameters": {"premium": "250"}}"#,
        );
        let descriptor = StrategyFile::load(file.path().to_str().unwrap()).unwrap();
        let legs = descriptor.legs(18_000.0).unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[1].premium, 250.0);
    }

    #[test]
    fn test_load_custom_strategy() {
        let file = write_file(
            r#"{
                "strategyType": "custom-strategy",
                "customLegs": [
                    {"kind": "PE", "direction": "BUY", "strike": 17000,
                     "premium": 80, "contractSize": 50}
                ]
            }"#,
        );
        let descriptor = StrategyFile::load(file.path().to_str().unwrap()).unwrap();
        let legs = descriptor.legs(18_000.0).unwrap();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].strike, 17_000.0);
    }

    #[test]
    fn test_missing_file() {
        let err = StrategyFile::load("/nonexistent/strategy.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_unknown_strategy_type() {
        let file = write_file(r#"{"strategyType": "calendar-spread"}"#);
        let descriptor = StrategyFile::load(file.path().to_str().unwrap()).unwrap();
        assert!(matches!(
            descriptor.legs(18_000.0),
            Err(CliError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_file("{not json");
        assert!(matches!(
            StrategyFile::load(file.path().to_str().unwrap()),
            Err(CliError::Parse(_))
        ));
    }
}
