//! Check command implementation
//!
//! Verifies the workspace wiring: configuration validity and a smoke
//! calculation through every layer the CLI touches.

use payoff_core::config::GridConfig;
use payoff_engine::curve::CurveBuilder;
use payoff_strategies::{build_legs, ParamBag, StrategyKind};

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    println!("payoff {}", env!("CARGO_PKG_VERSION"));

    let config = GridConfig::default();
    match config.validate() {
        Ok(()) => println!("  scan window config ... ok"),
        Err(err) => println!("  scan window config ... FAILED: {}", err),
    }

    let builder = CurveBuilder::with_defaults();
    let mut healthy = true;
    for kind in StrategyKind::named() {
        let legs = build_legs(*kind, &ParamBag::default(), 18_000.0);
        let curve = builder.build(&legs);
        let ok = curve.is_strictly_increasing() && curve.len() <= config.max_points;
        healthy &= ok;
        println!(
            "  {:<18} {} legs, {} points ... {}",
            kind.to_string(),
            legs.len(),
            curve.len(),
            if ok { "ok" } else { "FAILED" }
        );
    }

    if healthy {
        println!("All checks passed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_runs_clean() {
        assert!(run().is_ok());
    }
}
