//! Curve command implementation
//!
//! Computes a payoff curve from a strategy descriptor file and renders it
//! as a table, JSON, or CSV.

use tracing::info;

use payoff_core::types::PayoffCurve;
use payoff_engine::curve::CurveBuilder;

use crate::strategy_file::StrategyFile;
use crate::{CliError, Result};

/// Run the curve command
pub fn run(strategy_path: &str, format: &str, default_underlying: f64) -> Result<()> {
    let descriptor = StrategyFile::load(strategy_path)?;
    let legs = descriptor.legs(default_underlying)?;
    info!("Loaded {} with {} legs", strategy_path, legs.len());

    let builder = CurveBuilder::with_defaults();
    let curve = match descriptor.price_range_percent {
        Some(percent) => builder.build_with_window(
            &legs,
            descriptor.underlying_or(default_underlying),
            percent,
        ),
        None => builder.build(&legs),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&curve)?),
        "csv" => print!("{}", render_csv(&curve)),
        "table" => print!("{}", render_table(&curve)),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    Ok(())
}

fn render_csv(curve: &PayoffCurve) -> String {
    let mut out = String::from("price,pnl\n");
    for point in curve {
        out.push_str(&format!("{},{}\n", point.settlement_price, point.pnl));
    }
    out
}

fn render_table(curve: &PayoffCurve) -> String {
    let mut out = String::new();
    out.push_str("┌──────────────┬──────────────┐\n");
    out.push_str("│ Price        │ P&L          │\n");
    out.push_str("├──────────────┼──────────────┤\n");
    for point in curve {
        out.push_str(&format!(
            "│ {:>12.2} │ {:>12.2} │\n",
            point.settlement_price, point.pnl
        ));
    }
    out.push_str("└──────────────┴──────────────┘\n");
    out
}
