//! Exit command implementation
//!
//! Reports realised P&L for the legs of a strategy that carry exit prices.

use payoff_engine::exit;

use crate::strategy_file::StrategyFile;
use crate::Result;

/// Run the exit command
pub fn run(strategy_path: &str, default_underlying: f64) -> Result<()> {
    let descriptor = StrategyFile::load(strategy_path)?;
    let legs = descriptor.legs(default_underlying)?;
    let report = exit::realised(&legs, 2);

    if report.is_empty() {
        println!("No leg carries an exit price; nothing realised yet");
        return Ok(());
    }

    println!("┌──────────────────────┬──────────────┐");
    println!("│ Leg                  │ Realised P&L │");
    println!("├──────────────────────┼──────────────┤");
    for leg in &report.legs {
        let id = if leg.leg_id.is_empty() {
            "(unnamed)"
        } else {
            leg.leg_id.as_str()
        };
        println!("│ {:<20} │ {:>12.2} │", id, leg.pnl);
    }
    println!("├──────────────────────┼──────────────┤");
    println!("│ {:<20} │ {:>12.2} │", "Total", report.total);
    println!("└──────────────────────┴──────────────┘");

    Ok(())
}
