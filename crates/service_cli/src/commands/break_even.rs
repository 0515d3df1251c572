//! Break-even command implementation

use tracing::info;

use payoff_engine::break_even;
use payoff_engine::curve::CurveBuilder;

use crate::strategy_file::StrategyFile;
use crate::Result;

/// Run the break-even command
pub fn run(strategy_path: &str, default_underlying: f64) -> Result<()> {
    let descriptor = StrategyFile::load(strategy_path)?;
    let legs = descriptor.legs(default_underlying)?;

    let builder = CurveBuilder::with_defaults();
    let curve = match descriptor.price_range_percent {
        Some(percent) => builder.build_with_window(
            &legs,
            descriptor.underlying_or(default_underlying),
            percent,
        ),
        None => builder.build(&legs),
    };
    let crossings = break_even::scan(&curve, builder.config().price_decimals);

    info!("Scanned {} curve points", curve.len());

    if crossings.is_empty() {
        println!("No break-even within the scanned window");
    } else {
        for (i, price) in crossings.iter().enumerate() {
            println!("Break-even {}: {:.2}", i + 1, price);
        }
    }

    Ok(())
}
