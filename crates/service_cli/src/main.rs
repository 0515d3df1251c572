//! Payoff CLI - Command Line Operations for Strategy Payoff Calculation
//!
//! # Commands
//!
//! - `payoff curve --strategy <file>` - Compute and render a payoff curve
//! - `payoff break-even --strategy <file>` - Report break-even prices
//! - `payoff exit --strategy <file>` - Report realised P&L from exit prices
//! - `payoff check` - Check configuration and workspace wiring
//!
//! Strategy files carry the same JSON descriptor the REST boundary accepts:
//! a strategy type, a parameter bag or explicit legs, and optional window
//! overrides.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod strategy_file;

pub use error::{CliError, Result};

/// Strategy Payoff CLI
#[derive(Parser)]
#[command(name = "payoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Underlying price used for named-strategy defaults
    #[arg(short, long, global = true, default_value_t = 18_000.0)]
    underlying: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render a payoff curve
    Curve {
        /// Path to the strategy descriptor file (JSON)
        #[arg(short, long)]
        strategy: String,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Report break-even prices for a strategy
    BreakEven {
        /// Path to the strategy descriptor file (JSON)
        #[arg(short, long)]
        strategy: String,
    },

    /// Report realised P&L from per-leg exit prices
    Exit {
        /// Path to the strategy descriptor file (JSON)
        #[arg(short, long)]
        strategy: String,
    },

    /// Check system configuration and dependencies
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Curve { strategy, format } => {
            commands::curve::run(&strategy, &format, cli.underlying)
        }
        Commands::BreakEven { strategy } => commands::break_even::run(&strategy, cli.underlying),
        Commands::Exit { strategy } => commands::exit::run(&strategy, cli.underlying),
        Commands::Check => commands::check::run(),
    }
}
