//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI operation errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse strategy file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownStrategy(#[from] payoff_strategies::UnknownStrategy),
}
