//! CLI error types

use std::path::PathBuf;

use pricer_core::types::PricingError;
use pricer_risk::portfolio::PortfolioError;
use pricer_strategy::StrategyError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// File does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Request file is not valid JSON for the command
    #[error("Invalid request {path}: {source}")]
    Request {
        /// Request path
        path: PathBuf,
        /// Parse error with line and column
        #[source]
        source: serde_json::Error,
    },

    /// Response could not be serialised
    #[error("Failed to serialise response: {0}")]
    Response(#[source] serde_json::Error),

    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Single-instrument pricing failed
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Portfolio valuation failed
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// Strategy search failed
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
