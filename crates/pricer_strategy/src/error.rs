//! Strategy search error types.

use pricer_core::types::PricingError;
use pricer_risk::portfolio::PortfolioError;
use thiserror::Error;

/// Errors that can occur while generating strategy candidates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    /// Market view is malformed or self-contradictory.
    #[error("Invalid market view: {0}")]
    InvalidView(String),

    /// Generation parameters are out of range.
    #[error("Invalid generation parameters: {0}")]
    InvalidGeneration(String),

    /// Constraints are out of range.
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    /// Market state failed validation.
    #[error("Invalid market state: {0}")]
    Market(#[from] PricingError),

    /// A candidate portfolio could not be valued.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// The background search ended without delivering a result.
    #[error("Recommendation channel closed before a result was delivered")]
    ChannelClosed,
}
