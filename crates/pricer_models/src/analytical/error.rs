//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive spot price
/// - `NumericalInstability`: Computation encountered numerical issues
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive for Black-Scholes).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { .. } => {
                PricingError::invalid_input("volatility", err.to_string())
            }
            AnalyticalError::InvalidSpot { .. } => {
                PricingError::invalid_input("spot", err.to_string())
            }
            AnalyticalError::NumericalInstability { message } => {
                PricingError::NumericalInstability(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::InvalidVolatility { volatility: 0.0 }.into();
        assert_eq!(pricing_err.field(), Some("volatility"));
    }

    #[test]
    fn test_invalid_spot_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::InvalidSpot { spot: -50.0 }.into();
        assert_eq!(pricing_err.field(), Some("spot"));
    }

    #[test]
    fn test_numerical_instability_to_pricing_error() {
        let err = AnalyticalError::NumericalInstability {
            message: "Overflow".to_string(),
        };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert_eq!(msg, "Overflow"),
            other => panic!("Expected NumericalInstability, got {other:?}"),
        }
    }
}
