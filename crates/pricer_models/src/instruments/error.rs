//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidExpiry`: Expiry time is negative or not finite
/// - `InvalidBarrier`: Barrier level is non-positive or not finite
/// - `InvalidPayout`: Digital payout is non-positive or not finite
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid barrier level.
    #[error("Invalid barrier: B = {barrier}")]
    InvalidBarrier {
        /// The invalid barrier value
        barrier: f64,
    },

    /// Invalid digital payout.
    #[error("Invalid payout: {payout}")]
    InvalidPayout {
        /// The invalid payout value
        payout: f64,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the parameter error
        message: String,
    },
}

impl InstrumentError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            InstrumentError::InvalidStrike { .. } => "strike",
            InstrumentError::InvalidExpiry { .. } => "expiry",
            InstrumentError::InvalidBarrier { .. } => "barrier",
            InstrumentError::InvalidPayout { .. } => "payout",
            InstrumentError::InvalidParameter { name, .. } => name,
        }
    }
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::invalid_input(err.field(), err.to_string())
    }
}
