//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations, shared by every layer

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure carries enough context to name the offending input.
///
/// # Variants
/// - `InvalidInput`: A field is missing, malformed or out of range
/// - `UnsupportedMethod`: The instrument/method pairing is not legal
/// - `ResourceLimit`: A simulation size exceeds the permitted maximum
/// - `NumericalInstability`: A computation could not be guarded or recovered
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_input("strike", "must be positive");
/// assert_eq!(format!("{}", err), "Invalid input for 'strike': must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Instrument cannot be priced with the requested method.
    #[error("Method '{method}' is not supported for {instrument} instruments")]
    UnsupportedMethod {
        /// Instrument kind
        instrument: String,
        /// Requested method name
        method: String,
    },

    /// Requested simulation size exceeds the permitted maximum.
    #[error("Resource limit exceeded for '{parameter}': {value} (must be in [1, {max}])")]
    ResourceLimit {
        /// Parameter name (paths, steps, fixings)
        parameter: String,
        /// Requested value
        value: usize,
        /// Maximum permitted value
        max: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::ResourceLimit { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}
