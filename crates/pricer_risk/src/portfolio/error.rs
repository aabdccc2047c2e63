//! Portfolio error types.
//!
//! This module provides structured error types for portfolio operations
//! using `thiserror` for derivation.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::ids::{GroupId, LegId};

/// Errors that can occur during portfolio operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    /// A leg could not be priced; the whole valuation is rejected.
    #[error("Leg '{leg_id}' failed to price: {source}")]
    LegPricing {
        /// Offending leg
        leg_id: LegId,
        /// Underlying pricing error
        #[source]
        source: PricingError,
    },

    /// A group lists a leg id that is not in the portfolio.
    #[error("Group '{group}' references unknown leg '{leg_id}'")]
    UnknownLeg {
        /// Group holding the dangling reference
        group: GroupId,
        /// Missing leg id
        leg_id: LegId,
    },

    /// A scenario axis is empty, non-finite or duplicated.
    #[error("Invalid scenario axis: {0}")]
    InvalidAxis(String),

    /// Risk configuration out of range.
    #[error("Invalid risk configuration: {0}")]
    InvalidConfig(String),
}

impl PortfolioError {
    /// Leg pricing failure constructor for `map_err`.
    pub fn leg(leg_id: &LegId) -> impl FnOnce(PricingError) -> Self + '_ {
        move |source| Self::LegPricing {
            leg_id: leg_id.clone(),
            source,
        }
    }
}
