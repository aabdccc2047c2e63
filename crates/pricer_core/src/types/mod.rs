//! Core market and error types.
//!
//! This module provides:
//! - `market`: Market state inputs (spot, rate, dividend yield, volatility, skew)
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! - [`MarketState`], [`VOLATILITY_FLOOR`] from `market`
//! - [`PricingError`] from `error`

pub mod error;
pub mod market;

pub use error::PricingError;
pub use market::{MarketState, VOLATILITY_FLOOR};
