//! # Greeks
//!
//! Price and sensitivities for a single instrument.
//!
//! - [`estimate`] returns a [`PriceQuote`]: analytic Greeks for closed-form
//!   vanilla and digital options, bump-and-revalue otherwise
//! - [`BumpConfig`] sets the finite-difference bump widths
//!
//! ## Units
//!
//! | Greek | Unit |
//! |-------|------|
//! | delta | per unit of spot |
//! | gamma | per unit of spot, squared |
//! | vega | per volatility point (0.01) |
//! | theta | per calendar day |
//! | rho | per 1% rate move |
//!
//! Every revaluation reuses the method's seed, so Monte Carlo noise is
//! common to the base and bumped prices and largely cancels.

mod config;
mod estimator;
mod quote;

pub use config::{BumpConfig, BumpConfigBuilder, BumpConfigError, GreeksMode, ONE_DAY};
pub use estimator::{estimate, estimate_with_config};
pub use quote::PriceQuote;

#[cfg(test)]
mod tests;
