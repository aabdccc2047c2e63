//! # Monte Carlo Engines
//!
//! Seeded path simulation for the path-dependent contracts.
//!
//! ## Overview
//!
//! - [`barrier`]: single barrier options with discrete or Brownian-bridge
//!   monitoring
//! - [`asian`]: arithmetic average-price options
//! - [`paths`]: log-normal step under the risk-neutral measure
//! - [`config`]: resource limits applied before any simulation starts
//!
//! Each engine builds its own [`PricerRng`](crate::rng::PricerRng) from the
//! method seed, so a call is a pure function of its inputs.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::MarketState;
//! use pricer_models::instruments::OptionType;
//! use pricer_pricing::mc::price_arithmetic_asian;
//!
//! let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
//! let estimate =
//!     price_arithmetic_asian(&market, OptionType::Call, 100.0, 1.0, 10_000, 12, 42).unwrap();
//! assert!(estimate.price > 0.0);
//! assert!(estimate.std_error > 0.0);
//! ```

pub mod asian;
pub mod barrier;
pub mod config;
mod estimate;
pub mod paths;

pub use asian::price_arithmetic_asian;
pub use barrier::{price_barrier, BarrierTerms, Monitoring};
pub use config::{validate_limits, MAX_FIXINGS, MAX_PATHS, MAX_STEPS};
pub use estimate::{McEstimate, PayoffStats};
pub use paths::GbmStepper;
