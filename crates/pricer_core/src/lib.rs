//! # pricer_core: Foundation Types for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - Market inputs: [`MarketState`](types::MarketState) with volatility flooring and bump helpers
//! - Error types: [`PricingError`](types::PricingError) shared by every pricing layer
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::MarketState;
//!
//! let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
//! assert!(market.validate().is_ok());
//!
//! // Bumped copies leave the original untouched
//! let bumped = market.with_spot(101.0);
//! assert_eq!(market.spot, 100.0);
//! assert_eq!(bumped.spot, 101.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for market state and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{MarketState, PricingError};
