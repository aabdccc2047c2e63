//! # Pricer Pricing (Layer 3: Pricing Kernel)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns a market state, an instrument and a pricing method
//! into a price and its sensitivities:
//! - Deterministic random stream for simulation ([`rng`])
//! - Monte Carlo engines for barrier and arithmetic Asian options ([`mc`])
//! - Cox-Ross-Rubinstein lattice with early exercise ([`lattice`])
//! - Validation, dispatch and numerical fallback ([`kernel`])
//! - Analytic and finite-difference Greeks ([`greeks`])
//!
//! ## Determinism
//!
//! Every simulation builds its own stream from the method seed. Pricing is
//! a pure function of its inputs: the same request always returns the same
//! bits, and bumped revaluations share random numbers with the base price.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::MarketState;
//! use pricer_models::instruments::{InstrumentSpec, OptionType};
//! use pricer_models::methods::PricingMethod;
//! use pricer_pricing::greeks::estimate;
//!
//! let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
//! let put = InstrumentSpec::American {
//!     option_type: OptionType::Put,
//!     strike: 100.0,
//!     expiry: 1.0,
//! };
//! let quote = estimate(&market, &put, &PricingMethod::BinomialLattice { steps: 200 }).unwrap();
//! assert!(quote.price > 5.57);
//! assert!(quote.delta < 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod greeks;
pub mod kernel;
pub mod lattice;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use greeks::{estimate, BumpConfig, PriceQuote};
pub use kernel::{price, price_with_error};
pub use mc::McEstimate;
