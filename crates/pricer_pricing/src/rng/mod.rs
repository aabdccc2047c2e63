//! # Random Number Generation Infrastructure
//!
//! This module provides the deterministic random stream behind every Monte
//! Carlo method in the kernel.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the same seed always yields a bit-identical stream
//! - **Ownership**: a stream is created per pricing call and threaded through
//!   the simulation by `&mut`; there is no global or shared generator
//! - **Ecosystem traits**: [`Lcg64`] implements `rand::RngCore` and
//!   `rand::SeedableRng`, and [`BoxMuller`] is a `rand_distr::Distribution`
//!
//! ## Module Structure
//!
//! - [`lcg`]: 64-bit linear congruential generator
//! - [`box_muller`]: Box-Muller Gaussian transform
//! - `prng`: [`PricerRng`], the seeded stream used by the engines
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate uniform random values in [0, 1)
//! let uniform_value = rng.gen_uniform();
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

pub mod box_muller;
pub mod lcg;
mod prng;

// Public re-exports
pub use box_muller::BoxMuller;
pub use lcg::Lcg64;
pub use prng::PricerRng;
