//! Recombining binomial lattices.
//!
//! - [`crr`]: Cox-Ross-Rubinstein tree with European or American exercise

pub mod crr;

pub use crr::{price_crr, Exercise};
