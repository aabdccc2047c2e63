//! # Pricer Models (L2: Business Logic)
//!
//! Instrument definitions, pricing method selection and closed-form
//! option formulas.
//!
//! This crate provides:
//! - Instrument definitions (vanilla, American, digital, barrier, Asian, forward)
//! - Pricing methods and the legal instrument/method pairings
//! - Analytical formulas (Black-Scholes-Merton, digital, geometric Asian)
//! - Normal and log-normal distribution functions
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Validated pairing** of instrument and method at the boundary
//! - **Guarded formulas**: no division by `σ√T` at expiry

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod methods;
