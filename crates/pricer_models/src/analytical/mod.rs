//! Analytical pricing formulas.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton with continuous dividend yield
//! - Cash-or-nothing digital options
//! - Kemna-Vorst geometric average Asian options
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Guard before evaluating**: expired options and degenerate volatility
//!   return intrinsic values instead of dividing by `σ√T`
//! - **Numerical Stability**: Uses an erfc-based CDF whose reflection keeps
//!   `N(x) + N(-x) = 1` exact

pub mod asian;
pub mod black_scholes;
pub mod digital;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use asian::{geometric_asian, GeometricAsianResult};
pub use black_scholes::{BlackScholes, Greeks, EXPIRY_EPSILON};
pub use digital::{digital_greeks, digital_price};
pub use distributions::{lognormal_cdf, norm_cdf, norm_pdf};
pub use error::AnalyticalError;
