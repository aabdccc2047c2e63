//! Geometric average Asian option analytical pricing.
//!
//! Implements the Kemna-Vorst (1990) closed-form solution for geometric
//! average Asian options. The geometric average allows for a closed-form
//! solution because the product of log-normal variables is log-normal.
//!
//! The closed-form solution adjusts the Black-Scholes formula:
//! - Adjusted volatility: σ_G = σ / √3
//! - Adjusted cost of carry: b_G = (r - q - σ²/6) / 2
//!
//! # References
//!
//! - Kemna, A.G.Z. and Vorst, A.C.F. (1990). "A Pricing Method for Options
//!   Based on Average Asset Values." Journal of Banking and Finance, 14, 113-129.

use super::black_scholes::EXPIRY_EPSILON;
use super::distributions::norm_cdf;
use crate::instruments::OptionType;

/// Result from geometric Asian option pricing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricAsianResult {
    /// Option price
    pub price: f64,
    /// Adjusted volatility (σ_G = σ / √3)
    pub adjusted_volatility: f64,
    /// Adjusted cost of carry
    pub adjusted_drift: f64,
    /// d1 parameter
    pub d1: f64,
    /// d2 parameter
    pub d2: f64,
}

/// Prices a continuously sampled geometric average Asian option.
///
/// ```text
/// σ_G = σ / √3
/// b_G = (r - q - σ²/6) / 2
/// F_G = S · exp(b_G · T)
/// d1  = [ln(F_G / K) + σ_G² T / 2] / (σ_G √T)
/// d2  = d1 - σ_G √T
///
/// Call = e^(-rT) · [F_G · N(d1) - K · N(d2)]
/// Put  = e^(-rT) · [K · N(-d2) - F_G · N(-d1)]
/// ```
///
/// Expired options (or a volatility too small to divide by) return the
/// intrinsic value against spot.
///
/// # Example
///
/// ```rust
/// use pricer_models::analytical::geometric_asian;
/// use pricer_models::instruments::OptionType;
///
/// let result = geometric_asian(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0);
/// assert!(result.price > 0.0);
/// assert!((result.adjusted_volatility - 0.2 / 3.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn geometric_asian(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
    expiry: f64,
) -> GeometricAsianResult {
    let adjusted_volatility = volatility / 3.0_f64.sqrt();
    let adjusted_drift = 0.5 * (rate - dividend - volatility * volatility / 6.0);

    let vol_sqrt_t = adjusted_volatility * expiry.max(0.0).sqrt();
    if expiry <= EXPIRY_EPSILON || vol_sqrt_t <= EXPIRY_EPSILON {
        return GeometricAsianResult {
            price: option_type.intrinsic(spot, strike),
            adjusted_volatility,
            adjusted_drift,
            d1: 0.0,
            d2: 0.0,
        };
    }

    let forward = spot * (adjusted_drift * expiry).exp();
    let d1 = ((forward / strike).ln() + 0.5 * adjusted_volatility * adjusted_volatility * expiry)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let df = (-rate * expiry).exp();

    let price = match option_type {
        OptionType::Call => df * (forward * norm_cdf(d1) - strike * norm_cdf(d2)),
        OptionType::Put => df * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1)),
    };

    GeometricAsianResult {
        price,
        adjusted_volatility,
        adjusted_drift,
        d1,
        d2,
    }
}
