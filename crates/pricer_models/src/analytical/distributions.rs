//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `lognormal_cdf`: Terminal-price CDF under geometric Brownian motion

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Abramowitz and Stegun formula 7.1.26, maximum absolute error 1.5e-7.
/// The reflection `erfc(-x) = 2 - erfc(x)` keeps `Φ(x) + Φ(-x) = 1` exact,
/// which put-call parity relies on.
#[inline]
fn erfc_approx(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = A1 + t * (A2 + t * (A3 + t * (A4 + t * A5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = (1/2) · erfc(-x / √2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc_approx(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / √(2π)) · exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Probability that the terminal price is at or below `level`.
///
/// Under risk-neutral geometric Brownian motion with rate `r`, dividend
/// yield `q` and volatility `σ`, `ln S_T ~ N(ln S + (r - q - σ²/2)T, σ²T)`.
/// Degenerate inputs (`T ≤ 0` or `σ√T ≈ 0`) collapse to a point mass at the
/// forward. Non-positive levels have probability zero.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::lognormal_cdf;
///
/// // The median of S_T sits at S·exp((r - q - σ²/2)T)
/// let median = 100.0 * (0.05_f64 - 0.02).exp();
/// let p = lognormal_cdf(median, 100.0, 0.05, 0.0, 0.2, 1.0);
/// assert!((p - 0.5).abs() < 1e-7);
/// ```
pub fn lognormal_cdf(
    level: f64,
    spot: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
    expiry: f64,
) -> f64 {
    if level <= 0.0 {
        return 0.0;
    }
    if level.is_infinite() {
        return 1.0;
    }
    let std_dev = volatility * expiry.max(0.0).sqrt();
    let mean = spot.ln() + (rate - dividend - 0.5 * volatility * volatility) * expiry.max(0.0);
    if std_dev < 1e-12 {
        return if level.ln() >= mean { 1.0 } else { 0.0 };
    }
    norm_cdf((level.ln() - mean) / std_dev)
}
