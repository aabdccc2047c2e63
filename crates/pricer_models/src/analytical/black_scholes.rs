//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides the Black-Scholes-Merton model with a continuous
//! dividend yield for pricing European call and put options, together with
//! analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Expiries at or below this threshold are treated as expired.
pub const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes-Merton model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Continuous dividend yield (q)
    dividend: f64,
    /// Volatility (σ)
    volatility: f64,
}

/// Analytical Greeks in raw model units.
///
/// Vega and rho are per unit change (1.0 = 100 vol points or 100% rate);
/// theta is per year of calendar time (∂V/∂t).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes-Merton model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.0, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// Returns ±100 (or zero at the money) once the option has expired, so
    /// callers never divide by `σ√T = 0`.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if self.spot > strike {
                100.0
            } else if self.spot < strike {
                -100.0
            } else {
                0.0
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term, d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Prices a European option of the given type.
    ///
    /// At expiry the intrinsic value is returned.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (self.spot - strike).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let df = (-self.rate * expiry).exp();
        let qf = (-self.dividend * expiry).exp();

        self.spot * qf * norm_cdf(d1) - strike * df * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (strike - self.spot).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let df = (-self.rate * expiry).exp();
        let qf = (-self.dividend * expiry).exp();

        strike * df * norm_cdf(-d2) - self.spot * qf * norm_cdf(-d1)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    pub fn delta(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return match option_type {
                OptionType::Call if self.spot > strike => 1.0,
                OptionType::Put if self.spot < strike => -1.0,
                _ => 0.0,
            };
        }

        let qf = (-self.dividend * expiry).exp();
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => qf * n_d1,
            OptionType::Put => qf * (n_d1 - 1.0),
        }
    }

    /// Computes Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T)
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }
        let qf = (-self.dividend * expiry).exp();
        let d1 = self.d1(strike, expiry);
        qf * norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·e^(-qT)·√T·φ(d₁)
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }
        let qf = (-self.dividend * expiry).exp();
        let d1 = self.d1(strike, expiry);
        self.spot * qf * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t), usually negative.
    ///
    /// - Call: -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
    /// - Put: -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
    pub fn theta(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let df = (-self.rate * expiry).exp();
        let qf = (-self.dividend * expiry).exp();
        let decay = -(self.spot * qf * norm_pdf(d1) * self.volatility) / (2.0 * expiry.sqrt());

        match option_type {
            OptionType::Call => {
                decay - self.rate * strike * df * norm_cdf(d2)
                    + self.dividend * self.spot * qf * norm_cdf(d1)
            }
            OptionType::Put => {
                decay + self.rate * strike * df * norm_cdf(-d2)
                    - self.dividend * self.spot * qf * norm_cdf(-d1)
            }
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }
        let d2 = self.d2(strike, expiry);
        let df = (-self.rate * expiry).exp();
        match option_type {
            OptionType::Call => strike * expiry * df * norm_cdf(d2),
            OptionType::Put => -strike * expiry * df * norm_cdf(-d2),
        }
    }

    /// Computes all five Greeks at once.
    pub fn greeks(&self, option_type: OptionType, strike: f64, expiry: f64) -> Greeks {
        Greeks {
            delta: self.delta(option_type, strike, expiry),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(option_type, strike, expiry),
            rho: self.rho(option_type, strike, expiry),
        }
    }
}
