//! Market state inputs for pricing.
//!
//! [`MarketState`] bundles the flat market parameters every pricing method
//! reads: spot, continuously-compounded rate and dividend yield, Black
//! volatility and an optional linear skew factor.

use super::error::PricingError;

/// Smallest volatility any pricing formula will see.
///
/// Volatility inputs below this level are floored before use so that
/// `σ√T` never appears as a zero denominator.
pub const VOLATILITY_FLOOR: f64 = 1e-6;

/// Flat market state for a single underlying.
///
/// All rates are continuously compounded and annualised. The state is
/// immutable within a computation; bumped scenarios are produced with the
/// `with_*` helpers, which return modified copies.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketState;
///
/// let market = MarketState::new(100.0, 0.05, 0.01, 0.2).with_skew(0.1);
/// assert_eq!(market.skew, Some(0.1));
/// assert!((market.forward(1.0) - 100.0 * (0.04_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarketState {
    /// Spot price of the underlying (S)
    #[cfg_attr(feature = "serde", serde(alias = "S"))]
    pub spot: f64,
    /// Risk-free rate (r)
    #[cfg_attr(feature = "serde", serde(alias = "r"))]
    pub rate: f64,
    /// Dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default, alias = "q"))]
    pub dividend: f64,
    /// Black volatility (σ)
    #[cfg_attr(feature = "serde", serde(alias = "sigma", alias = "vol"))]
    pub volatility: f64,
    /// Linear skew factor: implied vol falls by `skew` per unit of moneyness
    #[cfg_attr(feature = "serde", serde(default))]
    pub skew: Option<f64>,
}

impl MarketState {
    /// Creates a market state without skew.
    pub fn new(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            dividend,
            volatility,
            skew: None,
        }
    }

    /// Returns a copy carrying the given skew factor.
    pub fn with_skew(mut self, skew: f64) -> Self {
        self.skew = Some(skew);
        self
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Returns a copy with a different risk-free rate.
    #[inline]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Volatility floored at [`VOLATILITY_FLOOR`].
    #[inline]
    pub fn effective_volatility(&self) -> f64 {
        self.volatility.max(VOLATILITY_FLOOR)
    }

    /// Skew factor, zero when absent.
    #[inline]
    pub fn skew_or_zero(&self) -> f64 {
        self.skew.unwrap_or(0.0)
    }

    /// Discount factor `e^{-rT}`.
    #[inline]
    pub fn discount_factor(&self, expiry: f64) -> f64 {
        (-self.rate * expiry).exp()
    }

    /// Dividend discount factor `e^{-qT}`.
    #[inline]
    pub fn dividend_factor(&self, expiry: f64) -> f64 {
        (-self.dividend * expiry).exp()
    }

    /// Forward price `S·e^{(r-q)T}`.
    #[inline]
    pub fn forward(&self, expiry: f64) -> f64 {
        self.spot * ((self.rate - self.dividend) * expiry).exp()
    }

    /// Validates the market state.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` naming the field when:
    /// - `spot` is not finite or not positive
    /// - `rate` or `dividend` is not finite
    /// - `volatility` is not finite or negative
    /// - `skew` is present but not finite
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::invalid_input(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid_input("rate", "must be finite"));
        }
        if !self.dividend.is_finite() {
            return Err(PricingError::invalid_input("dividend", "must be finite"));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(PricingError::invalid_input(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if let Some(skew) = self.skew {
            if !skew.is_finite() {
                return Err(PricingError::invalid_input("skew", "must be finite"));
            }
        }
        Ok(())
    }
}
