//! Price and Greeks of one instrument.

use std::ops::AddAssign;

use tracing::warn;

/// Price with first and second order sensitivities.
///
/// All fields are finite: [`PriceQuote::sanitised`] replaces any non-finite
/// Greek with zero before a quote leaves the estimator.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::PriceQuote;
///
/// let long = PriceQuote { price: 10.0, delta: 0.6, gamma: 0.02, vega: 0.4, theta: -0.02, rho: 0.5 };
/// let mut book = long.scaled(2.0);
/// book += long.scaled(-1.0);
/// assert_eq!(book, long);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PriceQuote {
    /// Present value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// Value change for a one vol point rise
    pub vega: f64,
    /// Value change over one calendar day
    pub theta: f64,
    /// Value change for a 1% rate rise
    pub rho: f64,
}

impl PriceQuote {
    /// Multiplies every field by `factor` (a signed position quantity).
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            price: self.price * factor,
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Replaces non-finite Greeks with zero, logging each replacement.
    pub fn sanitised(self, instrument: &str) -> Self {
        let clean = |name: &str, value: f64| {
            if value.is_finite() {
                value
            } else {
                warn!(instrument, greek = name, value, "non-finite Greek replaced by zero");
                0.0
            }
        };
        Self {
            price: self.price,
            delta: clean("delta", self.delta),
            gamma: clean("gamma", self.gamma),
            vega: clean("vega", self.vega),
            theta: clean("theta", self.theta),
            rho: clean("rho", self.rho),
        }
    }
}

impl AddAssign for PriceQuote {
    fn add_assign(&mut self, other: Self) {
        self.price += other.price;
        self.delta += other.delta;
        self.gamma += other.gamma;
        self.vega += other.vega;
        self.theta += other.theta;
        self.rho += other.rho;
    }
}

impl std::iter::Sum for PriceQuote {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, quote| {
            acc += quote;
            acc
        })
    }
}
