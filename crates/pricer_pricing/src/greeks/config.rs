//! Finite-difference bump configuration.
//!
//! Provides [`BumpConfig`] for configuring bump widths and [`GreeksMode`]
//! for the calculation method chosen per instrument and pricing method.

use pricer_models::instruments::InstrumentSpec;
use pricer_models::methods::PricingMethod;
use thiserror::Error;

/// One calendar day in years.
pub const ONE_DAY: f64 = 1.0 / 365.0;

/// Calculation mode for Greeks computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GreeksMode {
    /// Analytic Greeks from the closed-form model.
    ///
    /// Used for vanilla and digital options priced in closed form.
    ClosedForm,

    /// Bump-and-revalue using finite differences.
    ///
    /// Central differences for delta and gamma, one-sided for vega,
    /// theta and rho. Works with every pricing method.
    #[default]
    BumpRevalue,
}

impl GreeksMode {
    /// Mode used for the given instrument and method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_models::instruments::{InstrumentSpec, OptionType};
    /// use pricer_models::methods::PricingMethod;
    /// use pricer_pricing::greeks::GreeksMode;
    ///
    /// let call = InstrumentSpec::Vanilla {
    ///     option_type: OptionType::Call,
    ///     strike: 100.0,
    ///     expiry: 1.0,
    /// };
    /// assert_eq!(GreeksMode::select(&call, &PricingMethod::ClosedForm), GreeksMode::ClosedForm);
    /// assert_eq!(
    ///     GreeksMode::select(&call, &PricingMethod::BinomialLattice { steps: 100 }),
    ///     GreeksMode::BumpRevalue
    /// );
    /// ```
    pub fn select(instrument: &InstrumentSpec, method: &PricingMethod) -> Self {
        match (instrument, method) {
            (InstrumentSpec::Vanilla { .. }, PricingMethod::ClosedForm)
            | (InstrumentSpec::Digital { .. }, PricingMethod::ClosedForm) => GreeksMode::ClosedForm,
            _ => GreeksMode::BumpRevalue,
        }
    }
}

/// Bump widths for finite-difference Greeks.
///
/// Use the builder pattern via [`BumpConfig::builder()`] for construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `spot_bump_relative` | 0.01 (1%) | Relative bump for spot price |
/// | `vol_bump_absolute` | 0.01 | Absolute bump for volatility |
/// | `time_bump_years` | 1/365 | Time bump in years (1 calendar day) |
/// | `rate_bump_absolute` | 0.01 | Absolute bump for interest rate |
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::BumpConfig;
///
/// // Use defaults
/// let config = BumpConfig::default();
/// assert!((config.spot_bump(100.0) - 1.0).abs() < 1e-12);
///
/// // Use builder for custom values
/// let config = BumpConfig::builder()
///     .spot_bump_relative(0.005)  // 0.5% bump
///     .build()
///     .unwrap();
/// assert_eq!(config.spot_bump_relative, 0.005);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BumpConfig {
    /// Relative bump for spot price (default: 0.01 = 1%).
    ///
    /// The actual bump is `spot_bump_relative * spot_price`.
    pub spot_bump_relative: f64,

    /// Absolute bump for volatility (default: 0.01 = 1 vol point).
    pub vol_bump_absolute: f64,

    /// Time bump in years (default: 1/365 = 1 calendar day).
    pub time_bump_years: f64,

    /// Absolute bump for interest rate (default: 0.01 = 1%).
    pub rate_bump_absolute: f64,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: 0.01,
            vol_bump_absolute: 0.01,
            time_bump_years: ONE_DAY,
            rate_bump_absolute: 0.01,
        }
    }
}

impl BumpConfig {
    /// Creates a new builder for constructing a `BumpConfig`.
    pub fn builder() -> BumpConfigBuilder {
        BumpConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<(), BumpConfigError> {
        // Spot bump must be positive and below 100%, so S - h stays positive
        if !(self.spot_bump_relative > 0.0 && self.spot_bump_relative < 1.0) {
            return Err(BumpConfigError::InvalidSpotBump(format!(
                "spot_bump_relative must be in (0, 1), got {}",
                self.spot_bump_relative
            )));
        }

        if !(self.vol_bump_absolute > 0.0 && self.vol_bump_absolute <= 0.5) {
            return Err(BumpConfigError::InvalidVolBump(format!(
                "vol_bump_absolute must be in (0, 0.5], got {}",
                self.vol_bump_absolute
            )));
        }

        if !(self.time_bump_years > 0.0 && self.time_bump_years <= 1.0) {
            return Err(BumpConfigError::InvalidTimeBump(format!(
                "time_bump_years must be in (0, 1], got {}",
                self.time_bump_years
            )));
        }

        if !(self.rate_bump_absolute > 0.0 && self.rate_bump_absolute <= 0.1) {
            return Err(BumpConfigError::InvalidRateBump(format!(
                "rate_bump_absolute must be in (0, 0.1], got {}",
                self.rate_bump_absolute
            )));
        }

        Ok(())
    }

    /// Computes the absolute spot bump for a given spot price.
    #[inline]
    pub fn spot_bump(&self, spot: f64) -> f64 {
        (self.spot_bump_relative * spot).max(1e-8)
    }
}

/// Builder for [`BumpConfig`].
#[derive(Debug, Default)]
pub struct BumpConfigBuilder {
    spot_bump_relative: Option<f64>,
    vol_bump_absolute: Option<f64>,
    time_bump_years: Option<f64>,
    rate_bump_absolute: Option<f64>,
}

impl BumpConfigBuilder {
    /// Sets the relative spot bump (default: 0.01 = 1%).
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.spot_bump_relative = Some(bump);
        self
    }

    /// Sets the absolute volatility bump (default: 0.01).
    pub fn vol_bump_absolute(mut self, bump: f64) -> Self {
        self.vol_bump_absolute = Some(bump);
        self
    }

    /// Sets the time bump in years (default: 1/365).
    pub fn time_bump_years(mut self, bump: f64) -> Self {
        self.time_bump_years = Some(bump);
        self
    }

    /// Sets the absolute rate bump (default: 0.01).
    pub fn rate_bump_absolute(mut self, bump: f64) -> Self {
        self.rate_bump_absolute = Some(bump);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BumpConfigError`] if any parameter is invalid.
    pub fn build(self) -> Result<BumpConfig, BumpConfigError> {
        let defaults = BumpConfig::default();
        let config = BumpConfig {
            spot_bump_relative: self.spot_bump_relative.unwrap_or(defaults.spot_bump_relative),
            vol_bump_absolute: self.vol_bump_absolute.unwrap_or(defaults.vol_bump_absolute),
            time_bump_years: self.time_bump_years.unwrap_or(defaults.time_bump_years),
            rate_bump_absolute: self.rate_bump_absolute.unwrap_or(defaults.rate_bump_absolute),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Error type for [`BumpConfig`] validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum BumpConfigError {
    /// Invalid spot bump value.
    #[error("Invalid spot bump: {0}")]
    InvalidSpotBump(String),
    /// Invalid volatility bump value.
    #[error("Invalid vol bump: {0}")]
    InvalidVolBump(String),
    /// Invalid time bump value.
    #[error("Invalid time bump: {0}")]
    InvalidTimeBump(String),
    /// Invalid rate bump value.
    #[error("Invalid rate bump: {0}")]
    InvalidRateBump(String),
}
