//! Generation parameters and candidate constraints.
//!
//! Both structs validate themselves before a search starts, so a bad
//! request fails before any leg is priced.

use pricer_models::instruments::{InstrumentSpec, OptionType};
use pricer_models::methods::PricingMethod;
use pricer_risk::RiskConfig;

use crate::error::StrategyError;

/// How candidate legs are built and valued.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `method` | closed form | Pricing method for every leg |
/// | `strike_step` | 1.0 | Strike grid increment |
/// | `expiry_days` | 30 | Near expiry in calendar days |
/// | `long_expiry_days` | 60 | Far expiry for calendars |
/// | `width_pct` | derived | Structural width override in percent of spot |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GenerationParams {
    /// Pricing method for the legs; must price European options
    pub method: PricingMethod,
    /// Strike increment; every strike is a multiple of it
    pub strike_step: f64,
    /// Near expiry in calendar days
    pub expiry_days: f64,
    /// Far expiry in calendar days, used by calendars
    pub long_expiry_days: f64,
    /// Explicit width in percent of spot
    pub width_pct: Option<f64>,
    /// Payoff scan and VaR settings used to value candidates
    pub risk: RiskConfig,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            method: PricingMethod::ClosedForm,
            strike_step: 1.0,
            expiry_days: 30.0,
            long_expiry_days: 60.0,
            width_pct: None,
            risk: RiskConfig::default(),
        }
    }
}

impl GenerationParams {
    /// Near expiry in years.
    pub fn near_expiry(&self) -> f64 {
        self.expiry_days / 365.0
    }

    /// Far expiry in years.
    pub fn far_expiry(&self) -> f64 {
        self.long_expiry_days / 365.0
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidGeneration` if:
    /// - `method` cannot price a European option
    /// - `strike_step` or `expiry_days` is not positive
    /// - `long_expiry_days` does not exceed `expiry_days`
    /// - `width_pct` is present but not positive
    /// - the risk configuration is out of range
    pub fn validate(&self) -> Result<(), StrategyError> {
        let probe = InstrumentSpec::Vanilla {
            option_type: OptionType::Call,
            strike: 1.0,
            expiry: 1.0,
        };
        if !self.method.supports(&probe) {
            return Err(StrategyError::InvalidGeneration(format!(
                "method {} cannot price vanilla legs",
                self.method.name()
            )));
        }
        for (name, value) in [
            ("strikeStep", self.strike_step),
            ("expiryDays", self.expiry_days),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(StrategyError::InvalidGeneration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.long_expiry_days.is_finite() && self.long_expiry_days > self.expiry_days) {
            return Err(StrategyError::InvalidGeneration(format!(
                "longExpiryDays ({}) must exceed expiryDays ({})",
                self.long_expiry_days, self.expiry_days
            )));
        }
        if let Some(width) = self.width_pct {
            if !(width.is_finite() && width > 0.0) {
                return Err(StrategyError::InvalidGeneration(format!(
                    "widthPct must be positive, got {width}"
                )));
            }
        }
        self.risk
            .validate()
            .map_err(|err| StrategyError::InvalidGeneration(err.to_string()))
    }
}

/// Limits a candidate must respect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Constraints {
    /// Largest acceptable expiry loss; unbounded losses always exceed it
    pub max_loss: Option<f64>,
    /// Most legs a candidate may have
    pub max_legs: usize,
    /// Reject candidates with unbounded loss
    pub defined_risk_only: bool,
    /// Allow calendar structures
    pub allow_multi_expiry: bool,
    /// 0 favours income (credit, theta), 1 favours convexity (gamma, vega)
    pub income_vs_convexity: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_loss: None,
            max_legs: 4,
            defined_risk_only: false,
            allow_multi_expiry: false,
            income_vs_convexity: 0.5,
        }
    }
}

impl Constraints {
    /// Preference tilt in [-1, 1]: negative for income, positive for convexity.
    pub fn tilt(&self) -> f64 {
        2.0 * self.income_vs_convexity - 1.0
    }

    /// Validates the constraints.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidConstraints` if:
    /// - `max_legs` is zero
    /// - `max_loss` is present but negative or not finite
    /// - `income_vs_convexity` is outside [0, 1]
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.max_legs == 0 {
            return Err(StrategyError::InvalidConstraints(
                "maxLegs must be at least 1".to_string(),
            ));
        }
        if let Some(max_loss) = self.max_loss {
            if !(max_loss.is_finite() && max_loss >= 0.0) {
                return Err(StrategyError::InvalidConstraints(format!(
                    "maxLoss must be non-negative, got {max_loss}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.income_vs_convexity) {
            return Err(StrategyError::InvalidConstraints(format!(
                "incomeVsConvexity must be in [0, 1], got {}",
                self.income_vs_convexity
            )));
        }
        Ok(())
    }

    /// Returns true when a candidate with this expiry loss is acceptable.
    pub fn accepts_loss(&self, max_loss: Option<f64>) -> bool {
        match (max_loss, self.max_loss) {
            (None, _) if self.defined_risk_only => false,
            (None, Some(_)) => false,
            (Some(loss), Some(limit)) => loss <= limit,
            _ => true,
        }
    }
}
