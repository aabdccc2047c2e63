//! Risk calculation settings.
//!
//! [`RiskConfig`] carries the VaR proxy multipliers and the payoff scan
//! window. It is passed explicitly to every portfolio operation.

use crate::portfolio::PortfolioError;

/// One-sided 95% normal quantile.
pub const Z_95: f64 = 1.645;

/// Settings for VaR and payoff scanning.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `var_z` | 1.645 | Normal quantile of the VaR proxy |
/// | `var_spot_move` | 0.015 | Relative one-day spot move |
/// | `var_vol_move` | 0.01 | Absolute one-day vol move |
/// | `scan_width` | 0.5 | Half-width of the spot scan as a fraction of spot |
/// | `scan_steps` | 100 | Number of scan intervals |
/// | `extremum_tolerance` | 1e-6 | Flatness threshold at the scan edges |
///
/// # Examples
///
/// ```
/// use pricer_risk::RiskConfig;
///
/// let config = RiskConfig { scan_steps: 200, ..Default::default() };
/// assert!(config.validate().is_ok());
/// assert!(RiskConfig { scan_width: 1.0, ..Default::default() }.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RiskConfig {
    /// Normal quantile for the VaR proxy.
    pub var_z: f64,
    /// Relative spot move used by the VaR proxy.
    pub var_spot_move: f64,
    /// Absolute volatility move used by the VaR proxy.
    pub var_vol_move: f64,
    /// Scan covers `S·[1 - w, 1 + w]`.
    pub scan_width: f64,
    /// Number of intervals in the scan.
    pub scan_steps: usize,
    /// P&L differences at or below this are treated as flat.
    pub extremum_tolerance: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            var_z: Z_95,
            var_spot_move: 0.015,
            var_vol_move: 0.01,
            scan_width: 0.5,
            scan_steps: 100,
            extremum_tolerance: 1e-6,
        }
    }
}

impl RiskConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidConfig` if:
    /// - a VaR multiplier is negative or not finite
    /// - `scan_width` is outside (0, 1)
    /// - `scan_steps` is below 2
    /// - `extremum_tolerance` is negative or not finite
    pub fn validate(&self) -> Result<(), PortfolioError> {
        for (name, value) in [
            ("var_z", self.var_z),
            ("var_spot_move", self.var_spot_move),
            ("var_vol_move", self.var_vol_move),
            ("extremum_tolerance", self.extremum_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PortfolioError::InvalidConfig(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }
        if !(self.scan_width > 0.0 && self.scan_width < 1.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "scan_width must be in (0, 1), got {}",
                self.scan_width
            )));
        }
        if self.scan_steps < 2 {
            return Err(PortfolioError::InvalidConfig(format!(
                "scan_steps must be at least 2, got {}",
                self.scan_steps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RiskConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            RiskConfig { var_z: -1.0, ..Default::default() },
            RiskConfig { var_vol_move: f64::NAN, ..Default::default() },
            RiskConfig { scan_width: 0.0, ..Default::default() },
            RiskConfig { scan_steps: 1, ..Default::default() },
            RiskConfig { extremum_tolerance: -1e-9, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(PortfolioError::InvalidConfig(_))));
        }
    }
}
