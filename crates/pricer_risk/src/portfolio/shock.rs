//! Market and time shocks applied before revaluation.

use pricer_core::types::{MarketState, VOLATILITY_FLOOR};
use pricer_pricing::greeks::ONE_DAY;

/// What-if shock: relative spot move, absolute vol and rate moves, and
/// elapsed calendar days.
///
/// # Examples
///
/// ```
/// use pricer_core::types::MarketState;
/// use pricer_risk::portfolio::SimulationShock;
///
/// let shock = SimulationShock { spot_shock_pct: -10.0, vol_shock_abs: 0.05, ..Default::default() };
/// let shocked = shock.apply_market(&MarketState::new(100.0, 0.05, 0.0, 0.2));
/// assert!((shocked.spot - 90.0).abs() < 1e-12);
/// assert!((shocked.volatility - 0.25).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SimulationShock {
    /// Spot move in percent
    pub spot_shock_pct: f64,
    /// Absolute volatility move
    pub vol_shock_abs: f64,
    /// Calendar days elapsed
    pub days_passed: f64,
    /// Absolute rate move
    pub rate_shock_abs: f64,
}

impl SimulationShock {
    /// Returns true when the shock changes nothing.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Shocked market: `S·(1 + pct/100)`, `σ + Δσ` floored, `r + Δr`.
    pub fn apply_market(&self, market: &MarketState) -> MarketState {
        let volatility = (market.volatility + self.vol_shock_abs).max(VOLATILITY_FLOOR);
        MarketState {
            spot: market.spot * (1.0 + self.spot_shock_pct / 100.0),
            rate: market.rate + self.rate_shock_abs,
            volatility,
            ..*market
        }
    }

    /// Remaining time after `days_passed`, floored at zero.
    pub fn apply_expiry(&self, expiry: f64) -> f64 {
        (expiry - self.days_passed * ONE_DAY).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_shock_is_identity() {
        let market = MarketState::new(100.0, 0.05, 0.01, 0.2).with_skew(0.1);
        let shock = SimulationShock::default();
        assert!(shock.is_zero());
        assert_eq!(shock.apply_market(&market), market);
        assert_eq!(shock.apply_expiry(0.75), 0.75);
    }

    #[test]
    fn test_vol_shock_is_floored() {
        let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
        let shock = SimulationShock {
            vol_shock_abs: -0.5,
            ..Default::default()
        };
        assert_eq!(shock.apply_market(&market).volatility, VOLATILITY_FLOOR);
    }

    #[test]
    fn test_days_passed_floors_expiry() {
        let shock = SimulationShock {
            days_passed: 30.0,
            ..Default::default()
        };
        assert_relative_eq!(shock.apply_expiry(1.0), 1.0 - 30.0 / 365.0, epsilon = 1e-12);
        assert_eq!(shock.apply_expiry(10.0 / 365.0), 0.0);
    }
}
