//! Parametric one-day VaR proxy.

use super::aggregator::NetGreeks;
use crate::config::RiskConfig;

/// `z·√((Δ·S·m_S)² + (vega·100·m_σ)²)`.
///
/// Spot and volatility moves are treated as independent. Vega is per vol
/// point, hence the factor of 100 to express `m_σ` in points.
///
/// # Examples
///
/// ```
/// use pricer_risk::{var_proxy, NetGreeks, RiskConfig};
///
/// let greeks = NetGreeks { delta: 1.0, ..Default::default() };
/// let var = var_proxy(&greeks, 100.0, &RiskConfig::default());
/// assert!((var - 1.645 * 1.5).abs() < 1e-12);
/// ```
pub fn var_proxy(greeks: &NetGreeks, spot: f64, config: &RiskConfig) -> f64 {
    let spot_term = greeks.delta * spot * config.var_spot_move;
    let vol_term = greeks.vega * 100.0 * config.var_vol_move;
    config.var_z * spot_term.hypot(vol_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_var_combines_independent_moves() {
        let greeks = NetGreeks {
            delta: 0.6,
            vega: 0.4,
            ..Default::default()
        };
        let expected = 1.645 * ((0.6f64 * 100.0 * 0.015).powi(2) + (0.4f64 * 100.0 * 0.01).powi(2)).sqrt();
        assert_relative_eq!(
            var_proxy(&greeks, 100.0, &RiskConfig::default()),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_var_ignores_sign() {
        let long = NetGreeks {
            delta: 0.5,
            vega: -0.3,
            ..Default::default()
        };
        let short = NetGreeks {
            delta: -0.5,
            vega: 0.3,
            ..Default::default()
        };
        let config = RiskConfig::default();
        assert_eq!(var_proxy(&long, 100.0, &config), var_proxy(&short, 100.0, &config));
    }
}
