//! Probability of profit under a log-normal terminal distribution.
//!
//! The scanned P&L is treated as piecewise linear between grid points.
//! Each interval where it is positive contributes its exact log-normal
//! mass; an interval with a sign change is split at the linear crossing.
//! The tails beyond the scan count when the end points are profitable.

use pricer_core::types::MarketState;
use pricer_models::analytical::lognormal_cdf;
use pricer_risk::scenarios::PayoffCurve;

/// Lowest reported probability.
pub const POP_FLOOR: f64 = 0.001;

/// Highest reported probability.
pub const POP_CEILING: f64 = 0.999;

/// Risk-neutral distribution of the spot at a horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalDistribution {
    /// Current spot
    pub spot: f64,
    /// Drift rate
    pub rate: f64,
    /// Dividend yield
    pub dividend: f64,
    /// Volatility over the horizon
    pub volatility: f64,
    /// Horizon in years
    pub horizon: f64,
}

impl TerminalDistribution {
    /// Distribution implied by a market state.
    pub fn from_market(market: &MarketState, horizon: f64) -> Self {
        Self {
            spot: market.spot,
            rate: market.rate,
            dividend: market.dividend,
            volatility: market.effective_volatility(),
            horizon,
        }
    }

    /// `P(S_T ≤ level)`.
    #[inline]
    pub fn cdf(&self, level: f64) -> f64 {
        lognormal_cdf(
            level,
            self.spot,
            self.rate,
            self.dividend,
            self.volatility,
            self.horizon,
        )
    }
}

/// Probability that the horizon (model) P&L is positive.
///
/// Clamped to [[`POP_FLOOR`], [`POP_CEILING`]].
///
/// # Examples
///
/// ```
/// use pricer_risk::scenarios::{PayoffCurve, PayoffPoint};
/// use pricer_strategy::probability::{probability_of_profit, TerminalDistribution};
///
/// let point = |spot: f64, pnl: f64| PayoffPoint { spot, expiry_pnl: pnl, model_pnl: pnl };
/// let curve = PayoffCurve { points: vec![point(50.0, -1.0), point(150.0, 1.0)] };
/// let dist = TerminalDistribution { spot: 100.0, rate: 0.0, dividend: 0.0, volatility: 0.2, horizon: 1.0 };
///
/// let pop = probability_of_profit(&curve, &dist);
/// assert!((pop - (1.0 - dist.cdf(100.0))).abs() < 1e-12);
/// ```
pub fn probability_of_profit(curve: &PayoffCurve, dist: &TerminalDistribution) -> f64 {
    let points = &curve.points;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return POP_FLOOR;
    };

    let mut probability = 0.0;
    if first.model_pnl > 0.0 {
        probability += dist.cdf(first.spot);
    }

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let crossing = || a.spot + (b.spot - a.spot) * a.model_pnl / (a.model_pnl - b.model_pnl);
        probability += match (a.model_pnl > 0.0, b.model_pnl > 0.0) {
            (true, true) => dist.cdf(b.spot) - dist.cdf(a.spot),
            (true, false) => dist.cdf(crossing()) - dist.cdf(a.spot),
            (false, true) => dist.cdf(b.spot) - dist.cdf(crossing()),
            (false, false) => 0.0,
        };
    }

    if last.model_pnl > 0.0 {
        probability += 1.0 - dist.cdf(last.spot);
    }

    probability.clamp(POP_FLOOR, POP_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_risk::scenarios::PayoffPoint;

    fn curve(points: &[(f64, f64)]) -> PayoffCurve {
        PayoffCurve {
            points: points
                .iter()
                .map(|&(spot, pnl)| PayoffPoint {
                    spot,
                    expiry_pnl: pnl,
                    model_pnl: pnl,
                })
                .collect(),
        }
    }

    fn dist() -> TerminalDistribution {
        TerminalDistribution::from_market(&MarketState::new(100.0, 0.05, 0.0, 0.2), 0.25)
    }

    #[test]
    fn test_always_profitable_is_capped() {
        let c = curve(&[(50.0, 1.0), (100.0, 2.0), (150.0, 1.0)]);
        assert_eq!(probability_of_profit(&c, &dist()), POP_CEILING);
    }

    #[test]
    fn test_never_profitable_is_floored() {
        let c = curve(&[(50.0, -1.0), (100.0, 0.0), (150.0, -1.0)]);
        assert_eq!(probability_of_profit(&c, &dist()), POP_FLOOR);
        assert_eq!(probability_of_profit(&PayoffCurve::default(), &dist()), POP_FLOOR);
    }

    #[test]
    fn test_band_between_crossings() {
        // Profitable on (95, 105) only, as for a short straddle.
        let c = curve(&[(80.0, -5.0), (90.0, -1.0), (100.0, 1.0), (110.0, -1.0), (120.0, -5.0)]);
        let d = dist();
        assert_relative_eq!(
            probability_of_profit(&c, &d),
            d.cdf(105.0) - d.cdf(95.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tails_are_included() {
        // Long straddle shape: profitable outside (90, 110).
        let c = curve(&[(80.0, 5.0), (90.0, 0.0), (100.0, -5.0), (110.0, 0.0), (120.0, 5.0)]);
        let d = dist();
        assert_relative_eq!(
            probability_of_profit(&c, &d),
            d.cdf(90.0) + 1.0 - d.cdf(110.0),
            epsilon = 1e-12
        );
    }
}
