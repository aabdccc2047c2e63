//! Spot scan of portfolio P&L, breakevens and payoff extrema.
//!
//! The scan covers `S·[1 − w, 1 + w]` in `scan_steps` equal intervals.
//! Both curves are net of the cost basis, the quantity-weighted price of
//! every active leg in the unshocked market.
//!
//! - expiry P&L: each leg priced at `T_leg − T_min`, so single-expiry
//!   structures are valued at their payoff
//! - model P&L: each leg priced at `T_leg − days/365` with the vol and
//!   rate shocks applied; the scanned spot replaces the spot shock

use pricer_core::types::MarketState;
use pricer_models::instruments::InstrumentSpec;
use pricer_pricing::kernel::price;
use tracing::debug;

use crate::config::RiskConfig;
use crate::portfolio::{PortfolioError, PortfolioLeg, SimulationShock};

/// One scanned spot level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PayoffPoint {
    /// Scanned underlying level
    pub spot: f64,
    /// P&L at the first expiry
    pub expiry_pnl: f64,
    /// Mark-to-model P&L under the shock
    pub model_pnl: f64,
}

/// Scanned P&L curve, ascending in spot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PayoffCurve {
    /// Scan points
    pub points: Vec<PayoffPoint>,
}

/// Bounded payoff extrema; `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extrema {
    /// Largest expiry P&L
    pub max_profit: Option<f64>,
    /// Largest expiry loss, as a positive magnitude
    pub max_loss: Option<f64>,
}

fn position_value(
    leg: &PortfolioLeg,
    market: &MarketState,
    instrument: &InstrumentSpec,
) -> Result<f64, PortfolioError> {
    let value = price(market, instrument, &leg.method()).map_err(PortfolioError::leg(&leg.id))?;
    Ok(leg.quantity * value)
}

/// Scans spot and returns the expiry and model P&L curves.
///
/// # Errors
///
/// - `PortfolioError::InvalidConfig` for an out-of-range `config`
/// - `PortfolioError::LegPricing` naming the first leg that fails to price
pub fn payoff_curve(
    market: &MarketState,
    legs: &[PortfolioLeg],
    shock: &SimulationShock,
    config: &RiskConfig,
) -> Result<PayoffCurve, PortfolioError> {
    config.validate()?;

    let active: Vec<&PortfolioLeg> = legs.iter().filter(|leg| leg.active).collect();
    let first_expiry = active
        .iter()
        .map(|leg| leg.instrument.expiry())
        .fold(f64::INFINITY, f64::min);

    let mut cost_basis = 0.0;
    for leg in &active {
        cost_basis += position_value(leg, &leg.market(market), &leg.instrument)?;
    }

    let low = market.spot * (1.0 - config.scan_width);
    let increment = 2.0 * config.scan_width * market.spot / config.scan_steps as f64;

    let mut points = Vec::with_capacity(config.scan_steps + 1);
    for i in 0..=config.scan_steps {
        let spot = low + i as f64 * increment;
        let mut expiry_value = 0.0;
        let mut model_value = 0.0;

        for leg in &active {
            let leg_market = leg.market(market);
            let expiry = leg.instrument.expiry();

            let at_expiry = leg.instrument.with_expiry((expiry - first_expiry).max(0.0));
            expiry_value += position_value(leg, &leg_market.with_spot(spot), &at_expiry)?;

            let shocked = shock.apply_market(&leg_market).with_spot(spot);
            let remaining = leg.instrument.with_expiry(shock.apply_expiry(expiry));
            model_value += position_value(leg, &shocked, &remaining)?;
        }

        points.push(PayoffPoint {
            spot,
            expiry_pnl: expiry_value - cost_basis,
            model_pnl: model_value - cost_basis,
        });
    }

    debug!(
        legs = active.len(),
        points = points.len(),
        cost_basis,
        "payoff curve scanned"
    );

    Ok(PayoffCurve { points })
}

/// Spot levels where the expiry P&L crosses zero.
///
/// Sign changes between adjacent points are located by linear
/// interpolation. Points exactly at zero count when a neighbour is not
/// zero, so a flat zero segment yields its two ends. Output is ascending
/// with duplicates removed.
///
/// # Examples
///
/// ```
/// use pricer_risk::scenarios::{find_breakevens, PayoffCurve, PayoffPoint};
///
/// let point = |spot: f64, pnl: f64| PayoffPoint { spot, expiry_pnl: pnl, model_pnl: pnl };
/// let curve = PayoffCurve { points: vec![point(90.0, -2.0), point(100.0, 2.0), point(110.0, 6.0)] };
/// assert_eq!(find_breakevens(&curve), vec![95.0]);
/// ```
pub fn find_breakevens(curve: &PayoffCurve) -> Vec<f64> {
    let points = &curve.points;
    let mut levels = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if point.expiry_pnl == 0.0 {
            let prev_nonzero = i > 0 && points[i - 1].expiry_pnl != 0.0;
            let next_nonzero = points.get(i + 1).is_some_and(|p| p.expiry_pnl != 0.0);
            if prev_nonzero || next_nonzero {
                levels.push(point.spot);
            }
        }
    }

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.expiry_pnl * b.expiry_pnl < 0.0 {
            let weight = a.expiry_pnl / (a.expiry_pnl - b.expiry_pnl);
            levels.push(a.spot + weight * (b.spot - a.spot));
        }
    }

    levels.sort_by(f64::total_cmp);
    levels.dedup_by(|x, y| (*x - *y).abs() <= 1e-9);
    levels
}

/// Max profit and max loss of the expiry P&L.
///
/// An extremum is unbounded when it is reached at a scan edge (within
/// `tolerance`) and the curve is still moving towards it there by more
/// than `tolerance`.
pub fn find_extrema(curve: &PayoffCurve, tolerance: f64) -> Extrema {
    let pnl: Vec<f64> = curve.points.iter().map(|p| p.expiry_pnl).collect();
    let (Some(&first), Some(&last)) = (pnl.first(), pnl.last()) else {
        return Extrema::default();
    };

    let max = pnl.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = pnl.iter().copied().fold(f64::INFINITY, f64::min);

    // Outward slope at each edge: positive when P&L rises beyond the scan.
    let (left_slope, right_slope) = match pnl.len() {
        1 => (0.0, 0.0),
        n => (first - pnl[1], last - pnl[n - 2]),
    };

    let unbounded = |extremum: f64, direction: f64| {
        ((first - extremum).abs() <= tolerance && direction * left_slope > tolerance)
            || ((last - extremum).abs() <= tolerance && direction * right_slope > tolerance)
    };

    Extrema {
        max_profit: (!unbounded(max, 1.0)).then_some(max),
        max_loss: (!unbounded(min, -1.0)).then_some(-min),
    }
}
