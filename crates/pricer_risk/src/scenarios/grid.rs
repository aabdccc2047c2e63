//! Two-dimensional scenario grids for heatmaps.
//!
//! Every cell re-prices each active leg under the combined shock of its
//! x and y axis values. Rows are evaluated on the rayon pool; the result
//! is index-aligned with the axes and identical across runs.

use pricer_core::types::MarketState;
use tracing::debug;

use super::aggregator::mark_to_model;
use crate::config::RiskConfig;
use crate::parallel::try_parallel_map;
use crate::portfolio::{PortfolioError, PortfolioLeg, SimulationShock};

/// Risk factor moved along one grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AxisKind {
    /// Spot move in percent
    SpotPct,
    /// Absolute volatility move
    VolAbs,
    /// Absolute rate move
    RateAbs,
    /// Calendar days elapsed
    DaysPassed,
    /// Reporting-currency move in percent
    FxPct,
}

impl AxisKind {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            AxisKind::SpotPct => "spot_pct",
            AxisKind::VolAbs => "vol_abs",
            AxisKind::RateAbs => "rate_abs",
            AxisKind::DaysPassed => "days_passed",
            AxisKind::FxPct => "fx_pct",
        }
    }
}

/// Ordered shock values for one axis.
///
/// # Examples
///
/// ```
/// use pricer_risk::scenarios::{AxisKind, ShockAxis};
///
/// let axis = ShockAxis::range(AxisKind::SpotPct, -10.0, 10.0, 4);
/// assert_eq!(axis.values, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShockAxis {
    /// Factor moved
    pub kind: AxisKind,
    /// Shock values in axis order
    pub values: Vec<f64>,
}

impl ShockAxis {
    /// Creates an axis from explicit values.
    pub fn new(kind: AxisKind, values: Vec<f64>) -> Self {
        Self { kind, values }
    }

    /// `intervals + 1` evenly spaced values from `start` to `end`.
    pub fn range(kind: AxisKind, start: f64, end: f64, intervals: usize) -> Self {
        let values = if intervals == 0 {
            vec![start]
        } else {
            let width = (end - start) / intervals as f64;
            (0..=intervals).map(|i| start + i as f64 * width).collect()
        };
        Self { kind, values }
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        if self.values.is_empty() {
            return Err(PortfolioError::InvalidAxis(format!(
                "{} axis has no values",
                self.kind.name()
            )));
        }
        if let Some(value) = self.values.iter().find(|v| !v.is_finite()) {
            return Err(PortfolioError::InvalidAxis(format!(
                "{} axis contains non-finite value {value}",
                self.kind.name()
            )));
        }
        if self.kind == AxisKind::DaysPassed && self.values.iter().any(|&v| v < 0.0) {
            return Err(PortfolioError::InvalidAxis(
                "days_passed axis must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// P&L relative to current valuation over two shock axes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioGrid {
    /// Column axis
    pub x_axis: ShockAxis,
    /// Row axis
    pub y_axis: ShockAxis,
    /// Unshocked portfolio value
    pub base_value: f64,
    /// `pnl[y][x]`
    pub pnl: Vec<Vec<f64>>,
}

/// Shock for one cell, with the FX move kept apart.
#[derive(Clone, Copy, Debug, Default)]
struct CellShock {
    market: SimulationShock,
    fx_pct: f64,
}

impl CellShock {
    fn apply(&mut self, kind: AxisKind, value: f64) {
        match kind {
            AxisKind::SpotPct => self.market.spot_shock_pct = value,
            AxisKind::VolAbs => self.market.vol_shock_abs = value,
            AxisKind::RateAbs => self.market.rate_shock_abs = value,
            AxisKind::DaysPassed => self.market.days_passed = value,
            AxisKind::FxPct => self.fx_pct = value,
        }
    }
}

fn portfolio_value(
    market: &MarketState,
    legs: &[PortfolioLeg],
    cell: &CellShock,
) -> Result<f64, PortfolioError> {
    let value = mark_to_model(market, legs, &cell.market)?;
    Ok(value * (1.0 + cell.fx_pct / 100.0))
}

/// Builds a scenario grid of P&L against the unshocked value.
///
/// # Arguments
///
/// * `market` - Current market state
/// * `legs` - Portfolio legs; inactive legs contribute nothing
/// * `x_axis` - Column shocks
/// * `y_axis` - Row shocks
/// * `config` - Risk settings, validated before any pricing
///
/// # Errors
///
/// - `PortfolioError::InvalidAxis` for an empty, non-finite or repeated axis
/// - `PortfolioError::LegPricing` naming a leg that fails to price
///
/// # Examples
///
/// ```
/// use pricer_core::types::MarketState;
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
/// use pricer_risk::portfolio::PortfolioLeg;
/// use pricer_risk::scenarios::{scenario_grid, AxisKind, ShockAxis};
/// use pricer_risk::RiskConfig;
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let call = InstrumentSpec::Vanilla { option_type: OptionType::Call, strike: 100.0, expiry: 1.0 };
/// let legs = vec![PortfolioLeg::new("C", call, 1.0)];
///
/// let grid = scenario_grid(
///     &market,
///     &legs,
///     &ShockAxis::range(AxisKind::SpotPct, -10.0, 10.0, 2),
///     &ShockAxis::new(AxisKind::VolAbs, vec![0.0]),
///     &RiskConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(grid.pnl[0][1], 0.0);
/// assert!(grid.pnl[0][0] < 0.0 && grid.pnl[0][2] > 0.0);
/// ```
pub fn scenario_grid(
    market: &MarketState,
    legs: &[PortfolioLeg],
    x_axis: &ShockAxis,
    y_axis: &ShockAxis,
    config: &RiskConfig,
) -> Result<ScenarioGrid, PortfolioError> {
    config.validate()?;
    x_axis.validate()?;
    y_axis.validate()?;
    if x_axis.kind == y_axis.kind {
        return Err(PortfolioError::InvalidAxis(format!(
            "both axes move {}",
            x_axis.kind.name()
        )));
    }

    let base_value = portfolio_value(market, legs, &CellShock::default())?;

    let pnl = try_parallel_map(&y_axis.values, |&y| {
        x_axis
            .values
            .iter()
            .map(|&x| {
                let mut cell = CellShock::default();
                cell.apply(y_axis.kind, y);
                cell.apply(x_axis.kind, x);
                Ok(portfolio_value(market, legs, &cell)? - base_value)
            })
            .collect::<Result<Vec<f64>, PortfolioError>>()
    })?;

    debug!(
        x_axis = x_axis.kind.name(),
        y_axis = y_axis.kind.name(),
        cells = x_axis.values.len() * y_axis.values.len(),
        base_value,
        "scenario grid evaluated"
    );

    Ok(ScenarioGrid {
        x_axis: x_axis.clone(),
        y_axis: y_axis.clone(),
        base_value,
        pnl,
    })
}
