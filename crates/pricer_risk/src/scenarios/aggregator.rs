//! Portfolio valuation under a simulation shock.
//!
//! Each active leg is quoted on its own market (leg volatility override,
//! then the shock), scaled by its signed quantity and summed. The snapshot
//! also carries the VaR proxy and the expiry payoff statistics.

use pricer_core::types::MarketState;
use pricer_pricing::greeks::{estimate, PriceQuote};
use pricer_pricing::kernel::price;
use tracing::debug;

use super::payoff::{find_breakevens, find_extrema, payoff_curve};
use super::var::var_proxy;
use crate::config::RiskConfig;
use crate::portfolio::{LegId, PortfolioError, PortfolioLeg, SimulationShock};

/// Quantity-weighted sensitivities of a set of legs.
///
/// Units follow [`PriceQuote`]: vega per vol point, theta per calendar day,
/// rho per 1% rate move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NetGreeks {
    /// Net delta
    pub delta: f64,
    /// Net gamma
    pub gamma: f64,
    /// Net vega
    pub vega: f64,
    /// Net theta
    pub theta: f64,
    /// Net rho
    pub rho: f64,
}

impl From<PriceQuote> for NetGreeks {
    fn from(quote: PriceQuote) -> Self {
        Self {
            delta: quote.delta,
            gamma: quote.gamma,
            vega: quote.vega,
            theta: quote.theta,
            rho: quote.rho,
        }
    }
}

/// Valuation of one active leg.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LegValuation {
    /// Leg identifier
    pub id: LegId,
    /// Signed quantity
    pub quantity: f64,
    /// Quote for one unit
    pub unit: PriceQuote,
    /// Quote scaled by quantity
    pub position: PriceQuote,
}

/// Portfolio value, risk and payoff statistics.
///
/// `max_profit` and `max_loss` are `None` when the expiry payoff is
/// unbounded in that direction. `max_loss` is a positive magnitude.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PortfolioSnapshot {
    /// Σ quantity · price under the shock
    pub total_value: f64,
    /// Σ quantity · Greeks under the shock
    pub net_greeks: NetGreeks,
    /// One-day 95% parametric VaR proxy
    pub var95: f64,
    /// Largest expiry P&L, if bounded
    pub max_profit: Option<f64>,
    /// Largest expiry loss as a positive number, if bounded
    pub max_loss: Option<f64>,
    /// Ascending spot levels where the expiry P&L crosses zero
    pub breakevens: Vec<f64>,
    /// Per-leg detail in input order, active legs only
    pub legs: Vec<LegValuation>,
}

/// Quote for one unit of `leg` with the shock applied.
///
/// # Errors
///
/// Any pricing failure is attributed to the leg id.
pub(crate) fn quote_leg(
    market: &MarketState,
    leg: &PortfolioLeg,
    shock: &SimulationShock,
) -> Result<PriceQuote, PortfolioError> {
    let leg_market = shock.apply_market(&leg.market(market));
    let instrument = leg
        .instrument
        .with_expiry(shock.apply_expiry(leg.instrument.expiry()));
    estimate(&leg_market, &instrument, &leg.method()).map_err(PortfolioError::leg(&leg.id))
}

/// Values every active leg and sums the quantity-weighted quotes.
pub(crate) fn value_legs(
    market: &MarketState,
    legs: &[PortfolioLeg],
    shock: &SimulationShock,
) -> Result<Vec<LegValuation>, PortfolioError> {
    legs.iter()
        .filter(|leg| leg.active)
        .map(|leg| {
            let unit = quote_leg(market, leg, shock)?;
            Ok(LegValuation {
                id: leg.id.clone(),
                quantity: leg.quantity,
                unit,
                position: unit.scaled(leg.quantity),
            })
        })
        .collect()
}

/// Σ quantity · price of the active legs under the shock, without Greeks.
///
/// # Errors
///
/// `PortfolioError::LegPricing` naming the first leg that fails to price.
pub fn mark_to_model(
    market: &MarketState,
    legs: &[PortfolioLeg],
    shock: &SimulationShock,
) -> Result<f64, PortfolioError> {
    legs.iter()
        .filter(|leg| leg.active)
        .map(|leg| {
            let leg_market = shock.apply_market(&leg.market(market));
            let instrument = leg
                .instrument
                .with_expiry(shock.apply_expiry(leg.instrument.expiry()));
            let unit = price(&leg_market, &instrument, &leg.method())
                .map_err(PortfolioError::leg(&leg.id))?;
            Ok(leg.quantity * unit)
        })
        .sum()
}

/// Aggregates a portfolio into a [`PortfolioSnapshot`].
///
/// # Arguments
///
/// * `market` - Current market state
/// * `legs` - Portfolio legs; inactive legs contribute nothing
/// * `shock` - Simulation overlay applied before valuation
/// * `config` - VaR and payoff scan settings
///
/// # Errors
///
/// - `PortfolioError::InvalidConfig` for an out-of-range `config`
/// - `PortfolioError::LegPricing` naming the first leg that fails to price
///
/// # Examples
///
/// ```
/// use pricer_core::types::MarketState;
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
/// use pricer_risk::portfolio::{PortfolioLeg, SimulationShock};
/// use pricer_risk::{aggregate, RiskConfig};
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let call = InstrumentSpec::Vanilla { option_type: OptionType::Call, strike: 100.0, expiry: 1.0 };
/// let legs = vec![PortfolioLeg::new("C", call, 1.0)];
///
/// let snapshot = aggregate(&market, &legs, &SimulationShock::default(), &RiskConfig::default()).unwrap();
/// assert!((snapshot.total_value - 10.4506).abs() < 1e-3);
/// assert_eq!(snapshot.max_profit, None);
/// assert_eq!(snapshot.breakevens.len(), 1);
/// ```
pub fn aggregate(
    market: &MarketState,
    legs: &[PortfolioLeg],
    shock: &SimulationShock,
    config: &RiskConfig,
) -> Result<PortfolioSnapshot, PortfolioError> {
    config.validate()?;

    let valuations = value_legs(market, legs, shock)?;
    let net: PriceQuote = valuations.iter().map(|v| v.position).sum();
    let net_greeks = NetGreeks::from(net);

    let shocked_spot = shock.apply_market(market).spot;
    let var95 = var_proxy(&net_greeks, shocked_spot, config);

    let curve = payoff_curve(market, legs, shock, config)?;
    let breakevens = find_breakevens(&curve);
    let extrema = find_extrema(&curve, config.extremum_tolerance);

    debug!(
        legs = valuations.len(),
        total_value = net.price,
        delta = net_greeks.delta,
        var95,
        breakevens = breakevens.len(),
        "portfolio aggregated"
    );

    Ok(PortfolioSnapshot {
        total_value: net.price,
        net_greeks,
        var95,
        max_profit: extrema.max_profit,
        max_loss: extrema.max_loss,
        breakevens,
        legs: valuations,
    })
}
