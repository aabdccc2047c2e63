//! Greeks estimation by closed form or bump-and-revalue.

use pricer_core::types::{MarketState, PricingError};
use pricer_models::analytical::{digital_greeks, BlackScholes, Greeks};
use pricer_models::instruments::InstrumentSpec;
use pricer_models::methods::PricingMethod;
use tracing::debug;

use super::config::{BumpConfig, GreeksMode, ONE_DAY};
use super::quote::PriceQuote;
use crate::kernel::price;

/// Vega and rho are quoted per 0.01 move.
const POINT: f64 = 0.01;

/// Price and Greeks with the default [`BumpConfig`].
///
/// # Errors
///
/// Propagates any validation error from [`price`]; bumped revaluations
/// cannot fail once the base price succeeded.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketState;
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
/// use pricer_models::methods::PricingMethod;
/// use pricer_pricing::greeks::estimate;
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let call = InstrumentSpec::Vanilla {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
/// };
/// let quote = estimate(&market, &call, &PricingMethod::ClosedForm).unwrap();
/// assert!((quote.delta - 0.6368).abs() < 1e-3);
/// assert!(quote.theta < 0.0);
/// ```
pub fn estimate(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
) -> Result<PriceQuote, PricingError> {
    estimate_with_config(market, instrument, method, &BumpConfig::default())
}

/// Price and Greeks with explicit bump widths.
///
/// # Errors
///
/// Same as [`estimate`].
pub fn estimate_with_config(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
    config: &BumpConfig,
) -> Result<PriceQuote, PricingError> {
    let base = price(market, instrument, method)?;

    let quote = match GreeksMode::select(instrument, method) {
        GreeksMode::ClosedForm => closed_form(market, instrument, base)?,
        GreeksMode::BumpRevalue => bump_and_revalue(market, instrument, method, config, base)?,
    };

    Ok(quote.sanitised(instrument.kind()))
}

fn closed_form(
    market: &MarketState,
    instrument: &InstrumentSpec,
    base: f64,
) -> Result<PriceQuote, PricingError> {
    let model = BlackScholes::new(
        market.spot,
        market.rate,
        market.dividend,
        market.effective_volatility(),
    )?;

    let raw: Greeks = match *instrument {
        InstrumentSpec::Digital {
            option_type,
            strike,
            expiry,
            payout,
        } => digital_greeks(&model, option_type, strike, expiry, payout),
        InstrumentSpec::Vanilla {
            option_type,
            strike,
            expiry,
        } => model.greeks(option_type, strike, expiry),
        _ => {
            return Err(PricingError::UnsupportedMethod {
                instrument: instrument.kind().to_string(),
                method: PricingMethod::ClosedForm.name().to_string(),
            })
        }
    };

    Ok(PriceQuote {
        price: base,
        delta: raw.delta,
        gamma: raw.gamma,
        vega: raw.vega * POINT,
        theta: raw.theta / 365.0,
        rho: raw.rho * POINT,
    })
}

fn bump_and_revalue(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
    config: &BumpConfig,
    base: f64,
) -> Result<PriceQuote, PricingError> {
    let spot = market.spot;
    let h = config.spot_bump(spot);

    let up = price(&market.with_spot(spot + h), instrument, method)?;
    let down = price(&market.with_spot(spot - h), instrument, method)?;
    let delta = (up - down) / (2.0 * h);
    let gamma = (up - 2.0 * base + down) / (h * h);

    let dv = config.vol_bump_absolute;
    let vol_up = price(
        &market.with_volatility(market.effective_volatility() + dv),
        instrument,
        method,
    )?;
    let vega = (vol_up - base) / dv * POINT;

    let expiry = instrument.expiry();
    let shortened = (expiry - config.time_bump_years).max(0.0);
    let elapsed_days = (expiry - shortened) / ONE_DAY;
    let theta = if elapsed_days > 0.0 {
        let decayed = price(market, &instrument.with_expiry(shortened), method)?;
        (decayed - base) / elapsed_days
    } else {
        0.0
    };

    let dr = config.rate_bump_absolute;
    let rate_up = price(&market.with_rate(market.rate + dr), instrument, method)?;
    let rho = (rate_up - base) / dr * POINT;

    debug!(
        instrument = instrument.kind(),
        method = method.name(),
        seed = ?method.seed(),
        base,
        delta,
        gamma,
        "bump-and-revalue Greeks"
    );

    Ok(PriceQuote {
        price: base,
        delta,
        gamma,
        vega,
        theta,
        rho,
    })
}
