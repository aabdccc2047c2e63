//! # Pricing Kernel
//!
//! Single entry point that validates a request, dispatches to the engine
//! selected by the [`PricingMethod`], and applies the numerical fallback.
//!
//! ## Pipeline
//!
//! 1. Validate market, instrument, method pairing and resource limits
//! 2. Dispatch (static `match` over instrument and method)
//! 3. Replace a non-finite price by a safe value, logging a warning
//!
//! | Instrument | Method | Engine |
//! |------------|--------|--------|
//! | Vanilla | `ClosedForm` | Black-Scholes-Merton |
//! | Vanilla, American | `BinomialLattice` | [`price_crr`] |
//! | Digital | `ClosedForm` | [`digital_price`] |
//! | Barrier | `McDiscrete`, `McBridge` | [`price_barrier`] |
//! | Asian | `GeometricClosed` | [`geometric_asian`] |
//! | Asian | `ArithmeticMc` | [`price_arithmetic_asian`] |
//! | Forward | `DiscountedValue` | `S·e^(-qT) - K·e^(-rT)` |

use pricer_core::types::{MarketState, PricingError};
use pricer_models::analytical::{digital_price, geometric_asian, BlackScholes};
use pricer_models::instruments::InstrumentSpec;
use pricer_models::methods::PricingMethod;
use tracing::warn;

use crate::lattice::{price_crr, Exercise};
use crate::mc::{
    price_arithmetic_asian, price_barrier, validate_limits, BarrierTerms, McEstimate, Monitoring,
};

/// Prices an instrument with the requested method.
///
/// # Errors
///
/// - `InvalidInput` naming the offending market or instrument field
/// - `UnsupportedMethod` for an illegal instrument/method pairing
/// - `ResourceLimit` for zero or oversized path, step or fixing counts
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketState;
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
/// use pricer_models::methods::PricingMethod;
/// use pricer_pricing::kernel::price;
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let call = InstrumentSpec::Vanilla {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
/// };
/// let value = price(&market, &call, &PricingMethod::ClosedForm).unwrap();
/// assert!((value - 10.4506).abs() < 1e-3);
/// ```
pub fn price(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
) -> Result<f64, PricingError> {
    price_with_error(market, instrument, method).map(|estimate| estimate.price)
}

/// Prices an instrument and reports the Monte Carlo standard error.
///
/// Deterministic methods report a standard error of zero.
///
/// # Errors
///
/// Same as [`price`].
pub fn price_with_error(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
) -> Result<McEstimate, PricingError> {
    validate_request(market, instrument, method)?;
    let estimate = dispatch(market, instrument, method)?;
    Ok(apply_fallback(market, instrument, method, estimate))
}

/// Runs every check that precedes dispatch.
///
/// # Errors
///
/// Same as [`price`].
pub fn validate_request(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
) -> Result<(), PricingError> {
    market.validate()?;
    instrument.validate()?;
    method.ensure_supported(instrument)?;
    validate_limits(method)
}

fn black_scholes(market: &MarketState) -> Result<BlackScholes, PricingError> {
    Ok(BlackScholes::new(
        market.spot,
        market.rate,
        market.dividend,
        market.effective_volatility(),
    )?)
}

fn dispatch(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
) -> Result<McEstimate, PricingError> {
    match (*instrument, *method) {
        (
            InstrumentSpec::Vanilla {
                option_type,
                strike,
                expiry,
            },
            PricingMethod::ClosedForm,
        ) => Ok(McEstimate::exact(
            black_scholes(market)?.price(option_type, strike, expiry),
        )),

        (
            InstrumentSpec::Digital {
                option_type,
                strike,
                expiry,
                payout,
            },
            PricingMethod::ClosedForm,
        ) => Ok(McEstimate::exact(digital_price(
            &black_scholes(market)?,
            option_type,
            strike,
            expiry,
            payout,
        ))),

        (
            InstrumentSpec::Vanilla {
                option_type,
                strike,
                expiry,
            },
            PricingMethod::BinomialLattice { steps },
        ) => price_crr(market, option_type, strike, expiry, steps, Exercise::European)
            .map(McEstimate::exact),

        (
            InstrumentSpec::American {
                option_type,
                strike,
                expiry,
            },
            PricingMethod::BinomialLattice { steps },
        ) => price_crr(market, option_type, strike, expiry, steps, Exercise::American)
            .map(McEstimate::exact),

        (InstrumentSpec::Barrier { .. }, PricingMethod::McDiscrete(sim)) => {
            let terms = barrier_terms(instrument, method)?;
            price_barrier(market, &terms, &sim, Monitoring::Discrete)
        }

        (InstrumentSpec::Barrier { .. }, PricingMethod::McBridge(sim)) => {
            let terms = barrier_terms(instrument, method)?;
            price_barrier(market, &terms, &sim, Monitoring::Bridge)
        }

        (
            InstrumentSpec::Asian {
                option_type,
                strike,
                expiry,
            },
            PricingMethod::GeometricClosed,
        ) => Ok(McEstimate::exact(
            geometric_asian(
                option_type,
                market.spot,
                strike,
                market.rate,
                market.dividend,
                market.effective_volatility(),
                expiry,
            )
            .price,
        )),

        (
            InstrumentSpec::Asian {
                option_type,
                strike,
                expiry,
            },
            PricingMethod::ArithmeticMc {
                paths,
                fixings,
                seed,
            },
        ) => price_arithmetic_asian(market, option_type, strike, expiry, paths, fixings, seed),

        (
            InstrumentSpec::Forward {
                delivery_price,
                expiry,
            },
            PricingMethod::DiscountedValue,
        ) => Ok(McEstimate::exact(
            market.spot * market.dividend_factor(expiry)
                - delivery_price * market.discount_factor(expiry),
        )),

        _ => Err(unsupported(instrument, method)),
    }
}

fn unsupported(instrument: &InstrumentSpec, method: &PricingMethod) -> PricingError {
    PricingError::UnsupportedMethod {
        instrument: instrument.kind().to_string(),
        method: method.name().to_string(),
    }
}

fn barrier_terms(
    instrument: &InstrumentSpec,
    method: &PricingMethod,
) -> Result<BarrierTerms, PricingError> {
    BarrierTerms::from_instrument(instrument).ok_or_else(|| unsupported(instrument, method))
}

/// Replaces a non-finite price.
///
/// Barriers fall back to the vanilla closed form, everything else to the
/// intrinsic value at spot.
fn apply_fallback(
    market: &MarketState,
    instrument: &InstrumentSpec,
    method: &PricingMethod,
    estimate: McEstimate,
) -> McEstimate {
    if estimate.price.is_finite() {
        return estimate;
    }

    let intrinsic = instrument.intrinsic_value(market.spot);
    let fallback = match *instrument {
        InstrumentSpec::Barrier {
            option_type,
            strike,
            expiry,
            ..
        } => black_scholes(market)
            .map(|model| model.price(option_type, strike, expiry))
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(intrinsic),
        _ => intrinsic,
    };

    warn!(
        instrument = instrument.kind(),
        method = method.name(),
        raw = estimate.price,
        fallback,
        "non-finite price replaced by fallback value"
    );
    McEstimate::exact(fallback)
}
