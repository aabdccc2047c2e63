//! Arithmetic average-price options by path simulation.
//!
//! The average is taken over `fixings` equally spaced dates
//! `tᵢ = i·T/fixings, i = 1..=fixings`; the valuation-date spot is not
//! part of the average.

use pricer_core::types::{MarketState, PricingError};
use pricer_models::analytical::EXPIRY_EPSILON;
use pricer_models::instruments::OptionType;
use tracing::debug;

use super::estimate::{McEstimate, PayoffStats};
use super::paths::GbmStepper;
use crate::rng::PricerRng;

/// Prices an arithmetic average-price option.
///
/// An expired contract returns the intrinsic value against spot.
///
/// # Errors
///
/// The engine itself does not fail; counts are validated by
/// [`validate_limits`](super::validate_limits) before dispatch. The
/// `Result` keeps the signature aligned with the other engines.
pub fn price_arithmetic_asian(
    market: &MarketState,
    option_type: OptionType,
    strike: f64,
    expiry: f64,
    paths: usize,
    fixings: usize,
    seed: u64,
) -> Result<McEstimate, PricingError> {
    if expiry <= EXPIRY_EPSILON {
        return Ok(McEstimate::exact(option_type.intrinsic(market.spot, strike)));
    }

    let stepper = GbmStepper::new(market, expiry, fixings);
    let mut rng = PricerRng::from_seed(seed);
    let mut stats = PayoffStats::default();

    for _ in 0..paths {
        let mut spot = market.spot;
        let mut sum = 0.0;
        for _ in 0..fixings {
            spot = stepper.step(spot, rng.gen_normal());
            sum += spot;
        }
        stats.push(option_type.intrinsic(sum / fixings as f64, strike));
    }

    let estimate = stats.finish(market.discount_factor(expiry));
    debug!(
        paths,
        fixings,
        seed,
        price = estimate.price,
        std_error = estimate.std_error,
        "arithmetic Asian simulation complete"
    );
    Ok(estimate)
}
