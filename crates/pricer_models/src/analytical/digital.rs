//! Cash-or-nothing digital options under Black-Scholes-Merton.
//!
//! A digital call pays `payout` if `S_T > K`, a digital put pays `payout`
//! if `S_T < K`. The price is `payout·e^(-rT)·N(±d₂)`.

use super::black_scholes::{BlackScholes, Greeks, EXPIRY_EPSILON};
use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionType;

/// Prices a cash-or-nothing digital option.
///
/// At expiry the indicator payoff is returned.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{digital_price, BlackScholes};
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = digital_price(&bs, OptionType::Call, 100.0, 1.0, 1.0);
/// let put = digital_price(&bs, OptionType::Put, 100.0, 1.0, 1.0);
///
/// // Digital call + digital put = discounted payout
/// assert!((call + put - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
pub fn digital_price(
    model: &BlackScholes,
    option_type: OptionType,
    strike: f64,
    expiry: f64,
    payout: f64,
) -> f64 {
    if expiry <= EXPIRY_EPSILON {
        let in_the_money = match option_type {
            OptionType::Call => model.spot() > strike,
            OptionType::Put => model.spot() < strike,
        };
        return if in_the_money { payout } else { 0.0 };
    }

    let df = (-model.rate() * expiry).exp();
    let d2 = model.d2(strike, expiry);
    payout * df * norm_cdf(option_type.sign() * d2)
}

/// Analytical Greeks of a cash-or-nothing digital option.
///
/// Units follow [`Greeks`]: vega and rho per unit change, theta per year.
pub fn digital_greeks(
    model: &BlackScholes,
    option_type: OptionType,
    strike: f64,
    expiry: f64,
    payout: f64,
) -> Greeks {
    if expiry <= EXPIRY_EPSILON {
        return Greeks::default();
    }

    let spot = model.spot();
    let vol = model.volatility();
    let rate = model.rate();
    let sqrt_t = expiry.sqrt();
    let df = (-rate * expiry).exp();
    let d1 = model.d1(strike, expiry);
    let d2 = model.d2(strike, expiry);
    let pdf = norm_pdf(d2);
    let sign = option_type.sign();

    // ∂d₂/∂T for d₂ = (ln(S/K) + bT)/(σ√T), b = r - q - σ²/2
    let carry = rate - model.dividend() - 0.5 * vol * vol;
    let dd2_dt = (carry * expiry - (spot / strike).ln()) / (2.0 * vol * expiry * sqrt_t);

    Greeks {
        delta: sign * payout * df * pdf / (spot * vol * sqrt_t),
        gamma: -sign * payout * df * pdf * d1 / (spot * spot * vol * vol * expiry),
        vega: -sign * payout * df * pdf * d1 / vol,
        theta: payout * df * (rate * norm_cdf(sign * d2) - sign * pdf * dd2_dt),
        rho: payout * df * (-expiry * norm_cdf(sign * d2) + sign * pdf * sqrt_t / vol),
    }
}
