//! Cox-Ross-Rubinstein binomial tree.
//!
//! ```text
//! dt = T / n
//! u  = exp(σ√dt),  d = 1/u
//! p  = (exp((r - q)dt) - d) / (u - d)
//! V(i, j) = e^(-r dt) · (p·V(i+1, j+1) + (1 - p)·V(i+1, j))
//! ```
//!
//! American exercise replaces every node value with
//! `max(continuation, intrinsic)`.

use pricer_core::types::{MarketState, PricingError};
use pricer_models::analytical::{BlackScholes, EXPIRY_EPSILON};
use pricer_models::instruments::OptionType;
use tracing::{debug, warn};

/// Exercise style for lattice valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// Exercise at expiry only
    European,
    /// Exercise at any node
    American,
}

/// Prices a call or put on a CRR tree with `steps` time steps.
///
/// An expired contract returns its intrinsic value.
///
/// When carry dominates diffusion over a single step the risk-neutral
/// probability leaves `[0, 1]` and the tree cannot be built. The price then
/// falls back to the Black-Scholes-Merton value at the floored volatility;
/// American exercise also takes the intrinsic value if larger.
///
/// # Errors
///
/// Returns `PricingError::InvalidInput` when the fallback model rejects the
/// market (non-positive spot).
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketState;
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::lattice::{price_crr, Exercise};
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let european = price_crr(&market, OptionType::Put, 100.0, 1.0, 200, Exercise::European).unwrap();
/// let american = price_crr(&market, OptionType::Put, 100.0, 1.0, 200, Exercise::American).unwrap();
/// assert!(american > european);
/// ```
pub fn price_crr(
    market: &MarketState,
    option_type: OptionType,
    strike: f64,
    expiry: f64,
    steps: usize,
    exercise: Exercise,
) -> Result<f64, PricingError> {
    let spot = market.spot;
    if expiry <= EXPIRY_EPSILON {
        return Ok(option_type.intrinsic(spot, strike));
    }

    let steps = steps.max(1);
    let dt = expiry / steps as f64;
    let vol = market.effective_volatility();
    let u = (vol * dt.sqrt()).exp();
    let d = 1.0 / u;
    let growth = ((market.rate - market.dividend) * dt).exp();
    let p = (growth - d) / (u - d);

    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return degenerate_tree_value(market, option_type, strike, expiry, exercise, p, steps);
    }

    let disc = (-market.rate * dt).exp();
    let disc_p = disc * p;
    let disc_1mp = disc * (1.0 - p);
    let ratio = u / d;

    let mut values = vec![0.0_f64; steps + 1];
    let mut node_spot = spot * d.powi(steps as i32);
    for value in values.iter_mut() {
        *value = option_type.intrinsic(node_spot, strike);
        node_spot *= ratio;
    }

    for level in (0..steps).rev() {
        let mut node_spot = spot * d.powi(level as i32);
        for j in 0..=level {
            let continuation = disc_p.mul_add(values[j + 1], disc_1mp * values[j]);
            values[j] = match exercise {
                Exercise::European => continuation,
                Exercise::American => continuation.max(option_type.intrinsic(node_spot, strike)),
            };
            node_spot *= ratio;
        }
    }

    debug!(steps, p, ?exercise, price = values[0], "lattice induction complete");
    Ok(values[0])
}

fn degenerate_tree_value(
    market: &MarketState,
    option_type: OptionType,
    strike: f64,
    expiry: f64,
    exercise: Exercise,
    p: f64,
    steps: usize,
) -> Result<f64, PricingError> {
    let model = BlackScholes::new(
        market.spot,
        market.rate,
        market.dividend,
        market.effective_volatility(),
    )?;
    let european = model.price(option_type, strike, expiry);
    let fallback = match exercise {
        Exercise::European => european,
        Exercise::American => european.max(option_type.intrinsic(market.spot, strike)),
    };
    warn!(
        steps,
        p,
        ?exercise,
        fallback,
        "risk-neutral probability outside [0, 1], using closed-form value"
    );
    Ok(fallback)
}
