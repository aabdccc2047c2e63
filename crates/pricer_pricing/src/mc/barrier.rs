//! Single barrier options by path simulation.
//!
//! Two monitoring schemes are supported:
//!
//! - **Discrete**: the barrier is checked only at the simulated dates
//! - **Bridge**: between consecutive dates the Brownian-bridge crossing
//!   probability
//!   ```text
//!   p = exp(-2 · ln(B/S₍ᵢ₋₁₎) · ln(B/Sᵢ) / (σ² dt))
//!   ```
//!   is compared against a uniform draw, removing most of the upward bias
//!   of discrete monitoring for knock-out contracts.
//!
//! Every path consumes the same number of draws whatever its knock state,
//! so knock-in and knock-out contracts priced from the same seed see
//! identical paths and their prices add up to the vanilla estimate on
//! those paths.

use pricer_core::types::{MarketState, PricingError};
use pricer_models::analytical::{BlackScholes, EXPIRY_EPSILON};
use pricer_models::instruments::{BarrierDirection, InstrumentSpec, KnockType, OptionType};
use pricer_models::methods::SimulationParams;
use tracing::debug;

use super::estimate::{McEstimate, PayoffStats};
use super::paths::GbmStepper;
use crate::rng::PricerRng;

/// How the barrier is observed along a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Monitoring {
    /// Checked at sampled dates only.
    Discrete,
    /// Sampled dates plus the Brownian-bridge crossing test between them.
    Bridge,
}

/// Contract terms of a single barrier option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarrierTerms {
    /// Call or put
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Barrier level
    pub barrier: f64,
    /// Barrier above or below spot
    pub direction: BarrierDirection,
    /// Knock-in or knock-out
    pub knock: KnockType,
}

impl BarrierTerms {
    /// Extracts the terms from a barrier instrument.
    ///
    /// Returns `None` for every other variant.
    pub fn from_instrument(instrument: &InstrumentSpec) -> Option<Self> {
        match *instrument {
            InstrumentSpec::Barrier {
                option_type,
                strike,
                expiry,
                barrier,
                direction,
                knock,
            } => Some(Self {
                option_type,
                strike,
                expiry,
                barrier,
                direction,
                knock,
            }),
            _ => None,
        }
    }

    /// Vanilla payoff if the knock condition is met, otherwise zero.
    #[inline]
    fn payoff(&self, terminal: f64, touched: bool) -> f64 {
        let alive = match self.knock {
            KnockType::Out => !touched,
            KnockType::In => touched,
        };
        if alive {
            self.option_type.intrinsic(terminal, self.strike)
        } else {
            0.0
        }
    }
}

/// Probability that a Brownian bridge between two unbreached samples
/// touched the barrier.
#[inline]
fn crossing_probability(barrier: f64, previous: f64, current: f64, var_dt: f64) -> f64 {
    let exponent = -2.0 * (barrier / previous).ln() * (barrier / current).ln() / var_dt;
    exponent.exp()
}

/// Prices a barrier option by simulation.
///
/// # Degenerate inputs
///
/// - barrier already breached at spot: knock-out is worth zero and
///   knock-in is the vanilla closed-form price, without simulating
/// - expired contract: knock-out pays its intrinsic value, knock-in zero
///
/// # Errors
///
/// Returns `PricingError::InvalidInput` when the vanilla closed form
/// needed for a breached knock-in rejects the market.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketState;
/// use pricer_models::instruments::{BarrierDirection, KnockType, OptionType};
/// use pricer_models::methods::SimulationParams;
/// use pricer_pricing::mc::{price_barrier, BarrierTerms, Monitoring};
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let terms = BarrierTerms {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
///     barrier: 130.0,
///     direction: BarrierDirection::Up,
///     knock: KnockType::Out,
/// };
/// let sim = SimulationParams { paths: 5_000, steps: 50, seed: 7 };
/// let estimate = price_barrier(&market, &terms, &sim, Monitoring::Bridge).unwrap();
/// assert!(estimate.price > 0.0 && estimate.price < 10.46);
/// ```
pub fn price_barrier(
    market: &MarketState,
    terms: &BarrierTerms,
    sim: &SimulationParams,
    monitoring: Monitoring,
) -> Result<McEstimate, PricingError> {
    let spot = market.spot;

    if terms.direction.is_breached(spot, terms.barrier) {
        debug!(
            spot,
            barrier = terms.barrier,
            "barrier breached at valuation, skipping simulation"
        );
        return match terms.knock {
            KnockType::Out => Ok(McEstimate::exact(0.0)),
            KnockType::In => {
                let model = BlackScholes::new(
                    spot,
                    market.rate,
                    market.dividend,
                    market.effective_volatility(),
                )?;
                Ok(McEstimate::exact(model.price(
                    terms.option_type,
                    terms.strike,
                    terms.expiry,
                )))
            }
        };
    }

    if terms.expiry <= EXPIRY_EPSILON {
        return Ok(McEstimate::exact(terms.payoff(spot, false)));
    }

    let stepper = GbmStepper::new(market, terms.expiry, sim.steps);
    let vol = market.effective_volatility();
    let var_dt = vol * vol * stepper.dt();
    let mut rng = PricerRng::from_seed(sim.seed);
    let mut stats = PayoffStats::default();

    for _ in 0..sim.paths {
        let mut previous = spot;
        let mut touched = false;

        for _ in 0..sim.steps {
            let current = stepper.step(previous, rng.gen_normal());

            match monitoring {
                Monitoring::Discrete => {
                    touched |= terms.direction.is_breached(current, terms.barrier);
                }
                Monitoring::Bridge => {
                    // Drawn unconditionally to keep the stream aligned
                    let u = rng.gen_uniform();
                    if !touched {
                        touched = terms.direction.is_breached(current, terms.barrier)
                            || u < crossing_probability(terms.barrier, previous, current, var_dt);
                    }
                }
            }

            previous = current;
        }

        stats.push(terms.payoff(previous, touched));
    }

    let estimate = stats.finish(market.discount_factor(terms.expiry));
    debug!(
        paths = sim.paths,
        steps = sim.steps,
        seed = sim.seed,
        ?monitoring,
        price = estimate.price,
        std_error = estimate.std_error,
        "barrier simulation complete"
    );
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn market() -> MarketState {
        MarketState::new(100.0, 0.05, 0.0, 0.2)
    }

    fn up_call(barrier: f64, knock: KnockType) -> BarrierTerms {
        BarrierTerms {
            option_type: OptionType::Call,
            strike: 100.0,
            expiry: 1.0,
            barrier,
            direction: BarrierDirection::Up,
            knock,
        }
    }

    fn sim(paths: usize) -> SimulationParams {
        SimulationParams {
            paths,
            steps: 50,
            seed: 42,
        }
    }

    #[test]
    fn test_crossing_probability_bounds() {
        // Both samples just below an up barrier: crossing is likely
        let near = crossing_probability(120.0, 119.9, 119.9, 0.04 / 50.0);
        // Both far below: crossing is unlikely
        let far = crossing_probability(120.0, 100.0, 100.0, 0.04 / 50.0);
        assert!(near > 0.9 && near <= 1.0);
        assert!((0.0..1e-6).contains(&far));
    }

    #[test]
    fn test_breached_at_start() {
        let m = market();
        let out = price_barrier(&m, &up_call(95.0, KnockType::Out), &sim(10), Monitoring::Bridge)
            .unwrap();
        assert_eq!(out, McEstimate::exact(0.0));

        let knock_in =
            price_barrier(&m, &up_call(95.0, KnockType::In), &sim(10), Monitoring::Discrete)
                .unwrap();
        assert_relative_eq!(knock_in.price, 10.450584, epsilon = 1e-4);
        assert_eq!(knock_in.std_error, 0.0);
    }

    #[test]
    fn test_expired_contract() {
        let m = market().with_spot(110.0);
        let out = up_call(120.0, KnockType::Out);
        let expired = BarrierTerms { expiry: 0.0, ..out };
        let price = price_barrier(&m, &expired, &sim(10), Monitoring::Bridge).unwrap();
        assert_relative_eq!(price.price, 10.0, epsilon = 1e-12);

        let expired_in = BarrierTerms {
            knock: KnockType::In,
            ..expired
        };
        let price = price_barrier(&m, &expired_in, &sim(10), Monitoring::Bridge).unwrap();
        assert_eq!(price.price, 0.0);
    }

    #[test]
    fn test_distant_barrier_matches_vanilla() {
        let estimate = price_barrier(
            &market(),
            &up_call(10_000.0, KnockType::Out),
            &sim(40_000),
            Monitoring::Bridge,
        )
        .unwrap();
        assert!((estimate.price - 10.450584).abs() < 4.0 * estimate.std_error);
    }

    #[test]
    fn test_bridge_knocks_out_more_than_discrete() {
        let terms = up_call(120.0, KnockType::Out);
        let discrete = price_barrier(&market(), &terms, &sim(30_000), Monitoring::Discrete).unwrap();
        let bridge = price_barrier(&market(), &terms, &sim(30_000), Monitoring::Bridge).unwrap();
        assert!(bridge.price < discrete.price);
    }

    #[test]
    fn test_in_out_share_paths() {
        for monitoring in [Monitoring::Discrete, Monitoring::Bridge] {
            let out = price_barrier(&market(), &up_call(120.0, KnockType::Out), &sim(5_000), monitoring)
                .unwrap();
            let knock_in =
                price_barrier(&market(), &up_call(120.0, KnockType::In), &sim(5_000), monitoring)
                    .unwrap();
            let vanilla =
                price_barrier(&market(), &up_call(1e9, KnockType::Out), &sim(5_000), monitoring)
                    .unwrap();
            // Path-wise identical, so the split is exact up to rounding
            assert_relative_eq!(out.price + knock_in.price, vanilla.price, max_relative = 1e-10);
        }
    }
}
