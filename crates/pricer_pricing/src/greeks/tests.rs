//! Tests for Greeks estimation and configuration.

use super::*;
use approx::assert_relative_eq;
use pricer_core::types::MarketState;
use pricer_models::instruments::{BarrierDirection, InstrumentSpec, KnockType, OptionType};
use pricer_models::methods::{PricingMethod, SimulationParams};

fn market() -> MarketState {
    MarketState::new(100.0, 0.05, 0.0, 0.2)
}

fn vanilla(option_type: OptionType) -> InstrumentSpec {
    InstrumentSpec::Vanilla {
        option_type,
        strike: 100.0,
        expiry: 1.0,
    }
}

// =============================================================================
// BumpConfig Tests
// =============================================================================

mod bump_config_tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = BumpConfig::default();
        assert_eq!(config.spot_bump_relative, 0.01);
        assert_eq!(config.vol_bump_absolute, 0.01);
        assert_relative_eq!(config.time_bump_years, 1.0 / 365.0);
        assert_eq!(config.rate_bump_absolute, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_invalid_bumps() {
        assert!(matches!(
            BumpConfig::builder().spot_bump_relative(0.0).build(),
            Err(BumpConfigError::InvalidSpotBump(_))
        ));
        assert!(matches!(
            BumpConfig::builder().spot_bump_relative(1.0).build(),
            Err(BumpConfigError::InvalidSpotBump(_))
        ));
        assert!(matches!(
            BumpConfig::builder().vol_bump_absolute(-0.01).build(),
            Err(BumpConfigError::InvalidVolBump(_))
        ));
        assert!(matches!(
            BumpConfig::builder().time_bump_years(2.0).build(),
            Err(BumpConfigError::InvalidTimeBump(_))
        ));
        assert!(matches!(
            BumpConfig::builder().rate_bump_absolute(f64::NAN).build(),
            Err(BumpConfigError::InvalidRateBump(_))
        ));
    }

    #[test]
    fn test_spot_bump_has_floor() {
        let config = BumpConfig::default();
        assert_relative_eq!(config.spot_bump(250.0), 2.5);
        assert_eq!(config.spot_bump(0.0), 1e-8);
    }
}

// =============================================================================
// GreeksMode Tests
// =============================================================================

mod greeks_mode_tests {
    use super::*;

    #[test]
    fn test_closed_form_only_for_vanilla_and_digital() {
        let digital = InstrumentSpec::Digital {
            option_type: OptionType::Call,
            strike: 100.0,
            expiry: 1.0,
            payout: 1.0,
        };
        let asian = InstrumentSpec::Asian {
            option_type: OptionType::Call,
            strike: 100.0,
            expiry: 1.0,
        };
        assert_eq!(
            GreeksMode::select(&digital, &PricingMethod::ClosedForm),
            GreeksMode::ClosedForm
        );
        assert_eq!(
            GreeksMode::select(&asian, &PricingMethod::GeometricClosed),
            GreeksMode::BumpRevalue
        );
    }
}

// =============================================================================
// Estimator Tests
// =============================================================================

mod estimator_tests {
    use super::*;

    #[test]
    fn test_closed_form_call_units() {
        let quote = estimate(&market(), &vanilla(OptionType::Call), &PricingMethod::ClosedForm)
            .unwrap();
        assert_relative_eq!(quote.price, 10.450584, epsilon = 1e-4);
        assert_relative_eq!(quote.delta, 0.636831, epsilon = 1e-4);
        assert_relative_eq!(quote.gamma, 0.018762, epsilon = 1e-4);
        // Vega 37.524 per unit → 0.375 per vol point
        assert_relative_eq!(quote.vega, 0.375240, epsilon = 1e-4);
        // Theta -6.414 per year → per day
        assert_relative_eq!(quote.theta, -6.414028 / 365.0, epsilon = 1e-5);
        // Rho 53.232 per unit → per 1%
        assert_relative_eq!(quote.rho, 0.532325, epsilon = 1e-4);
    }

    #[test]
    fn test_lattice_greeks_match_closed_form() {
        let call = vanilla(OptionType::Call);
        let analytic = estimate(&market(), &call, &PricingMethod::ClosedForm).unwrap();
        let lattice = estimate(
            &market(),
            &call,
            &PricingMethod::BinomialLattice { steps: 500 },
        )
        .unwrap();

        assert_relative_eq!(lattice.delta, analytic.delta, epsilon = 0.01);
        assert_relative_eq!(lattice.vega, analytic.vega, epsilon = 0.01);
        assert_relative_eq!(lattice.rho, analytic.rho, epsilon = 0.02);
        assert!(lattice.theta < 0.0);
    }

    #[test]
    fn test_forward_greeks() {
        let forward = InstrumentSpec::Forward {
            delivery_price: 100.0,
            expiry: 1.0,
        };
        let quote = estimate(&market(), &forward, &PricingMethod::DiscountedValue).unwrap();
        assert_relative_eq!(quote.delta, 1.0, epsilon = 1e-9);
        assert_relative_eq!(quote.gamma, 0.0, epsilon = 1e-6);
        assert_relative_eq!(quote.vega, 0.0, epsilon = 1e-12);
        assert!(quote.rho > 0.0);
    }

    #[test]
    fn test_expired_theta_is_zero() {
        let expired = InstrumentSpec::Asian {
            option_type: OptionType::Put,
            strike: 100.0,
            expiry: 0.0,
        };
        let quote = estimate(&market(), &expired, &PricingMethod::GeometricClosed).unwrap();
        assert_eq!(quote.theta, 0.0);
    }

    #[test]
    fn test_short_expiry_theta_is_per_day() {
        // Half a day left: theta is scaled to a full day
        let call = vanilla(OptionType::Call).with_expiry(0.5 / 365.0);
        let quote = estimate(
            &market(),
            &call,
            &PricingMethod::BinomialLattice { steps: 50 },
        )
        .unwrap();
        let value =
            crate::kernel::price(&market(), &call, &PricingMethod::BinomialLattice { steps: 50 })
                .unwrap();
        // Decays to zero intrinsic value over the remaining half day
        assert_relative_eq!(quote.theta, -2.0 * value, epsilon = 1e-12);
    }

    #[test]
    fn test_barrier_greeks_reuse_seed() {
        let barrier = InstrumentSpec::Barrier {
            option_type: OptionType::Call,
            strike: 100.0,
            expiry: 1.0,
            barrier: 130.0,
            direction: BarrierDirection::Up,
            knock: KnockType::Out,
        };
        let method = PricingMethod::McBridge(SimulationParams {
            paths: 4_000,
            steps: 25,
            seed: 11,
        });
        let first = estimate(&market(), &barrier, &method).unwrap();
        let second = estimate(&market(), &barrier, &method).unwrap();
        assert_eq!(first, second);
        // Common random numbers keep the bumped differences smooth
        assert!(first.delta.is_finite() && first.delta.abs() < 1.0);
        assert!(first.vega < 0.1);
    }

    #[test]
    fn test_validation_error_propagates() {
        let bad = MarketState::new(100.0, f64::NAN, 0.0, 0.2);
        let err = estimate(&bad, &vanilla(OptionType::Put), &PricingMethod::ClosedForm).unwrap_err();
        assert_eq!(err.field(), Some("rate"));
    }
}

// =============================================================================
// PriceQuote Tests
// =============================================================================

mod price_quote_tests {
    use super::*;

    #[test]
    fn test_sanitised_zeroes_non_finite_greeks() {
        let quote = PriceQuote {
            price: 1.0,
            delta: f64::NAN,
            gamma: f64::INFINITY,
            vega: 0.2,
            theta: -0.01,
            rho: f64::NEG_INFINITY,
        }
        .sanitised("Vanilla");
        assert_eq!(quote.delta, 0.0);
        assert_eq!(quote.gamma, 0.0);
        assert_eq!(quote.rho, 0.0);
        assert_eq!(quote.vega, 0.2);
    }

    #[test]
    fn test_sum_of_scaled_quotes() {
        let q = PriceQuote {
            price: 2.0,
            delta: 0.5,
            ..Default::default()
        };
        let total: PriceQuote = [q.scaled(1.0), q.scaled(-3.0)].into_iter().sum();
        assert_relative_eq!(total.price, -4.0);
        assert_relative_eq!(total.delta, -1.0);
    }
}
