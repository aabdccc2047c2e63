//! Integration tests for portfolio aggregation.
//!
//! These tests verify:
//! - Net Greeks against closed-form expectations
//! - Breakeven detection against strike plus premium
//! - Per-leg error attribution through every entry point
//! - Deterministic scenario grids with simulated legs

use approx::assert_relative_eq;
use pricer_core::types::{MarketState, PricingError};
use pricer_models::analytical::norm_cdf;
use pricer_models::instruments::{BarrierDirection, InstrumentSpec, KnockType, OptionType};
use pricer_models::methods::{PricingMethod, SimulationParams};
use pricer_pricing::kernel::price;
use pricer_risk::portfolio::{LegGroup, LegId, PortfolioError, PortfolioLeg, SimulationShock};
use pricer_risk::scenarios::{payoff_curve, scenario_grid, AxisKind, ShockAxis};
use pricer_risk::{aggregate, aggregate_groups, RiskConfig};
use proptest::prelude::*;

fn market() -> MarketState {
    MarketState::new(100.0, 0.05, 0.0, 0.2)
}

fn vanilla(option_type: OptionType, strike: f64, expiry: f64) -> InstrumentSpec {
    InstrumentSpec::Vanilla {
        option_type,
        strike,
        expiry,
    }
}

fn barrier_out() -> InstrumentSpec {
    InstrumentSpec::Barrier {
        option_type: OptionType::Call,
        strike: 100.0,
        expiry: 0.5,
        barrier: 130.0,
        direction: BarrierDirection::Up,
        knock: KnockType::Out,
    }
}

fn small_sim(seed: u64) -> PricingMethod {
    PricingMethod::McBridge(SimulationParams {
        paths: 2_000,
        steps: 20,
        seed,
    })
}

// ============================================================================
// Net Greeks and breakevens
// ============================================================================

#[test]
fn test_straddle_net_delta_matches_closed_form() {
    let market = MarketState::new(100.0, 0.05, 0.02, 0.25);
    let (strike, expiry) = (105.0, 0.75);
    let legs = vec![
        PortfolioLeg::new("call", vanilla(OptionType::Call, strike, expiry), 1.0),
        PortfolioLeg::new("put", vanilla(OptionType::Put, strike, expiry), 1.0),
    ];

    let snapshot = aggregate(
        &market,
        &legs,
        &SimulationShock::default(),
        &RiskConfig::default(),
    )
    .unwrap();

    let sigma_sqrt_t = 0.25 * expiry.sqrt();
    let d1 = ((100.0f64 / strike).ln() + (0.05 - 0.02 + 0.5 * 0.25 * 0.25) * expiry) / sigma_sqrt_t;
    let expected = (-0.02 * expiry).exp() * (2.0 * norm_cdf(d1) - 1.0);

    assert_relative_eq!(snapshot.net_greeks.delta, expected, epsilon = 1e-9);
    assert!(snapshot.net_greeks.gamma > 0.0);
    assert!(snapshot.net_greeks.vega > 0.0);
}

#[test]
fn test_long_atm_call_breakeven_is_strike_plus_premium() {
    let call = vanilla(OptionType::Call, 100.0, 1.0);
    let premium = price(&market(), &call, &PricingMethod::ClosedForm).unwrap();
    let legs = vec![PortfolioLeg::new("C", call, 1.0)];

    let snapshot = aggregate(
        &market(),
        &legs,
        &SimulationShock::default(),
        &RiskConfig::default(),
    )
    .unwrap();

    assert_eq!(snapshot.breakevens.len(), 1);
    assert_relative_eq!(snapshot.breakevens[0], 100.0 + premium, epsilon = 1e-9);
    assert_relative_eq!(snapshot.breakevens[0], 110.4506, epsilon = 1e-3);
    assert_relative_eq!(snapshot.max_loss.unwrap(), premium, epsilon = 1e-9);
    assert_eq!(snapshot.max_profit, None);
}

#[test]
fn test_bull_call_spread_is_bounded() {
    let legs = vec![
        PortfolioLeg::new("long", vanilla(OptionType::Call, 95.0, 0.5), 1.0),
        PortfolioLeg::new("short", vanilla(OptionType::Call, 105.0, 0.5), -1.0),
    ];
    let snapshot = aggregate(
        &market(),
        &legs,
        &SimulationShock::default(),
        &RiskConfig::default(),
    )
    .unwrap();

    let debit = snapshot.total_value;
    assert!(debit > 0.0 && debit < 10.0);
    assert_relative_eq!(snapshot.max_loss.unwrap(), debit, epsilon = 1e-9);
    assert_relative_eq!(snapshot.max_profit.unwrap(), 10.0 - debit, epsilon = 1e-9);
    assert_eq!(snapshot.breakevens.len(), 1);
    assert_relative_eq!(snapshot.breakevens[0], 95.0 + debit, epsilon = 1e-9);
}

#[test]
fn test_days_passed_moves_model_curve_towards_expiry() {
    let legs = vec![PortfolioLeg::new("C", vanilla(OptionType::Call, 100.0, 0.25), 1.0)];
    let config = RiskConfig::default();
    let fresh = payoff_curve(&market(), &legs, &SimulationShock::default(), &config).unwrap();
    let aged = payoff_curve(
        &market(),
        &legs,
        &SimulationShock {
            days_passed: 80.0,
            ..Default::default()
        },
        &config,
    )
    .unwrap();

    let gap = |points: &[pricer_risk::scenarios::PayoffPoint]| {
        points
            .iter()
            .map(|p| (p.model_pnl - p.expiry_pnl).abs())
            .sum::<f64>()
    };
    assert!(gap(&aged.points) < gap(&fresh.points));
    assert_eq!(fresh.points.len(), aged.points.len());
}

// ============================================================================
// Error attribution
// ============================================================================

#[test]
fn test_oversized_simulation_reported_against_leg() {
    let legs = vec![
        PortfolioLeg::new("ok", vanilla(OptionType::Call, 100.0, 1.0), 1.0),
        PortfolioLeg::new("huge", barrier_out(), 1.0).with_method(PricingMethod::McDiscrete(
            SimulationParams {
                paths: 20_000_000,
                steps: 10,
                seed: 1,
            },
        )),
    ];
    let err = aggregate(
        &market(),
        &legs,
        &SimulationShock::default(),
        &RiskConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        PortfolioError::LegPricing {
            ref leg_id,
            source: PricingError::ResourceLimit { .. },
        } if leg_id.as_str() == "huge"
    ));
}

#[test]
fn test_illegal_method_reported_by_grid_and_groups() {
    let forward = InstrumentSpec::Forward {
        delivery_price: 100.0,
        expiry: 1.0,
    };
    let legs = vec![PortfolioLeg::new("fwd", forward, 1.0).with_method(PricingMethod::ClosedForm)];

    let grid_err = scenario_grid(
        &market(),
        &legs,
        &ShockAxis::new(AxisKind::SpotPct, vec![0.0]),
        &ShockAxis::new(AxisKind::VolAbs, vec![0.0]),
        &RiskConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(grid_err, PortfolioError::LegPricing { .. }));

    let groups = vec![LegGroup::new("all", "All", [LegId::new("fwd")])];
    let group_err =
        aggregate_groups(&market(), &legs, &groups, &SimulationShock::default()).unwrap_err();
    assert!(matches!(
        group_err,
        PortfolioError::LegPricing {
            source: PricingError::UnsupportedMethod { .. },
            ..
        }
    ));
}

// ============================================================================
// Simulated legs
// ============================================================================

#[test]
fn test_grid_with_simulated_leg_is_reproducible() {
    let legs = vec![
        PortfolioLeg::new("ko", barrier_out(), 2.0).with_method(small_sim(11)),
        PortfolioLeg::new("hedge", vanilla(OptionType::Put, 95.0, 0.5), 1.0),
    ];
    let x = ShockAxis::range(AxisKind::SpotPct, -10.0, 10.0, 4);
    let y = ShockAxis::range(AxisKind::VolAbs, -0.05, 0.05, 2);
    let config = RiskConfig::default();

    let first = scenario_grid(&market(), &legs, &x, &y, &config).unwrap();
    let second = scenario_grid(&market(), &legs, &x, &y, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.pnl[1][2], 0.0);
}

#[test]
fn test_group_valuation_sums_to_portfolio() {
    let legs = vec![
        PortfolioLeg::new("ko", barrier_out(), 1.0)
            .with_method(small_sim(5))
            .with_group("exotic"),
        PortfolioLeg::new("c", vanilla(OptionType::Call, 100.0, 1.0), 1.0).with_group("vanilla"),
        PortfolioLeg::new("p", vanilla(OptionType::Put, 90.0, 1.0), -1.0).with_group("vanilla"),
    ];
    let groups = vec![
        LegGroup::new("exotic", "Exotics", []),
        LegGroup::new("vanilla", "Vanillas", []),
    ];
    let shock = SimulationShock {
        spot_shock_pct: 3.0,
        ..Default::default()
    };

    let by_group = aggregate_groups(&market(), &legs, &groups, &shock).unwrap();
    let snapshot = aggregate(&market(), &legs, &shock, &RiskConfig::default()).unwrap();

    let group_total: f64 = by_group.iter().map(|g| g.value).sum();
    assert_relative_eq!(group_total, snapshot.total_value, epsilon = 1e-10);
    let group_delta: f64 = by_group.iter().map(|g| g.net_greeks.delta).sum();
    assert_relative_eq!(group_delta, snapshot.net_greeks.delta, epsilon = 1e-10);
}

// ============================================================================
// Serialisation
// ============================================================================

#[test]
fn test_snapshot_json_is_camel_case() {
    let legs = vec![PortfolioLeg::new("C", vanilla(OptionType::Call, 100.0, 1.0), 1.0)];
    let snapshot = aggregate(
        &market(),
        &legs,
        &SimulationShock::default(),
        &RiskConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert!(json.get("totalValue").is_some());
    assert!(json.get("netGreeks").and_then(|g| g.get("delta")).is_some());
    assert!(json["maxProfit"].is_null());
    assert!(json["maxLoss"].is_number());
    assert_eq!(json["breakevens"].as_array().map(Vec::len), Some(1));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_value_is_linear_in_quantity(
        quantity in -10.0f64..10.0,
        strike in 70.0f64..130.0,
        spot_shock in -20.0f64..20.0,
    ) {
        let shock = SimulationShock { spot_shock_pct: spot_shock, ..Default::default() };
        let config = RiskConfig::default();
        let call = vanilla(OptionType::Call, strike, 0.5);

        let unit = aggregate(&market(), &[PortfolioLeg::new("C", call, 1.0)], &shock, &config).unwrap();
        let sized = aggregate(&market(), &[PortfolioLeg::new("C", call, quantity)], &shock, &config).unwrap();

        prop_assert!((sized.total_value - quantity * unit.total_value).abs() < 1e-9);
        prop_assert!((sized.net_greeks.delta - quantity * unit.net_greeks.delta).abs() < 1e-9);
    }

    #[test]
    fn prop_breakevens_are_sorted_and_in_window(strike in 80.0f64..120.0) {
        let legs = vec![
            PortfolioLeg::new("C", vanilla(OptionType::Call, strike, 0.5), -1.0),
            PortfolioLeg::new("P", vanilla(OptionType::Put, strike, 0.5), -1.0),
        ];
        let snapshot = aggregate(&market(), &legs, &SimulationShock::default(), &RiskConfig::default()).unwrap();

        prop_assert!(snapshot.breakevens.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(snapshot.breakevens.iter().all(|&b| (50.0..=150.0).contains(&b)));
        prop_assert!(snapshot.max_profit.is_some());
    }
}
