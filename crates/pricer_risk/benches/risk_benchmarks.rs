//! Criterion benchmarks for portfolio aggregation and scenario grids.
//!
//! Benchmarks cover:
//! - Snapshot aggregation with varying leg counts
//! - Payoff curve resolution
//! - Parallel scenario grid evaluation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::MarketState;
use pricer_models::instruments::{InstrumentSpec, OptionType};
use pricer_risk::portfolio::{PortfolioLeg, SimulationShock};
use pricer_risk::scenarios::{payoff_curve, scenario_grid, AxisKind, ShockAxis};
use pricer_risk::{aggregate, RiskConfig};

fn market() -> MarketState {
    MarketState::new(100.0, 0.05, 0.0, 0.2)
}

/// Alternating long calls and short puts across a strike ladder.
fn ladder(n_legs: usize) -> Vec<PortfolioLeg> {
    (0..n_legs)
        .map(|i| {
            let (option_type, quantity) = if i % 2 == 0 {
                (OptionType::Call, 1.0)
            } else {
                (OptionType::Put, -1.0)
            };
            let instrument = InstrumentSpec::Vanilla {
                option_type,
                strike: 80.0 + (i % 40) as f64,
                expiry: 0.25 + (i % 4) as f64 * 0.25,
            };
            PortfolioLeg::new(format!("L{i}"), instrument, quantity)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let m = market();
    let shock = SimulationShock::default();
    let config = RiskConfig::default();
    let mut group = c.benchmark_group("aggregate");

    for n_legs in [1, 4, 16] {
        let legs = ladder(n_legs);
        group.bench_with_input(BenchmarkId::new("legs", n_legs), &legs, |b, legs| {
            b.iter(|| aggregate(black_box(&m), black_box(legs), &shock, &config))
        });
    }
    group.finish();
}

fn bench_payoff_curve(c: &mut Criterion) {
    let m = market();
    let legs = ladder(4);
    let shock = SimulationShock::default();
    let mut group = c.benchmark_group("payoff_curve");

    for scan_steps in [50, 100, 400] {
        let config = RiskConfig {
            scan_steps,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::new("scan_steps", scan_steps),
            &config,
            |b, config| b.iter(|| payoff_curve(&m, black_box(&legs), &shock, config)),
        );
    }
    group.finish();
}

fn bench_scenario_grid(c: &mut Criterion) {
    let m = market();
    let legs = ladder(8);
    let config = RiskConfig::default();
    let x = ShockAxis::range(AxisKind::SpotPct, -30.0, 30.0, 24);
    let y = ShockAxis::range(AxisKind::VolAbs, -0.1, 0.1, 20);

    let mut group = c.benchmark_group("scenario_grid");
    group.sample_size(20);
    group.bench_function("spot_x_vol_25x21", |b| {
        b.iter(|| scenario_grid(&m, black_box(&legs), &x, &y, &config))
    });
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_payoff_curve, bench_scenario_grid);
criterion_main!(benches);
