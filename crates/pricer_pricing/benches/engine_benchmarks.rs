//! Criterion benchmarks for the pricing kernel.
//!
//! Benchmarks cover:
//! - Closed-form pricing and analytic Greeks
//! - CRR lattice depth scaling
//! - Barrier simulation with discrete and bridge monitoring
//! - Bump-and-revalue Greeks on a simulated price

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::MarketState;
use pricer_models::instruments::{BarrierDirection, InstrumentSpec, KnockType, OptionType};
use pricer_models::methods::{PricingMethod, SimulationParams};
use pricer_pricing::greeks::estimate;
use pricer_pricing::kernel::price;

fn market() -> MarketState {
    MarketState::new(100.0, 0.05, 0.0, 0.2)
}

fn bench_closed_form(c: &mut Criterion) {
    let call = InstrumentSpec::Vanilla {
        option_type: OptionType::Call,
        strike: 100.0,
        expiry: 1.0,
    };
    let m = market();

    c.bench_function("closed_form_price", |b| {
        b.iter(|| price(black_box(&m), black_box(&call), &PricingMethod::ClosedForm))
    });
    c.bench_function("closed_form_greeks", |b| {
        b.iter(|| estimate(black_box(&m), black_box(&call), &PricingMethod::ClosedForm))
    });
}

fn bench_lattice(c: &mut Criterion) {
    let put = InstrumentSpec::American {
        option_type: OptionType::Put,
        strike: 100.0,
        expiry: 1.0,
    };
    let m = market();
    let mut group = c.benchmark_group("crr_american_put");

    for steps in [100, 500, 2_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| price(&m, &put, &PricingMethod::BinomialLattice { steps }))
        });
    }
    group.finish();
}

fn bench_barrier(c: &mut Criterion) {
    let barrier = InstrumentSpec::Barrier {
        option_type: OptionType::Call,
        strike: 100.0,
        expiry: 1.0,
        barrier: 120.0,
        direction: BarrierDirection::Up,
        knock: KnockType::Out,
    };
    let sim = SimulationParams {
        paths: 10_000,
        steps: 50,
        seed: 42,
    };
    let m = market();
    let mut group = c.benchmark_group("barrier_10k_paths");
    group.sample_size(20);

    group.bench_function("discrete", |b| {
        b.iter(|| price(&m, &barrier, &PricingMethod::McDiscrete(sim)))
    });
    group.bench_function("bridge", |b| {
        b.iter(|| price(&m, &barrier, &PricingMethod::McBridge(sim)))
    });
    group.bench_function("bridge_greeks", |b| {
        b.iter(|| estimate(&m, &barrier, &PricingMethod::McBridge(sim)))
    });
    group.finish();
}

criterion_group!(benches, bench_closed_form, bench_lattice, bench_barrier);
criterion_main!(benches);
