//! Criterion benchmarks for pricer_models closed-form formulas.
//!
//! Benchmarks cover:
//! - Black-Scholes-Merton price and full Greeks
//! - Digital option price
//! - Geometric Asian closed form

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{digital_price, geometric_asian, BlackScholes};
use pricer_models::instruments::OptionType;

fn bench_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");
    let model = BlackScholes::new(100.0, 0.05, 0.01, 0.2).unwrap();

    for strike in [80.0, 100.0, 120.0] {
        group.bench_with_input(BenchmarkId::new("price_call", strike), &strike, |b, &k| {
            b.iter(|| model.price_call(black_box(k), black_box(1.0)));
        });
        group.bench_with_input(BenchmarkId::new("greeks", strike), &strike, |b, &k| {
            b.iter(|| model.greeks(OptionType::Call, black_box(k), black_box(1.0)));
        });
    }

    group.finish();
}

fn bench_exotic_closed_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("exotic_closed_forms");
    let model = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();

    group.bench_function("digital_call", |b| {
        b.iter(|| digital_price(&model, OptionType::Call, black_box(100.0), 1.0, 1.0));
    });
    group.bench_function("geometric_asian_call", |b| {
        b.iter(|| {
            geometric_asian(
                OptionType::Call,
                black_box(100.0),
                100.0,
                0.05,
                0.0,
                0.2,
                1.0,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_black_scholes, bench_exotic_closed_forms);
criterion_main!(benches);
