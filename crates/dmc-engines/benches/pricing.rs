//! Pricing engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dmc_engines::{digital_call_price, mc_digital_call_price, SimulationParameters};

fn bench_mc_digital(c: &mut Criterion) {
    let params = SimulationParameters::new(100_000, 100.0, 100.0, 0.05, 0.2, 1.0);
    c.bench_function("mc_digital_call_100k", |b| {
        b.iter(|| black_box(mc_digital_call_price(black_box(&params), 42).unwrap()))
    });
}

fn bench_analytic_digital(c: &mut Criterion) {
    c.bench_function("analytic_digital_call", |b| {
        b.iter(|| {
            black_box(digital_call_price(
                black_box(100.0),
                100.0,
                0.05,
                0.2,
                1.0,
            ))
        })
    });
}

criterion_group!(benches, bench_mc_digital, bench_analytic_digital);
criterion_main!(benches);
