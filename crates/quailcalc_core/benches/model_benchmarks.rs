//! Criterion benchmarks for quailcalc_core
//!
//! Run with: cargo bench -p quailcalc_core

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quailcalc_core::{FarmInputs, analyze, compute, sensitivity_csv_string, sweep};

fn bench_compute(c: &mut Criterion) {
    let inputs = FarmInputs::default();
    c.bench_function("compute", |b| b.iter(|| compute(black_box(&inputs))));
}

fn bench_sweep(c: &mut Criterion) {
    let inputs = FarmInputs::default();
    let results = compute(&inputs);
    c.bench_function("sweep", |b| {
        b.iter(|| {
            sweep(
                black_box(&results),
                black_box(inputs.chick_price),
                black_box(inputs.cycle_weeks),
            )
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let (_, sensitivity) = analyze(&FarmInputs::default());
    c.bench_function("sensitivity_csv", |b| {
        b.iter(|| sensitivity_csv_string(black_box(&sensitivity)))
    });
}

criterion_group!(benches, bench_compute, bench_sweep, bench_export);
criterion_main!(benches);
