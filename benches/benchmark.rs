//! Benchmark to measure the closed-form response evaluator on a dense
//! time grid, one case per solution branch.
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use damping_explorer::core::response::{evaluate, SystemParameters};
use damping_explorer::core::time_grid::TimeGrid;

fn benchmark(c: &mut Criterion) {
    let params = SystemParameters {
        mass: 1.0,
        stiffness: 100.0,
        initial_displacement: 1.0,
        initial_velocity: 0.0,
    };
    let time_samples = TimeGrid {
        t_final: 5.0,
        sample_count: 10_000,
    }
    .samples();

    c.bench_function("evaluate_underdamped", |b| {
        b.iter(|| evaluate(black_box(0.1), &params, &time_samples));
    });
    c.bench_function("evaluate_critically_damped", |b| {
        b.iter(|| evaluate(black_box(1.0), &params, &time_samples));
    });
    c.bench_function("evaluate_overdamped", |b| {
        b.iter(|| evaluate(black_box(2.0), &params, &time_samples));
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
