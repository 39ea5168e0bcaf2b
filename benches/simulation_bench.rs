use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use montecast::core::TimeHorizonSpec;
use montecast::mc::{RandomSource, simulate};
use montecast::models::Gbm;
use std::hint::black_box;

fn benchmark_model() -> Gbm {
    Gbm {
        s0: 100.0,
        mu: 0.05,
        sigma: 0.2,
    }
}

fn bench_simulate_paths(c: &mut Criterion) {
    let model = benchmark_model();
    let horizon = TimeHorizonSpec::years(1.0);
    let source = RandomSource::seeded(42);
    let mut group = c.benchmark_group("simulate_paths");

    for paths in [1_000, 10_000, 50_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(paths), paths, |b, &paths| {
            b.iter(|| {
                let grid = simulate(
                    black_box(&model),
                    black_box(&horizon),
                    paths,
                    black_box(&source),
                )
                .expect("simulation should succeed");
                black_box(grid.num_paths())
            })
        });
    }

    group.finish();
}

fn bench_simulate_timesteps(c: &mut Criterion) {
    let model = benchmark_model();
    let source = RandomSource::seeded(42);
    let paths = 10_000;
    let mut group = c.benchmark_group("simulate_timesteps");

    for years in [0.25, 0.5, 1.0, 2.0].iter() {
        let horizon = TimeHorizonSpec::years(*years);
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon.time_steps()),
            years,
            |b, _| {
                b.iter(|| {
                    let grid = simulate(
                        black_box(&model),
                        black_box(&horizon),
                        paths,
                        black_box(&source),
                    )
                    .expect("simulation should succeed");
                    black_box(grid.time_steps())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_simulate_paths, bench_simulate_timesteps);
criterion_main!(benches);
