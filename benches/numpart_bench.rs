//! Criterion benchmarks for the partitioning engine.
//!
//! Measures the full generation step plus the two hot inner loops
//! (breeding and evaluation) in isolation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numpart::operators::breed;
use numpart::random::create_rng;
use numpart::{evaluate, generate_population, Engine, EngineConfig, ProblemInstance, ValidationPolicy};

fn bench_engine_step(c: &mut Criterion) {
    c.bench_function("engine_step", |b| {
        let mut engine = Engine::new(EngineConfig::default().with_seed(42)).unwrap();
        b.iter(|| black_box(engine.step().unwrap()));
    });
}

fn bench_breed(c: &mut Criterion) {
    let mut group = c.benchmark_group("breed");
    for length in [20usize, 100, 500] {
        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &length,
            |b, &length| {
                let mut rng = create_rng(42);
                let pool = generate_population(10, length, &mut rng).unwrap();
                b.iter(|| {
                    black_box(
                        breed(&pool, 20, ValidationPolicy::Strict, 100_000, &mut rng)
                            .unwrap(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_population", |b| {
        let mut rng = create_rng(42);
        let instance = ProblemInstance::sample(100, 1, 10_000, &mut rng).unwrap();
        let population = generate_population(20, 100, &mut rng).unwrap();
        b.iter(|| black_box(evaluate(&instance, &population)));
    });
}

criterion_group!(benches, bench_engine_step, bench_breed, bench_evaluate);
criterion_main!(benches);
