//! Benchmarks for one generation of phrase evolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use phrase_evolver::{
    compute::evolution::{Dna, FitnessEvaluator, GenomeRng, MatingPool, RandomSource},
    schema::{Alphabet, EvolutionConfig},
    EvolutionEngine,
};

const TARGET: &str = "I think, therefore I am.";

fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");

    for size in [50, 250, 1000] {
        let config = EvolutionConfig {
            population_size: size,
            mutation_rate: 0.01,
            random_seed: Some(42),
            ..EvolutionConfig::for_target(TARGET)
        };
        let mut engine = EvolutionEngine::new(config).expect("valid config");
        engine.setup();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                engine.step();
                black_box(engine.generation());
            });
        });
    }

    group.finish();
}

fn bench_mating_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("mating_pool");
    let evaluator = FitnessEvaluator::new(TARGET).expect("non-empty target");
    let alphabet = Alphabet::default();

    for size in [50, 250, 1000] {
        let mut rng = GenomeRng::new(7);
        let entities: Vec<Dna> = (0..size)
            .map(|_| evaluator.evaluate(rng.random_dna(TARGET.len(), &alphabet)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| MatingPool::build(black_box(&entities), 100));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation_step, bench_mating_pool);
criterion_main!(benches);
