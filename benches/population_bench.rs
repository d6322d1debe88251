//! Criterion benchmarks for the generation lifecycle.
//!
//! Uses a synthetic real-valued chromosome to measure pure lifecycle
//! overhead (creation, elitism, finalization) independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evo_population::{Chromosome, GenerationStrategy, Population};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

#[derive(Clone)]
struct RealChromosome {
    genes: Vec<f64>,
    fitness: f64,
}

impl Chromosome for RealChromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn create_new<R: Rng>(&self, rng: &mut R) -> Self {
        let genes: Vec<f64> = (0..self.genes.len())
            .map(|_| rng.random_range(-5.0..5.0))
            .collect();
        // Negated sphere function so that higher is better.
        let fitness = -genes.iter().map(|x| x * x).sum::<f64>();
        RealChromosome { genes, fitness }
    }
}

fn prototype(dim: usize) -> RealChromosome {
    RealChromosome {
        genes: vec![0.0; dim],
        fitness: f64::NEG_INFINITY,
    }
}

fn offspring(rng: &mut StdRng, size: usize, dim: usize) -> Vec<Arc<RealChromosome>> {
    let adam = prototype(dim);
    (0..size).map(|_| Arc::new(adam.create_new(rng))).collect()
}

fn bench_generation_turnover(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_turnover");

    for &size in &[50usize, 200, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let mut population = Population::new(size, size, prototype(16)).unwrap();
                population.create_initial_generation(&mut rng);
                population.end_current_generation();
                for _ in 0..10 {
                    let next = offspring(&mut rng, size, 16);
                    population.create_new_generation(next).unwrap();
                    population.end_current_generation();
                }
                black_box(population.best_chromosome().map(|b| b.fitness()))
            });
        });
    }

    group.finish();
}

fn bench_retention_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("retention_over_long_run");

    let strategies = [
        ("tracking", GenerationStrategy::Tracking),
        ("bounded_10", GenerationStrategy::BoundedHistory(10)),
    ];

    for (name, strategy) in strategies {
        group.bench_function(name, |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let mut population = Population::new(50, 60, prototype(8)).unwrap();
                population.set_generation_strategy(strategy);
                population.create_initial_generation(&mut rng);
                population.end_current_generation();
                for _ in 0..200 {
                    let next = offspring(&mut rng, 50, 8);
                    population.create_new_generation(next).unwrap();
                    population.end_current_generation();
                }
                black_box(population.generations().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation_turnover, bench_retention_strategies);
criterion_main!(benches);
