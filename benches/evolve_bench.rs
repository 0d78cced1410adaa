//! Criterion benchmarks for the GA engine and the two fitness evaluators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evocourse::ga::GaRunner;
use evocourse::problems::{AgentPathProblem, LevelDesignProblem};
use evocourse::sim::{simulate, Move};
use evocourse::world::{generate, score, COURSE_WEIGHTS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for &len in &[20usize, 100, 500] {
        let mut rng = StdRng::seed_from_u64(42);
        let mut world = generate(len, &COURSE_WEIGHTS, &mut rng);
        evocourse::world::repair(&mut world);
        let moves: Vec<Move> = (0..len * 10).map(|_| Move::sample(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &(world, moves), |b, (w, m)| {
            b.iter(|| simulate(black_box(w), black_box(m)))
        });
    }
    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for &len in &[20usize, 100, 500] {
        let mut rng = StdRng::seed_from_u64(42);
        let world = generate(len, &COURSE_WEIGHTS, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(len), &world, |b, w| {
            b.iter(|| score(black_box(w)))
        });
    }
    group.finish();
}

fn bench_agent_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("agent_evolution");
    group.sample_size(10);

    for (len, pop, gens) in [(10usize, 30usize, 20usize), (30, 50, 20)] {
        let mut rng = StdRng::seed_from_u64(42);
        let world = generate(len, &COURSE_WEIGHTS, &mut rng);
        let problem = AgentPathProblem::new(world).expect("non-empty world");
        let config = AgentPathProblem::ga_config(pop, gens)
            .with_seed(42)
            .with_parallel(false);

        group.bench_with_input(
            BenchmarkId::new(format!("l{len}_p{pop}_g{gens}"), len),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_level_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_evolution");
    group.sample_size(10);

    for &size in &[20usize, 50] {
        let problem = LevelDesignProblem::new(size).expect("non-zero size");
        let config = LevelDesignProblem::ga_config(50, 20)
            .with_seed(42)
            .with_parallel(false);

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_simulate,
    bench_score,
    bench_agent_evolution,
    bench_level_evolution
);
criterion_main!(benches);
