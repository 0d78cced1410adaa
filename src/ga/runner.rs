//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → statistics → selection → crossover →
//! mutation → repeat, recording one [`GenerationRecord`] per generation.

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Best-fitness delta below which a generation counts as stagnant.
const STAGNATION_EPSILON: f64 = 0.01;
/// Mutation-rate growth per stagnant generation.
const STAGNATION_RATE_STEP: f64 = 0.05;
/// Upper bound for the adaptive mutation rate.
const MUTATION_RATE_CAP: f64 = 0.15;

/// Immutable snapshot of one generation, produced after evaluation and
/// before breeding.
///
/// `best_individual` is a deep copy: it never aliases the live population
/// of any later generation.
#[derive(Debug, Clone)]
pub struct GenerationRecord<I: Individual> {
    /// Generation index, starting at 0.
    pub index: usize,

    /// Highest fitness in the evaluated population.
    pub best: I::Fitness,

    /// Population average, computed in the fitness type's own domain
    /// (integer fitness averages with integer division).
    pub average: I::Fitness,

    /// Lowest fitness in the evaluated population.
    pub worst: I::Fitness,

    /// Copy of the generation's best individual.
    pub best_individual: I,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// One record per generation, in order. Length equals the configured
    /// generation count.
    pub history: Vec<GenerationRecord<I>>,

    /// The population produced by the final breeding step, evaluated, for
    /// optional post-run inspection.
    pub final_population: Vec<I>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = LevelDesignProblem::new(40)?;
/// let config = LevelDesignProblem::ga_config(60, 100).with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("best score: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// Validates the configuration first and fails fast: an invalid
    /// configuration never executes a single generation. The loop runs
    /// exactly [`GaConfig::generations`] iterations; stagnation only
    /// influences the mutation rate, never termination.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        let mut history: Vec<GenerationRecord<P::Individual>> =
            Vec::with_capacity(config.generations);
        let mut best: Option<P::Individual> = None;
        let mut last_best: Option<f64> = None;
        let mut stagnation = 0usize;

        for gen in 0..config.generations {
            evaluate_population(problem, &mut population, config.parallel);

            // Best-first order; rank truncation and elitism both rely on it.
            population.sort_by(|a, b| {
                b.fitness()
                    .partial_cmp(&a.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let gen_best = population[0].fitness();
            let gen_worst = population[population.len() - 1].fitness();
            let sum = population
                .iter()
                .fold(<P::Individual as Individual>::Fitness::zero(), |acc, ind| {
                    acc.add(ind.fitness())
                });
            let average = sum.div_by(population.len());

            if config.adaptive_mutation {
                let stagnant = last_best
                    .is_some_and(|prev| (gen_best.to_f64() - prev).abs() < STAGNATION_EPSILON);
                if stagnant {
                    stagnation += 1;
                } else {
                    stagnation = 0;
                }
                last_best = Some(gen_best.to_f64());
            }
            let rate = if config.adaptive_mutation {
                adaptive_rate(config.mutation_rate, stagnation)
            } else {
                config.mutation_rate
            };

            history.push(GenerationRecord {
                index: gen,
                best: gen_best,
                average,
                worst: gen_worst,
                best_individual: population[0].clone(),
            });

            let improved = match &best {
                Some(b) => gen_best > b.fitness(),
                None => true,
            };
            if improved {
                best = Some(population[0].clone());
            }

            log::debug!(
                "generation {gen}: best={:.2} avg={:.2} worst={:.2} mutation={rate:.3}",
                gen_best.to_f64(),
                average.to_f64(),
                gen_worst.to_f64(),
            );
            problem.on_generation(gen, gen_best);

            // Next generation: elites survive unchanged, the rest are bred.
            let mut next_gen: Vec<P::Individual> = population[..config.elite_count].to_vec();
            while next_gen.len() < config.population_size {
                let (p1, p2) = config.selection.select_pair(&population, &mut rng);
                let mut child = problem.crossover(&population[p1], &population[p2], &mut rng);
                problem.mutate(&mut child, rate, &mut rng);
                next_gen.push(child);
            }
            population = next_gen;
        }

        // Score the final population so callers get evaluated individuals.
        evaluate_population(problem, &mut population, config.parallel);

        let best = best.expect("at least one generation ran");
        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            history,
            final_population: population,
        })
    }
}

/// Effective mutation rate after `stagnation` stagnant generations.
fn adaptive_rate(base: f64, stagnation: usize) -> f64 {
    (base * (1.0 + stagnation as f64 * STAGNATION_RATE_STEP)).min(MUTATION_RATE_CAP)
}

/// Evaluate every individual in the population.
///
/// Evaluation is pure, so the parallel path produces the same fitness
/// values as the sequential one.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
        return;
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

// ============================================================================
// Tests
// ============================================================================
