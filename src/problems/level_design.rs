//! Level-evolution problem: evolve obstacle-course layouts directly.

use crate::error::ConfigError;
use crate::ga::operators::{resample_distinct_mutation, uniform_crossover};
use crate::ga::{Fitness, GaConfig, GaProblem, Individual, Selection};
use crate::world::{generate, score, Obstacle, LEVEL_WEIGHTS};
use rand::Rng;

/// One candidate course layout plus its heuristic score.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// The world genome.
    pub cells: Vec<Obstacle>,
    fitness: f64,
}

impl Individual for Level {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Evolves course layouts toward the heuristic in [`crate::world::score`]:
/// passable, moderately dense, varied, and free of long dead stretches.
pub struct LevelDesignProblem {
    size: usize,
}

impl LevelDesignProblem {
    /// Creates the problem for courses of `size` cells.
    ///
    /// Fails on a zero size.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyWorld);
        }
        Ok(Self { size })
    }

    /// Course length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// GA parameters the level domain uses: tournament-of-5 selection with
    /// distinct parents, a `max(2, pop / 10)` elite count, and
    /// stagnation-adaptive mutation on a 5% base rate.
    pub fn ga_config(population_size: usize, generations: usize) -> GaConfig {
        GaConfig::default()
            .with_population_size(population_size)
            .with_generations(generations)
            .with_selection(Selection::default())
            .with_elite_count(GaConfig::elite_tenth_min2(population_size))
            .with_adaptive_mutation(true)
    }
}

impl GaProblem for LevelDesignProblem {
    type Individual = Level;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Level {
        Level {
            cells: generate(self.size, &LEVEL_WEIGHTS, rng),
            fitness: f64::worst(),
        }
    }

    fn evaluate(&self, individual: &Level) -> f64 {
        score(&individual.cells)
    }

    fn crossover<R: Rng>(&self, parent1: &Level, parent2: &Level, rng: &mut R) -> Level {
        Level {
            cells: uniform_crossover(&parent1.cells, &parent2.cells, rng),
            fitness: f64::worst(),
        }
    }

    fn mutate<R: Rng>(&self, individual: &mut Level, rate: f64, rng: &mut R) {
        // Guarded redraw: a mutated cell always changes.
        resample_distinct_mutation(&mut individual.cells, rate, rng, Obstacle::sample);
    }
}
