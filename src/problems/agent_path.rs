//! Agent-evolution problem: evolve move plans against a fixed course.

use crate::error::ConfigError;
use crate::ga::operators::{resample_mutation, single_point_crossover};
use crate::ga::{Fitness, GaConfig, GaProblem, Individual, Selection};
use crate::sim::{simulate, Move};
use crate::world::Obstacle;
use rand::Rng;

/// Moves an agent may attempt per world cell; fixes the genome length at
/// ten times the course length.
pub const MOVES_PER_CELL: usize = 10;

/// One agent: a fixed-length move plan plus its distance fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// The move genome.
    pub moves: Vec<Move>,
    fitness: i64,
}

impl Individual for MovePlan {
    type Fitness = i64;

    fn fitness(&self) -> i64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: i64) {
        self.fitness = fitness;
    }
}

/// Evolves agents that run a fixed obstacle course as far as possible.
///
/// The world is read-only context: it must already be repaired (see
/// [`crate::world::repair`]) and is never modified during a run. Fitness
/// is the horizontal position reached by [`simulate`].
pub struct AgentPathProblem {
    world: Vec<Obstacle>,
    genome_len: usize,
}

impl AgentPathProblem {
    /// Creates the problem for a fixed course.
    ///
    /// Applies the adjacency repair pass to the supplied world so no
    /// impassable bush/bird transition remains. Fails on an empty world.
    pub fn new(mut world: Vec<Obstacle>) -> Result<Self, ConfigError> {
        if world.is_empty() {
            return Err(ConfigError::EmptyWorld);
        }
        crate::world::repair(&mut world);
        let genome_len = world.len() * MOVES_PER_CELL;
        Ok(Self { world, genome_len })
    }

    /// The (repaired) course agents are evaluated against.
    pub fn world(&self) -> &[Obstacle] {
        &self.world
    }

    /// Move-genome length: [`MOVES_PER_CELL`] × course length.
    pub fn genome_len(&self) -> usize {
        self.genome_len
    }

    /// GA parameters the agent domain uses: rank-truncation selection,
    /// a `pop / 10` elite count (possibly zero for small populations),
    /// fixed 5% mutation.
    pub fn ga_config(population_size: usize, generations: usize) -> GaConfig {
        GaConfig::default()
            .with_population_size(population_size)
            .with_generations(generations)
            .with_selection(Selection::RankTruncation)
            .with_elite_count(GaConfig::elite_tenth(population_size))
            .with_adaptive_mutation(false)
    }
}

impl GaProblem for AgentPathProblem {
    type Individual = MovePlan;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> MovePlan {
        MovePlan {
            moves: (0..self.genome_len).map(|_| Move::sample(rng)).collect(),
            fitness: i64::worst(),
        }
    }

    fn evaluate(&self, individual: &MovePlan) -> i64 {
        simulate(&self.world, &individual.moves) as i64
    }

    fn crossover<R: Rng>(&self, parent1: &MovePlan, parent2: &MovePlan, rng: &mut R) -> MovePlan {
        MovePlan {
            moves: single_point_crossover(&parent1.moves, &parent2.moves, rng),
            fitness: i64::worst(),
        }
    }

    fn mutate<R: Rng>(&self, individual: &mut MovePlan, rate: f64, rng: &mut R) {
        // Plain redraw: a mutated move may coincide with the original.
        resample_mutation(&mut individual.moves, rate, rng, Move::sample);
    }
}
