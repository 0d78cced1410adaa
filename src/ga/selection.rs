//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. The two strategies here differ in selection pressure and in
//! how they pick the second parent of a pair.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Default tournament size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Selection strategy for choosing parents.
///
/// Both strategies assume **maximization** (higher fitness = better) and
/// return an index into the current population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Rank truncation: parents are drawn uniformly at random from the top
    /// half (by rank) of the fitness-sorted population.
    ///
    /// Requires the population to be sorted best-first, which the runner
    /// guarantees. The two parents of a pair are drawn independently and
    /// may coincide.
    ///
    /// # Complexity
    /// O(1) per selection (after the runner's sort)
    RankTruncation,

    /// Tournament selection: pick `k` individuals at random (with
    /// replacement), select the best.
    ///
    /// Higher `k` = stronger selection pressure. When selecting a pair,
    /// the second tournament is re-run until it yields an index different
    /// from the first parent, so crossover never receives the same slot
    /// twice. Requires a population of at least 2.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(DEFAULT_TOURNAMENT_SIZE)
    }
}

impl Selection {
    /// Selects one parent index from the population.
    ///
    /// For [`Selection::RankTruncation`] the population must be sorted by
    /// fitness descending.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "cannot select from empty population");

        match self {
            Selection::RankTruncation => top_half(population.len(), rng),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }

    /// Selects a pair of parent indices.
    ///
    /// Rank truncation draws both independently; tournament selection
    /// re-runs the second tournament until the index differs from the
    /// first.
    ///
    /// # Panics
    /// Panics if `population` has fewer than 2 individuals (the distinct
    /// second tournament could never terminate).
    pub fn select_pair<I: Individual, R: Rng>(
        &self,
        population: &[I],
        rng: &mut R,
    ) -> (usize, usize) {
        assert!(
            population.len() >= 2,
            "parent selection requires a population of at least 2"
        );

        let first = self.select(population, rng);
        let second = match self {
            Selection::RankTruncation => self.select(population, rng),
            Selection::Tournament(_) => loop {
                let candidate = self.select(population, rng);
                if candidate != first {
                    break candidate;
                }
            },
        };
        (first, second)
    }
}

/// Uniform draw over the top half of a best-first sorted population.
fn top_half<R: Rng>(len: usize, rng: &mut R) -> usize {
    rng.random_range(0..(len / 2).max(1))
}

/// Tournament selection: pick k random individuals, return the fittest.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
