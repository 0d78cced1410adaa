//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic engine and domain-specific problem
//! implementations.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `i64` (integer fitness, e.g. a
/// distance reached) and `f64` (real-valued fitness, e.g. a layout score).
/// The arithmetic hooks let the engine compute population averages in the
/// fitness type's own domain: integer fitness averages with integer
/// division, real fitness with real division.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for unevaluated individuals.
    fn worst() -> Self;

    /// The additive identity, used as the starting accumulator for sums.
    fn zero() -> Self;

    /// Adds two fitness values.
    fn add(self, rhs: Self) -> Self;

    /// Divides an accumulated sum by a population count.
    ///
    /// Returns [`zero`](Fitness::zero) when `count` is 0 rather than
    /// dividing by zero.
    fn div_by(self, count: usize) -> Self;

    /// Converts the fitness to `f64` for logging and stagnation tracking.
    fn to_f64(self) -> f64;
}

impl Fitness for i64 {
    fn worst() -> Self {
        i64::MIN
    }

    fn zero() -> Self {
        0
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn div_by(self, count: usize) -> Self {
        if count == 0 {
            0
        } else {
            self / count as i64
        }
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn zero() -> Self {
        0.0
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn div_by(self, count: usize) -> Self {
        if count == 0 {
            0.0
        } else {
            self / count as f64
        }
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The engine calls
/// [`GaProblem::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness).
///
/// Cloning an individual must deep-copy its genome: the engine clones
/// individuals whenever they cross a lifetime boundary (into the
/// per-generation history, or as elites into the next population), and no
/// aliasing between those copies and the live population may remain.
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    ///
    /// Called by the engine after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// This is the trait users implement to plug domain-specific logic into the
/// generic engine:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness (higher is better)
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a genome at a given per-gene rate
///
/// # Purity and determinism
///
/// [`evaluate`](GaProblem::evaluate) must be a pure function of the
/// individual (plus any fixed context held by the problem, such as a
/// world). It takes no RNG: all randomness stays on the engine's single
/// seeded stream, which keeps runs reproducible even when evaluation is
/// parallelized.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the engine may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// Called during population initialization. All individuals of one
    /// population must share the same genome length.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Pure; may be called in parallel across the population.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child by recombining two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates an individual in place.
    ///
    /// `rate` is the per-gene mutation probability for this generation.
    /// When the engine's adaptive mutation is active the rate passed here
    /// varies with stagnation; otherwise it equals the configured base
    /// rate.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rate: f64, rng: &mut R);

    /// Called at the end of each generation with the generation's best
    /// fitness.
    ///
    /// Useful as a reporting seam. The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_fitness_integer_average() {
        let sum = 0i64.add(3).add(4);
        assert_eq!(sum.div_by(2), 3); // truncating division
        assert_eq!(sum.div_by(0), 0);
        assert_eq!(i64::worst(), i64::MIN);
    }

    #[test]
    fn test_f64_fitness_real_average() {
        let sum = 0.0f64.add(3.0).add(4.0);
        assert!((sum.div_by(2) - 3.5).abs() < 1e-12);
        assert_eq!(sum.div_by(0), 0.0);
        assert_eq!(f64::worst(), f64::NEG_INFINITY);
    }
}
