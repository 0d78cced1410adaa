//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::ConfigError;

/// Default per-gene mutation rate.
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;

/// Configuration for one GA run.
///
/// Controls population size, generation count, selection strategy,
/// elitism, and mutation behavior.
///
/// # Defaults
///
/// ```
/// use evocourse::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evocourse::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_elite_count(GaConfig::elite_tenth_min2(200))
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Fixed across generations.
    pub population_size: usize,

    /// Number of generations to run. The loop always executes exactly this
    /// many iterations; there is no early-stopping.
    pub generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Number of top individuals copied unchanged into the next
    /// generation.
    ///
    /// Kept as an explicit count rather than a ratio because the two
    /// problem domains use different formulas; see
    /// [`elite_tenth`](Self::elite_tenth) and
    /// [`elite_tenth_min2`](Self::elite_tenth_min2).
    pub elite_count: usize,

    /// Base per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to scale the mutation rate with stagnation.
    ///
    /// When enabled, generations whose best fitness moves by less than
    /// 0.01 increment a stagnation counter, and the effective rate becomes
    /// `mutation_rate × (1 + stagnation × 0.05)`, capped at 0.15.
    pub adaptive_mutation: bool,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; evaluation is
    /// pure, so this never changes results.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            selection: Selection::default(),
            elite_count: Self::elite_tenth_min2(100),
            mutation_rate: DEFAULT_MUTATION_RATE,
            adaptive_mutation: false,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Elite count used by the agent GA: a tenth of the population,
    /// truncating — small populations may carry no elites at all.
    pub fn elite_tenth(population_size: usize) -> usize {
        population_size / 10
    }

    /// Elite count used by the level GA: a tenth of the population, but
    /// never fewer than two.
    pub fn elite_tenth_min2(population_size: usize) -> usize {
        (population_size / 10).max(2)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the base mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables stagnation-adaptive mutation.
    pub fn with_adaptive_mutation(mut self, adaptive: bool) -> Self {
        self.adaptive_mutation = adaptive;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before any generation executes; an invalid
    /// configuration never partially runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.elite_count >= self.population_size {
            return Err(ConfigError::EliteCountTooLarge {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}
