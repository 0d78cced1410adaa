//! Configuration errors.
//!
//! The engine is arithmetic over arrays; the only error class is
//! configuration misuse. All parameters are validated up front, before any
//! generation runs.

/// Invalid GA or problem configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("generation count must be at least 1")]
    NoGenerations,

    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("elite count {elite_count} must be smaller than population size {population_size}")]
    EliteCountTooLarge {
        elite_count: usize,
        population_size: usize,
    },

    #[error("tournament size must be at least 1")]
    EmptyTournament,

    #[error("world must contain at least one cell")]
    EmptyWorld,
}
