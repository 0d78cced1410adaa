//! Genetic Algorithm engine.
//!
//! A generic engine built on trait-based abstractions. Problems plug in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals; the engine supplies selection,
//! elitism, stagnation-adaptive mutation, and generation bookkeeping.
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution with associated fitness type
//! - [`GaProblem`]: problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population size, selection, elitism)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: per-generation history plus the final population
//!
//! # Submodules
//!
//! - [`operators`]: generic symbol-sequence crossover and mutation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationRecord};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
