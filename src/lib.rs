//! Evolutionary optimization of side-scroller agents and the obstacle
//! courses they run.
//!
//! Two genetic-algorithm instantiations share one generic engine:
//!
//! - **Agent evolution**: fixed-length move plans ([`sim::Move`]) are evolved
//!   against a fixed obstacle course; fitness is the horizontal distance an
//!   agent reaches ([`sim::simulate`]).
//! - **Level evolution**: the courses themselves ([`world::Obstacle`]
//!   sequences) are evolved; fitness is a heuristic layout score
//!   ([`world::score`]).
//!
//! # Architecture
//!
//! The engine under [`ga`] is domain-agnostic: problems plug in through
//! [`ga::GaProblem`], which specifies how to create, evaluate, recombine,
//! and mutate individuals. The two concrete problems live under
//! [`problems`]. The engine returns the full per-generation history plus
//! the final population; progress rendering and parameter prompting are
//! left entirely to consumers.
//!
//! # Determinism
//!
//! Every random draw flows through one explicit RNG seeded from
//! [`ga::GaConfig::seed`]. Fitness evaluation is pure and consumes no
//! randomness, so runs are bit-reproducible under a fixed seed even with
//! the `parallel` feature enabled.

pub mod error;
pub mod ga;
pub mod problems;
pub mod sim;
pub mod world;

pub use error::ConfigError;
