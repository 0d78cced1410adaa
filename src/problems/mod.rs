//! The two GA instantiations.
//!
//! Both plug into the generic engine through [`crate::ga::GaProblem`] and
//! differ only in genome semantics, fitness function, and operator choice:
//!
//! | | [`AgentPathProblem`] | [`LevelDesignProblem`] |
//! |---|---|---|
//! | Genome | move plan | world layout |
//! | Fitness | distance reached (`i64`) | layout score (`f64`) |
//! | Selection | rank truncation | tournament (5) |
//! | Crossover | single-point | uniform |
//! | Mutation | plain redraw | redraw-until-different |
//! | Elites | `pop / 10` | `max(2, pop / 10)` |
//! | Adaptive mutation | off | on |

mod agent_path;
mod level_design;

pub use agent_path::{AgentPathProblem, MovePlan, MOVES_PER_CELL};
pub use level_design::{Level, LevelDesignProblem};
