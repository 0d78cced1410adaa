//! End-to-end runs of both GA instantiations, mirroring how a consumer
//! drives the engine: build a problem, run, inspect the history and the
//! final population.

use evocourse::ga::{Fitness, GaProblem, GaRunner, Individual};
use evocourse::problems::{AgentPathProblem, LevelDesignProblem, MOVES_PER_CELL};
use evocourse::world::{generate, COURSE_WEIGHTS};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn agent_evolution_end_to_end() {
    let mut rng = StdRng::seed_from_u64(11);
    let course = generate(15, &COURSE_WEIGHTS, &mut rng);
    let problem = AgentPathProblem::new(course).unwrap();
    assert_eq!(problem.genome_len(), 15 * MOVES_PER_CELL);

    let config = AgentPathProblem::ga_config(50, 40)
        .with_seed(11)
        .with_parallel(false);
    let result = GaRunner::run(&problem, &config).unwrap();

    assert_eq!(result.history.len(), 40);
    assert_eq!(result.final_population.len(), 50);

    for record in &result.history {
        assert!(record.best >= record.average);
        assert!(record.average >= record.worst);
        // Distance fitness stays within the course.
        assert!(record.best >= 0);
        assert!(record.best < 15);
    }

    // Post-run evaluation of the returned population matches the engine's.
    for agent in &result.final_population {
        assert_eq!(agent.fitness(), problem.evaluate(agent));
    }
}

#[test]
fn level_evolution_end_to_end() {
    let problem = LevelDesignProblem::new(30).unwrap();
    let config = LevelDesignProblem::ga_config(40, 50)
        .with_seed(5)
        .with_parallel(false);
    let result = GaRunner::run(&problem, &config).unwrap();

    assert_eq!(result.history.len(), 50);
    for (i, record) in result.history.iter().enumerate() {
        assert_eq!(record.index, i);
        assert!(record.best >= record.average);
        assert!(record.average >= record.worst);
        assert_eq!(record.best_individual.cells.len(), 30);
    }

    // Elitism keeps the best line from ever dropping.
    for window in result.history.windows(2) {
        assert!(window[1].best >= window[0].best);
    }
}

#[test]
fn identical_runs_are_bit_identical() {
    let problem = LevelDesignProblem::new(25).unwrap();
    let config = LevelDesignProblem::ga_config(30, 30)
        .with_seed(99)
        .with_parallel(false);

    let a = GaRunner::run(&problem, &config).unwrap();
    let b = GaRunner::run(&problem, &config).unwrap();

    assert_eq!(a.history.len(), b.history.len());
    for (ra, rb) in a.history.iter().zip(b.history.iter()) {
        assert_eq!(ra.index, rb.index);
        assert_eq!(ra.best.to_bits(), rb.best.to_bits());
        assert_eq!(ra.average.to_bits(), rb.average.to_bits());
        assert_eq!(ra.worst.to_bits(), rb.worst.to_bits());
        assert_eq!(ra.best_individual, rb.best_individual);
    }
    assert_eq!(a.final_population, b.final_population);
    assert_eq!(a.best, b.best);
}

#[test]
fn history_snapshots_do_not_alias_the_final_population() {
    // Mutating a history snapshot must leave the final population intact.
    let problem = LevelDesignProblem::new(10).unwrap();
    let config = LevelDesignProblem::ga_config(20, 5)
        .with_seed(3)
        .with_parallel(false);

    let mut result = GaRunner::run(&problem, &config).unwrap();
    let final_before: Vec<_> = result.final_population.clone();

    for record in &mut result.history {
        record.best_individual.set_fitness(f64::worst());
    }
    assert_eq!(result.final_population, final_before);
}
