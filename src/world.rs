//! Obstacle-course model: cell types, random generation, adjacency repair,
//! and the heuristic layout score used by the level-evolution GA.
//!
//! A world is an ordered sequence of [`Obstacle`] cells. An agent at low
//! height is blocked by bushes, an agent at high height by birds, so a bush
//! directly next to a bird (in either order) is impassable in both states.
//! [`repair`] removes such transitions; [`score`] penalizes them.

use rand::Rng;

/// One cell of an obstacle course.
///
/// Bushes block agents running at low height; birds block agents at high
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obstacle {
    Empty,
    Bush,
    Bird,
}

impl Obstacle {
    /// All cell variants, in genome symbol order.
    pub const ALL: [Obstacle; 3] = [Obstacle::Empty, Obstacle::Bush, Obstacle::Bird];

    /// Draws a cell uniformly over all variants.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Draws a cell from a categorical distribution over
    /// `[Empty, Bush, Bird]`.
    ///
    /// The weights must sum to 1; any remaining probability mass falls to
    /// `Bird`.
    pub fn sample_weighted<R: Rng>(weights: &[f64; 3], rng: &mut R) -> Self {
        let p: f64 = rng.random();
        if p < weights[0] {
            Obstacle::Empty
        } else if p < weights[0] + weights[1] {
            Obstacle::Bush
        } else {
            Obstacle::Bird
        }
    }

    /// Returns `true` for [`Obstacle::Empty`].
    pub fn is_empty(self) -> bool {
        self == Obstacle::Empty
    }
}

/// Cell weights for worlds evolved by the level-design GA:
/// 60% empty, 20% bush, 20% bird.
pub const LEVEL_WEIGHTS: [f64; 3] = [0.6, 0.2, 0.2];

/// Cell weights for fixed courses generated for the agent GA:
/// 50% empty, 25% bush, 25% bird. Slightly denser than [`LEVEL_WEIGHTS`]
/// so short courses still present obstacles.
pub const COURSE_WEIGHTS: [f64; 3] = [0.5, 0.25, 0.25];

/// Generates a random world of `len` cells from the given weights.
pub fn generate<R: Rng>(len: usize, weights: &[f64; 3], rng: &mut R) -> Vec<Obstacle> {
    (0..len)
        .map(|_| Obstacle::sample_weighted(weights, rng))
        .collect()
}

/// Returns `true` if the pair is impassable at both heights.
fn blocks_both_heights(a: Obstacle, b: Obstacle) -> bool {
    matches!(
        (a, b),
        (Obstacle::Bush, Obstacle::Bird) | (Obstacle::Bird, Obstacle::Bush)
    )
}

/// Removes impassable transitions in a single left-to-right pass.
///
/// For every adjacent bush/bird pair (in either order) the first cell is
/// forced to empty, guaranteeing the far end stays reachable. The pass is
/// idempotent: a repaired world has no pair left to fix.
///
/// Must run before a world is used for any agent evaluation.
pub fn repair(world: &mut [Obstacle]) {
    for i in 0..world.len().saturating_sub(1) {
        if blocks_both_heights(world[i], world[i + 1]) {
            world[i] = Obstacle::Empty;
        }
    }
}

/// Starting score before penalties and bonuses.
pub const BASE_SCORE: f64 = 100.0;
/// Penalty per adjacent bush/bird pair.
const IMPOSSIBLE_TRANSITION_PENALTY: f64 = 40.0;
/// Ideal fraction of non-empty cells.
const TARGET_OBSTACLE_RATIO: f64 = 0.3;
/// Scale applied to the deviation from [`TARGET_OBSTACLE_RATIO`].
const RATIO_PENALTY_SCALE: f64 = 100.0;
/// Penalty per cell of the longest contiguous empty run.
const EMPTY_RUN_PENALTY: f64 = 3.0;
/// Bonus when both bush and bird appear at least once.
const DIVERSITY_BONUS: f64 = 20.0;
/// Bonus per `[empty, non-empty, empty]` window.
const POCKET_BONUS: f64 = 5.0;

/// Scores a world layout. Higher is better; the result is not clamped and
/// may be negative.
///
/// Starting from [`BASE_SCORE`], the score is adjusted for impassable
/// transitions, deviation from the target obstacle density, dead stretches
/// of empty cells, obstacle diversity, and isolated single obstacles.
/// Pure and deterministic for a given world.
pub fn score(world: &[Obstacle]) -> f64 {
    let mut score = BASE_SCORE;

    for pair in world.windows(2) {
        if blocks_both_heights(pair[0], pair[1]) {
            score -= IMPOSSIBLE_TRANSITION_PENALTY;
        }
    }

    let obstacles = world.iter().filter(|c| !c.is_empty()).count();
    let ratio = if world.is_empty() {
        0.0
    } else {
        obstacles as f64 / world.len() as f64
    };
    score -= (TARGET_OBSTACLE_RATIO - ratio).abs() * RATIO_PENALTY_SCALE;

    let mut run = 0usize;
    let mut longest_empty = 0usize;
    for cell in world {
        if cell.is_empty() {
            run += 1;
            longest_empty = longest_empty.max(run);
        } else {
            run = 0;
        }
    }
    score -= longest_empty as f64 * EMPTY_RUN_PENALTY;

    let has_bush = world.contains(&Obstacle::Bush);
    let has_bird = world.contains(&Obstacle::Bird);
    if has_bush && has_bird {
        score += DIVERSITY_BONUS;
    }

    for window in world.windows(3) {
        if window[0].is_empty() && !window[1].is_empty() && window[2].is_empty() {
            score += POCKET_BONUS;
        }
    }

    score
}
