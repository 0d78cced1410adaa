//! Generic genetic operators for fixed-length symbol sequences.
//!
//! Crossover and mutation operators over `&[T]` genomes where `T` is a
//! small copyable symbol (a move or an obstacle cell). Domain-agnostic:
//! the problem implementations choose which operator applies and which
//! distribution fresh symbols are drawn from.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: genes before a random cut come from
//!   parent 1, genes at/after it from parent 2
//! - [`uniform_crossover`]: each gene copied from either parent with
//!   probability 0.5
//!
//! # Mutation Operators
//!
//! - [`resample_mutation`]: per-gene redraw at a given rate; the redraw may
//!   reproduce the original symbol
//! - [`resample_distinct_mutation`]: per-gene redraw that is guaranteed to
//!   differ from the original symbol
//!
//! The two mutation flavors are deliberately distinct: the plain redraw's
//! effective change probability is below its nominal rate, the distinct
//! redraw's equals it exactly.

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Chooses a cut index uniformly in `[0, len)` and splices the parents
/// there. A cut of 0 yields a copy of `parent2`. The child length always
/// equals the parent length.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<T: Copy, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = rng.random_range(0..n);
    splice(parent1, parent2, cut)
}

/// Splices two parents at `cut`: genes `[0, cut)` from `parent1`, the rest
/// from `parent2`.
fn splice<T: Copy>(parent1: &[T], parent2: &[T], cut: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

/// Uniform crossover.
///
/// Each gene is copied from `parent1` or `parent2` independently with
/// probability 0.5. The child length always equals the parent length.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<T: Copy, R: Rng>(parent1: &[T], parent2: &[T], rng: &mut R) -> Vec<T> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    parent1
        .iter()
        .zip(parent2.iter())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Per-gene stochastic resampling.
///
/// Each gene is replaced with a fresh draw from `sample` with probability
/// `rate`. The fresh draw may coincide with the original symbol, so the
/// effective per-gene change probability is below `rate`.
pub fn resample_mutation<T, R, F>(genome: &mut [T], rate: f64, rng: &mut R, sample: F)
where
    R: Rng,
    F: Fn(&mut R) -> T,
{
    for gene in genome.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = sample(rng);
        }
    }
}

/// Per-gene stochastic resampling with a distinctness guard.
///
/// Like [`resample_mutation`], but the replacement is redrawn until it
/// differs from the original value, so every mutated gene actually
/// changes. `sample` must be able to produce at least two distinct values
/// or the redraw loop will not terminate.
pub fn resample_distinct_mutation<T, R, F>(genome: &mut [T], rate: f64, rng: &mut R, sample: F)
where
    T: PartialEq + Copy,
    R: Rng,
    F: Fn(&mut R) -> T,
{
    for gene in genome.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            let old = *gene;
            *gene = loop {
                let fresh = sample(rng);
                if fresh != old {
                    break fresh;
                }
            };
        }
    }
}
