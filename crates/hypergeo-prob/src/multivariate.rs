//! Range probability and moments over a list of groups.
//!
//! The population total is never supplied by the caller; it is always the
//! sum of the group counts, so a group list fully describes the deck.

use rayon::prelude::*;
use tracing::debug;

use crate::combinatorics::binomial;
use crate::error::ProbabilityError;
use crate::group::Group;
use crate::{possibility, univariate, validate};

/// Possibility vectors per parallel work unit.
const CHUNK_SIZE: usize = 50;

/// Probability that a sample of `draws` items lands inside every group's
/// `[min_needed, max_needed]` window simultaneously.
///
/// Enumerates the possibility space, sums `prod C(K_i, k_i)` over it, and
/// divides by `C(N, n)`.
pub fn probability(groups: &[Group], draws: i64) -> Result<f64, ProbabilityError> {
    let population = validate::check_group_list(groups, draws)?;
    let possibilities = possibility::enumerate(groups, draws);
    let mut numerator = 0.0;
    for vector in &possibilities {
        numerator += vector_numerator(groups, vector)?;
    }
    Ok(numerator / binomial(population, draws)?)
}

/// Same result as [`probability`], with the possibility-space reduction
/// fanned out over rayon's global pool in fixed-size contiguous chunks.
///
/// The reduction is a commutative sum, so chunk size and completion order
/// affect only throughput; results differ from the sequential path by at
/// most float summation-order noise in the last bits.
pub fn probability_parallel(groups: &[Group], draws: i64) -> Result<f64, ProbabilityError> {
    let population = validate::check_group_list(groups, draws)?;
    let possibilities = possibility::enumerate(groups, draws);
    debug!(
        vectors = possibilities.len(),
        groups = groups.len(),
        "reducing possibility space in parallel"
    );
    let numerator = possibilities
        .par_chunks(CHUNK_SIZE)
        .map(|chunk| {
            chunk.iter().try_fold(0.0, |acc, vector| {
                Ok(acc + vector_numerator(groups, vector)?)
            })
        })
        .try_reduce(|| 0.0, |a, b| Ok(a + b))?;
    Ok(numerator / binomial(population, draws)?)
}

fn vector_numerator(groups: &[Group], vector: &[i64]) -> Result<f64, ProbabilityError> {
    let mut product = 1.0;
    for (group, &hits) in groups.iter().zip(vector) {
        product *= binomial(group.count(), hits)?;
    }
    Ok(product)
}

/// Probability of one exact per-group draw vector:
/// `prod C(K_i, k_i) / C(N, n)`.
///
/// `counts` and `hits` must pair up one entry per group.
pub fn pmf(
    population: i64,
    counts: &[i64],
    draws: i64,
    hits: &[i64],
) -> Result<f64, ProbabilityError> {
    if counts.len() != hits.len() {
        return Err(ProbabilityError::invalid(
            "counts and hits must have one entry per group",
        ));
    }
    if population < 0 || draws < 0 || population < draws {
        return Err(ProbabilityError::invalid(
            "n must not exceed N and neither may be negative",
        ));
    }
    for (&count, &h) in counts.iter().zip(hits) {
        if h < 0 {
            return Err(ProbabilityError::invalid(
                "hit counts must be non-negative",
            ));
        }
        if count < h {
            return Err(ProbabilityError::invalid(
                "cannot draw more successes from a group than it contains",
            ));
        }
    }
    let mut numerator = 1.0;
    for (&count, &h) in counts.iter().zip(hits) {
        numerator *= binomial(count, h)?;
    }
    Ok(numerator / binomial(population, draws)?)
}

/// Expected draws from `target`, which must be one of `groups`.
pub fn mean(groups: &[Group], target: &Group, draws: i64) -> Result<f64, ProbabilityError> {
    let population = check_target(groups, target, draws)?;
    univariate::mean(population, target.count(), draws)
}

/// Variance of the draw count from `target`, which must be one of `groups`.
pub fn variance(groups: &[Group], target: &Group, draws: i64) -> Result<f64, ProbabilityError> {
    let population = check_target(groups, target, draws)?;
    univariate::variance(population, target.count(), draws)
}

/// Square root of [`variance`].
pub fn standard_deviation(
    groups: &[Group],
    target: &Group,
    draws: i64,
) -> Result<f64, ProbabilityError> {
    Ok(variance(groups, target, draws)?.sqrt())
}

fn check_target(groups: &[Group], target: &Group, draws: i64) -> Result<i64, ProbabilityError> {
    if draws < 0 {
        return Err(ProbabilityError::invalid("n must be non-negative"));
    }
    if !groups.contains(target) {
        return Err(ProbabilityError::invalid(format!(
            "group \"{}\" is not part of this query",
            target.name()
        )));
    }
    validate::check_group_list(groups, draws)
}
