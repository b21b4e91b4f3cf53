//! Mulligan probabilities for a single tracked category.
//!
//! Thin front-ends: each pins the starting hand at
//! [`STARTING_HAND_SIZE`] and hands the univariate engine's range
//! probability to the generic composition cores.

use hypergeo_prob::{univariate, ProbabilityError};

use crate::compose::{self, STARTING_HAND_SIZE};

/// Probability of drawing `min_hits..=max_hits` of the tracked copies in
/// some hand while mulliganing down to `keep` cards under Vancouver rules
/// (every mulligan scries one card).
pub fn vancouver_mull_to_x(
    population: i64,
    successes: i64,
    keep: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    compose::general_mull_to_x(
        |size| univariate::probability(population, successes, size, min_hits, max_hits),
        keep,
        min_hits,
        true,
        STARTING_HAND_SIZE,
    )
}

/// [`vancouver_mull_to_x`] with one extra unconditional full-hand draw.
pub fn vancouver_mull_to_x_with_free(
    population: i64,
    successes: i64,
    keep: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    let base = vancouver_mull_to_x(population, successes, keep, min_hits, max_hits)?;
    compose::with_free_mulligan(
        base,
        |size| univariate::probability(population, successes, size, min_hits, max_hits),
        STARTING_HAND_SIZE,
    )
}

/// Like [`vancouver_mull_to_x`] under Paris rules (no scries).
pub fn paris_mull_to_x(
    population: i64,
    successes: i64,
    keep: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    compose::general_mull_to_x(
        |size| univariate::probability(population, successes, size, min_hits, max_hits),
        keep,
        min_hits,
        false,
        STARTING_HAND_SIZE,
    )
}

/// [`paris_mull_to_x`] with one extra unconditional full-hand draw.
pub fn paris_mull_to_x_with_free(
    population: i64,
    successes: i64,
    keep: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    let base = paris_mull_to_x(population, successes, keep, min_hits, max_hits)?;
    compose::with_free_mulligan(
        base,
        |size| univariate::probability(population, successes, size, min_hits, max_hits),
        STARTING_HAND_SIZE,
    )
}

/// Like [`vancouver_mull_to_x`] under London rules (every attempt draws a
/// full hand before putting cards back).
pub fn london_mull_to_x(
    population: i64,
    successes: i64,
    keep: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    compose::london_mull_to_x(
        |size| univariate::probability(population, successes, size, min_hits, max_hits),
        keep,
        min_hits,
        STARTING_HAND_SIZE,
    )
}

/// [`london_mull_to_x`] with one extra unconditional full-hand draw.
pub fn london_mull_to_x_with_free(
    population: i64,
    successes: i64,
    keep: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    let base = london_mull_to_x(population, successes, keep, min_hits, max_hits)?;
    compose::with_free_mulligan(
        base,
        |size| univariate::probability(population, successes, size, min_hits, max_hits),
        STARTING_HAND_SIZE,
    )
}
