//! Single-category hypergeometric probabilities and moments.
//!
//! The running example throughout: a 60-card deck with 24 copies of the
//! tracked category, drawing a 7-card hand, asking for 2 to 4 copies.

use crate::combinatorics::binomial;
use crate::error::ProbabilityError;
use crate::validate;

/// Probability of drawing exactly `hits` successes in `draws` items:
/// `C(K, k) * C(N-K, n-k) / C(N, n)`.
pub fn pmf(
    population: i64,
    successes: i64,
    draws: i64,
    hits: i64,
) -> Result<f64, ProbabilityError> {
    validate::check_pmf_args(population, successes, draws, hits)?;
    let numerator = binomial(successes, hits)? * binomial(population - successes, draws - hits)?;
    Ok(numerator / binomial(population, draws)?)
}

/// Probability of drawing between `min_hits` and `max_hits` successes
/// inclusive: the sum of [`pmf`] over the range.
pub fn probability(
    population: i64,
    successes: i64,
    draws: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<f64, ProbabilityError> {
    validate::check_probability_args(population, successes, draws, min_hits, max_hits)?;
    if successes < min_hits {
        // Fewer successes exist than the range requires; success is
        // impossible, no summation needed.
        return Ok(0.0);
    }
    // Terms past min(K, n) are identically zero; clamp rather than let the
    // PMF guard reject them mid-sum.
    let hi = max_hits.min(successes).min(draws);
    let mut total = 0.0;
    for hits in min_hits..=hi {
        total += pmf(population, successes, draws, hits)?;
    }
    Ok(total)
}

/// Smallest `K` whose range probability meets or exceeds `target`.
///
/// Answers "how many copies must the population hold for the draw to
/// succeed at least `target` of the time". `target = 0` needs no copies;
/// `target = 1` needs enough that even the worst case (every undrawn item
/// is a success) still leaves `min_hits` among the draws, i.e.
/// `(N - n) + k1`.
///
/// Probability as a function of `K` rises and then falls, so the smallest
/// qualifying `K` can only be found by scanning left to right over the
/// whole domain; a bisection would skip over it.
pub fn inverse_probability(
    target: f64,
    population: i64,
    draws: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<i64, ProbabilityError> {
    if !(0.0..=1.0).contains(&target) {
        return Err(ProbabilityError::invalid(
            "P is a probability and must lie between zero and one",
        ));
    }
    if target == 0.0 {
        return Ok(0);
    }
    if target == 1.0 {
        return Ok((population - draws) + min_hits);
    }
    for successes in min_hits..=population {
        if probability(population, successes, draws, min_hits, max_hits)? >= target {
            return Ok(successes);
        }
    }
    Ok(0)
}

/// Expected number of successes in the sample: `n * K / N`.
pub fn mean(population: i64, successes: i64, draws: i64) -> Result<f64, ProbabilityError> {
    validate::check_distribution_args(population, successes, draws)?;
    if population == 0 {
        // An empty population yields no draws; zero is the limiting value.
        return Ok(0.0);
    }
    Ok(draws as f64 * successes as f64 / population as f64)
}

/// Spread of the success count around the mean:
/// `n * K * (N-K) * (N-n) / (N^2 * (N-1))`.
pub fn variance(population: i64, successes: i64, draws: i64) -> Result<f64, ProbabilityError> {
    validate::check_distribution_args(population, successes, draws)?;
    if population <= 1 {
        // Inspecting the whole of a zero- or one-item population leaves no
        // residual randomness.
        return Ok(0.0);
    }
    let n = population as f64;
    let numerator =
        draws as f64 * successes as f64 * (population - successes) as f64 * (population - draws) as f64;
    Ok(numerator / (n * n * (n - 1.0)))
}

/// Square root of [`variance`].
pub fn standard_deviation(
    population: i64,
    successes: i64,
    draws: i64,
) -> Result<f64, ProbabilityError> {
    Ok(variance(population, successes, draws)?.sqrt())
}
