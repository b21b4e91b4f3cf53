//! Precondition guards shared by every probability and statistics operation.
//!
//! Guards only inspect arguments; they never compute. Every failure is an
//! [`ProbabilityError::InvalidArgument`] carrying the violated condition.

use crate::error::ProbabilityError;
use crate::group::Group;

/// Guard for the univariate PMF arguments `(N, K, n, k)`.
pub fn check_pmf_args(
    population: i64,
    successes: i64,
    draws: i64,
    hits: i64,
) -> Result<(), ProbabilityError> {
    if population < 0 || successes < 0 || draws < 0 || hits < 0 {
        return Err(ProbabilityError::invalid(
            "all arguments must be non-negative",
        ));
    }
    if hits > successes {
        return Err(ProbabilityError::invalid(
            "k must not exceed K: cannot draw more successes than the population holds",
        ));
    }
    if population < successes {
        return Err(ProbabilityError::invalid(
            "K must not exceed N: the population cannot hold more successes than items",
        ));
    }
    if population < draws {
        return Err(ProbabilityError::invalid(
            "n must not exceed N: cannot draw more items without replacement than exist",
        ));
    }
    if draws < hits {
        return Err(ProbabilityError::invalid(
            "k must not exceed n: cannot observe more successes than draws",
        ));
    }
    Ok(())
}

/// Guard for the univariate range probability arguments `(N, K, n, k1, k2)`.
pub fn check_probability_args(
    population: i64,
    successes: i64,
    draws: i64,
    min_hits: i64,
    max_hits: i64,
) -> Result<(), ProbabilityError> {
    if population < 0 || successes < 0 || draws < 0 || min_hits < 0 || max_hits < 0 {
        return Err(ProbabilityError::invalid(
            "all arguments must be non-negative",
        ));
    }
    if max_hits < min_hits {
        return Err(ProbabilityError::invalid(
            "k2 must be at least k1: the range of acceptable successes is inverted",
        ));
    }
    if population < successes {
        return Err(ProbabilityError::invalid(
            "K must not exceed N: the population cannot hold more successes than items",
        ));
    }
    if population < draws {
        return Err(ProbabilityError::invalid(
            "n must not exceed N: cannot draw more items without replacement than exist",
        ));
    }
    if draws < min_hits {
        return Err(ProbabilityError::invalid(
            "n must be at least k1: a sample smaller than the minimum required can never succeed",
        ));
    }
    Ok(())
}

/// Guard for the moment functions `(N, K, n)`. No range is involved, so
/// `n >= k1` is deliberately not required here.
pub fn check_distribution_args(
    population: i64,
    successes: i64,
    draws: i64,
) -> Result<(), ProbabilityError> {
    if population < 0 || successes < 0 || draws < 0 {
        return Err(ProbabilityError::invalid(
            "all arguments must be non-negative",
        ));
    }
    if population < successes {
        return Err(ProbabilityError::invalid(
            "K must not exceed N: the population cannot hold more successes than items",
        ));
    }
    if population < draws {
        return Err(ProbabilityError::invalid(
            "n must not exceed N: cannot draw more items without replacement than exist",
        ));
    }
    Ok(())
}

/// Guard for a multivariate group list. Derives the population total as the
/// sum of every group's count and applies the range-probability checks per
/// group against that total. Returns the derived total.
pub fn check_group_list(groups: &[Group], draws: i64) -> Result<i64, ProbabilityError> {
    if groups.is_empty() {
        return Err(ProbabilityError::invalid(
            "the group list must contain at least one group",
        ));
    }
    let mut population = 0i64;
    for g in groups {
        if g.count() < 0 {
            return Err(ProbabilityError::invalid(format!(
                "group \"{}\" has a negative count",
                g.name()
            )));
        }
        population += g.count();
    }
    for g in groups {
        check_probability_args(population, g.count(), draws, g.min_needed(), g.max_needed())?;
    }
    Ok(population)
}
