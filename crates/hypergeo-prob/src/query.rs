//! Caller-facing query descriptors.
//!
//! The parsing layer builds these from user input and the presentation
//! layer consumes the plain `f64` answers; neither owns any probability
//! logic. Both types serialize so they can cross process boundaries.

use serde::{Deserialize, Serialize};

use crate::error::ProbabilityError;
use crate::group::Group;
use crate::{multivariate, univariate};

/// A single-category draw question: population `N`, tracked copies `K`,
/// sample size `n`, acceptable hit range `[k1, k2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnivariateQuery {
    pub population: i64,
    pub successes: i64,
    pub draws: i64,
    pub min_hits: i64,
    pub max_hits: i64,
}

impl UnivariateQuery {
    pub fn new(population: i64, successes: i64, draws: i64, min_hits: i64, max_hits: i64) -> Self {
        Self {
            population,
            successes,
            draws,
            min_hits,
            max_hits,
        }
    }

    /// Exact-count shorthand: `k1 == k2 == hits`.
    pub fn exact(population: i64, successes: i64, draws: i64, hits: i64) -> Self {
        Self::new(population, successes, draws, hits, hits)
    }

    pub fn probability(&self) -> Result<f64, ProbabilityError> {
        univariate::probability(
            self.population,
            self.successes,
            self.draws,
            self.min_hits,
            self.max_hits,
        )
    }

    pub fn mean(&self) -> Result<f64, ProbabilityError> {
        univariate::mean(self.population, self.successes, self.draws)
    }

    pub fn variance(&self) -> Result<f64, ProbabilityError> {
        univariate::variance(self.population, self.successes, self.draws)
    }

    pub fn standard_deviation(&self) -> Result<f64, ProbabilityError> {
        univariate::standard_deviation(self.population, self.successes, self.draws)
    }
}

/// A partitioned draw question: one window per group, sample size `n`.
/// The population total is always the sum of the group counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultivariateQuery {
    pub groups: Vec<Group>,
    pub draws: i64,
}

impl MultivariateQuery {
    pub fn new(groups: Vec<Group>, draws: i64) -> Self {
        Self { groups, draws }
    }

    pub fn probability(&self) -> Result<f64, ProbabilityError> {
        multivariate::probability(&self.groups, self.draws)
    }

    pub fn probability_parallel(&self) -> Result<f64, ProbabilityError> {
        multivariate::probability_parallel(&self.groups, self.draws)
    }

    pub fn mean(&self, target: &Group) -> Result<f64, ProbabilityError> {
        multivariate::mean(&self.groups, target, self.draws)
    }

    pub fn variance(&self, target: &Group) -> Result<f64, ProbabilityError> {
        multivariate::variance(&self.groups, target, self.draws)
    }

    pub fn standard_deviation(&self, target: &Group) -> Result<f64, ProbabilityError> {
        multivariate::standard_deviation(&self.groups, target, self.draws)
    }
}
