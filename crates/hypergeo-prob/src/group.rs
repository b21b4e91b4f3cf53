//! A named partition of the population.

use serde::{Deserialize, Serialize};

use crate::error::ProbabilityError;

/// One partition of the population: how many copies it holds and how many
/// of them a drawn sample must contain to count as a success.
///
/// Immutable after construction. A group can never require more copies
/// than it contains; that is rejected at construction rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: String,
    count: i64,
    min_needed: i64,
    max_needed: i64,
}

impl Group {
    /// Anonymous group.
    pub fn new(count: i64, min_needed: i64, max_needed: i64) -> Result<Self, ProbabilityError> {
        Self::named("", count, min_needed, max_needed)
    }

    /// Named group.
    pub fn named(
        name: impl Into<String>,
        count: i64,
        min_needed: i64,
        max_needed: i64,
    ) -> Result<Self, ProbabilityError> {
        if count < min_needed {
            return Err(ProbabilityError::invalid(format!(
                "a group cannot require more copies ({min_needed}) than it contains ({count})"
            )));
        }
        Ok(Self {
            name: name.into(),
            count,
            min_needed,
            max_needed,
        })
    }

    /// Display name; may be empty for anonymous groups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copies of this group in the population (the group's `K`).
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Minimum acceptable draws from this group (`k1`).
    pub fn min_needed(&self) -> i64 {
        self.min_needed
    }

    /// Maximum acceptable draws from this group (`k2`).
    pub fn max_needed(&self) -> i64 {
        self.max_needed
    }
}
