//! Mulligan probabilities over a partitioned deck.
//!
//! Same six operations as the univariate surface, with every hand's
//! single-draw probability coming from the multivariate engine. The
//! mulligan floor is the largest `min_needed` across the groups: no
//! smaller hand could satisfy every window at once.

use hypergeo_prob::{multivariate, Group, ProbabilityError};

use crate::compose::{self, STARTING_HAND_SIZE};

fn min_keep(groups: &[Group]) -> i64 {
    groups.iter().map(Group::min_needed).max().unwrap_or(0)
}

/// Probability of drawing a hand inside every group's window while
/// mulliganing down to `keep` cards under Vancouver rules.
pub fn vancouver_mull_to_x(groups: &[Group], keep: i64) -> Result<f64, ProbabilityError> {
    compose::general_mull_to_x(
        |size| multivariate::probability(groups, size),
        keep,
        min_keep(groups),
        true,
        STARTING_HAND_SIZE,
    )
}

/// [`vancouver_mull_to_x`] with one extra unconditional full-hand draw.
pub fn vancouver_mull_to_x_with_free(groups: &[Group], keep: i64) -> Result<f64, ProbabilityError> {
    let base = vancouver_mull_to_x(groups, keep)?;
    compose::with_free_mulligan(
        base,
        |size| multivariate::probability(groups, size),
        STARTING_HAND_SIZE,
    )
}

/// Like [`vancouver_mull_to_x`] under Paris rules (no scries).
pub fn paris_mull_to_x(groups: &[Group], keep: i64) -> Result<f64, ProbabilityError> {
    compose::general_mull_to_x(
        |size| multivariate::probability(groups, size),
        keep,
        min_keep(groups),
        false,
        STARTING_HAND_SIZE,
    )
}

/// [`paris_mull_to_x`] with one extra unconditional full-hand draw.
pub fn paris_mull_to_x_with_free(groups: &[Group], keep: i64) -> Result<f64, ProbabilityError> {
    let base = paris_mull_to_x(groups, keep)?;
    compose::with_free_mulligan(
        base,
        |size| multivariate::probability(groups, size),
        STARTING_HAND_SIZE,
    )
}

/// Like [`vancouver_mull_to_x`] under London rules.
pub fn london_mull_to_x(groups: &[Group], keep: i64) -> Result<f64, ProbabilityError> {
    compose::london_mull_to_x(
        |size| multivariate::probability(groups, size),
        keep,
        min_keep(groups),
        STARTING_HAND_SIZE,
    )
}

/// [`london_mull_to_x`] with one extra unconditional full-hand draw.
pub fn london_mull_to_x_with_free(groups: &[Group], keep: i64) -> Result<f64, ProbabilityError> {
    let base = london_mull_to_x(groups, keep)?;
    compose::with_free_mulligan(
        base,
        |size| multivariate::probability(groups, size),
        STARTING_HAND_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn deck() -> Vec<Group> {
        vec![
            Group::named("Key", 24, 2, 4).unwrap(),
            Group::named("Other", 36, 0, 7).unwrap(),
        ]
    }

    #[test]
    fn london_to_five_is_three_full_hand_attempts() {
        let groups = deck();
        let p_single = multivariate::probability(&groups, 7).unwrap();
        let expected = 1.0 - (1.0 - p_single).powi(3);
        let p = london_mull_to_x(&groups, 5).unwrap();
        assert!((p - expected).abs() < TOL, "got {p}, expected {expected}");
    }

    #[test]
    fn london_is_monotone_in_mulligan_depth() {
        let groups = deck();
        let mut previous = 0.0;
        // Keeping fewer cards can only add attempts.
        for keep in (2..=7).rev() {
            let p = london_mull_to_x(&groups, keep).unwrap();
            assert!(
                p >= previous - TOL,
                "keep={keep}: {p} should not drop below {previous}"
            );
            previous = p;
        }
    }

    #[test]
    fn keep_below_the_largest_window_floor_clamps() {
        let groups = deck();
        // The Key group needs at least 2, so keep=0 behaves as keep=2.
        let clamped = paris_mull_to_x(&groups, 0).unwrap();
        let explicit = paris_mull_to_x(&groups, 2).unwrap();
        assert!((clamped - explicit).abs() < TOL);
    }

    #[test]
    fn keep_above_the_hand_fails() {
        assert!(matches!(
            vancouver_mull_to_x(&deck(), 8),
            Err(ProbabilityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn with_free_matches_the_layering_formula() {
        let groups = deck();
        let base = vancouver_mull_to_x(&groups, 5).unwrap();
        let p_single = multivariate::probability(&groups, 7).unwrap();
        let expected = 1.0 - (1.0 - base) * (1.0 - p_single);
        let p = vancouver_mull_to_x_with_free(&groups, 5).unwrap();
        assert!((p - expected).abs() < TOL);
    }

    #[test]
    fn empty_group_list_propagates_the_engine_error() {
        assert!(matches!(
            london_mull_to_x(&[], 5),
            Err(ProbabilityError::InvalidArgument(_))
        ));
    }

    // ---------------------------------------------------------------
    // Proptest: property-based / randomized tests
    // ---------------------------------------------------------------

    use proptest::prelude::*;
    use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

    fn mull_proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 64,
            source_file: Some(file!()),
            failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
                "proptest-regressions",
            ))),
            ..ProptestConfig::default()
        }
    }

    /// Random decks large enough to deal a full starting hand, with
    /// window floors a keepable hand can always satisfy.
    fn deck_strategy() -> impl Strategy<Value = Vec<Group>> {
        proptest::collection::vec((4i64..=30, 0i64..=2, 0i64..=5), 2..=3).prop_map(|specs| {
            specs
                .iter()
                .enumerate()
                .map(|(i, &(count, lo, extra))| {
                    Group::named(format!("g{i}"), count, lo, lo + extra).unwrap()
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(mull_proptest_config())]

        /// Keeping fewer cards only adds full-hand attempts under London
        /// rules, so success never drops as the keep target falls.
        #[test]
        fn london_monotone_over_random_decks(groups in deck_strategy()) {
            let floor = min_keep(&groups);
            let mut previous = 0.0;
            let mut keep = STARTING_HAND_SIZE;
            while keep >= floor {
                let p = london_mull_to_x(&groups, keep).unwrap();
                prop_assert!(
                    p >= previous - 1e-12,
                    "keep={keep}: {p} dropped below {previous}"
                );
                previous = p;
                keep -= 1;
            }
        }

        /// The unconditional extra draw never hurts, under any policy,
        /// and the layered result is still a probability.
        #[test]
        fn free_mulligan_dominates(groups in deck_strategy(), keep in 0i64..=7) {
            let cases = [
                (
                    vancouver_mull_to_x(&groups, keep).unwrap(),
                    vancouver_mull_to_x_with_free(&groups, keep).unwrap(),
                ),
                (
                    paris_mull_to_x(&groups, keep).unwrap(),
                    paris_mull_to_x_with_free(&groups, keep).unwrap(),
                ),
                (
                    london_mull_to_x(&groups, keep).unwrap(),
                    london_mull_to_x_with_free(&groups, keep).unwrap(),
                ),
            ];
            for (base, with_free) in cases {
                prop_assert!(
                    with_free >= base - 1e-12,
                    "with_free={with_free} fell below base={base}"
                );
                prop_assert!(
                    (0.0..=1.0 + 1e-12).contains(&with_free),
                    "with_free={with_free} out of [0,1]"
                );
            }
        }
    }
}
