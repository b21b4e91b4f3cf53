//! Scenario tests for the three mulligan policies over real deck shapes.

use hypergeo_mulligan::{multivariate as multi_mull, univariate as uni_mull};
use hypergeo_prob::{multivariate, univariate, Group};

const TOL: f64 = 1e-12;

fn deck() -> Vec<Group> {
    vec![
        Group::named("Key", 24, 2, 4).unwrap(),
        Group::named("Other", 36, 0, 7).unwrap(),
    ]
}

#[test]
fn london_scenario_from_the_table() {
    // Mulliganing to 5 under London rules is three full-hand attempts.
    let groups = deck();
    let p = multivariate::probability(&groups, 7).unwrap();
    let expected = 1.0 - (1.0 - p).powi(3);
    let got = multi_mull::london_mull_to_x(&groups, 5).unwrap();
    assert!((got - expected).abs() < TOL, "got {got}, expected {expected}");
}

#[test]
fn univariate_and_multivariate_mulligans_agree() {
    // A group plus its complement is the same question as the univariate
    // form, so every policy must give the same answer through both doors.
    let groups = deck();
    let pairs: Vec<(f64, f64)> = vec![
        (
            uni_mull::london_mull_to_x(60, 24, 5, 2, 4).unwrap(),
            multi_mull::london_mull_to_x(&groups, 5).unwrap(),
        ),
        (
            uni_mull::paris_mull_to_x(60, 24, 5, 2, 4).unwrap(),
            multi_mull::paris_mull_to_x(&groups, 5).unwrap(),
        ),
        (
            uni_mull::vancouver_mull_to_x(60, 24, 5, 2, 4).unwrap(),
            multi_mull::vancouver_mull_to_x(&groups, 5).unwrap(),
        ),
        (
            uni_mull::london_mull_to_x_with_free(60, 24, 5, 2, 4).unwrap(),
            multi_mull::london_mull_to_x_with_free(&groups, 5).unwrap(),
        ),
    ];
    for (i, (uni, multi)) in pairs.iter().enumerate() {
        assert!(
            (uni - multi).abs() < 1e-9,
            "pair {i}: uni={uni} multi={multi}"
        );
    }
}

#[test]
fn more_mulligans_never_reduce_success() {
    let mut previous = 0.0;
    for keep in (2..=7).rev() {
        let p = uni_mull::london_mull_to_x(60, 24, keep, 2, 4).unwrap();
        assert!(p >= previous - TOL, "keep={keep}: {p} < {previous}");
        previous = p;
    }
}

#[test]
fn mulligan_results_stay_probabilities() {
    for keep in 2..=7 {
        for p in [
            uni_mull::vancouver_mull_to_x(60, 24, keep, 2, 4).unwrap(),
            uni_mull::paris_mull_to_x(60, 24, keep, 2, 4).unwrap(),
            uni_mull::london_mull_to_x(60, 24, keep, 2, 4).unwrap(),
            uni_mull::vancouver_mull_to_x_with_free(60, 24, keep, 2, 4).unwrap(),
            uni_mull::paris_mull_to_x_with_free(60, 24, keep, 2, 4).unwrap(),
            uni_mull::london_mull_to_x_with_free(60, 24, keep, 2, 4).unwrap(),
        ] {
            assert!((0.0..=1.0).contains(&p), "keep={keep}: {p} out of [0,1]");
        }
    }
}

#[test]
fn at_least_one_land_improves_with_scries() {
    // With an at-least window, looking at an extra card can only help,
    // so Vancouver dominates Paris.
    let vancouver = uni_mull::vancouver_mull_to_x(60, 24, 5, 1, 7).unwrap();
    let paris = uni_mull::paris_mull_to_x(60, 24, 5, 1, 7).unwrap();
    assert!(vancouver >= paris);
}

#[test]
fn single_draw_matches_the_engine_directly() {
    let direct = univariate::probability(60, 24, 7, 2, 4).unwrap();
    assert!((uni_mull::paris_mull_to_x(60, 24, 7, 2, 4).unwrap() - direct).abs() < TOL);
    assert!((uni_mull::london_mull_to_x(60, 24, 7, 2, 4).unwrap() - direct).abs() < TOL);
}
