//! Composition of per-hand-size probabilities across mulligans.
//!
//! Each attempt is treated as an independent trial: the chance that every
//! attempt misses is the product of each attempt's miss chance, and the
//! overall success probability is its complement. Successive hands are in
//! truth correlated draws from a reshuffled deck; the independence model
//! is the accepted approximation and is kept deliberately.

use hypergeo_prob::ProbabilityError;

/// Opening hand size for every public mulligan operation.
pub const STARTING_HAND_SIZE: i64 = 7;

/// Success probability across Vancouver (`with_scries`) or Paris mulligans
/// down to `keep` cards.
///
/// `prob_at(size)` must yield the single-draw success probability for a
/// hand of `size` cards. `min_keep` is the tightest group requirement;
/// `keep` below it clamps up, since no smaller hand could ever satisfy
/// the range. Under Vancouver rules every mulligan scries, looking at one
/// card beyond the hand.
pub fn general_mull_to_x<F>(
    prob_at: F,
    keep: i64,
    min_keep: i64,
    with_scries: bool,
    hand_size: i64,
) -> Result<f64, ProbabilityError>
where
    F: Fn(i64) -> Result<f64, ProbabilityError>,
{
    let keep = keep.max(min_keep);
    if keep > hand_size {
        return Err(ProbabilityError::InvalidArgument(
            "cannot mulligan down to more cards than the starting hand holds".into(),
        ));
    }
    if keep == hand_size {
        // No mulligan happens; this is a single draw.
        return prob_at(hand_size);
    }

    let mut failure = 1.0 - prob_at(hand_size)?;
    for size in (keep..hand_size).rev() {
        let looked_at = if with_scries { size + 1 } else { size };
        failure *= 1.0 - prob_at(looked_at)?;
    }
    Ok(1.0 - failure)
}

/// Success probability across London mulligans down to `keep` cards.
///
/// Every attempt draws a full hand before putting cards back, so each of
/// the `hand_size - keep + 1` attempts evaluates at the full hand size.
pub fn london_mull_to_x<F>(
    prob_at: F,
    keep: i64,
    min_keep: i64,
    hand_size: i64,
) -> Result<f64, ProbabilityError>
where
    F: Fn(i64) -> Result<f64, ProbabilityError>,
{
    let keep = keep.max(min_keep);
    if keep > hand_size {
        return Err(ProbabilityError::InvalidArgument(
            "cannot mulligan down to more cards than the starting hand holds".into(),
        ));
    }
    if keep == hand_size {
        return prob_at(hand_size);
    }

    let single = prob_at(hand_size)?;
    let attempts = (hand_size - keep + 1) as i32;
    Ok(1.0 - (1.0 - single).powi(attempts))
}

/// One unconditional extra full-hand draw layered onto a base result.
pub fn with_free_mulligan<F>(
    base: f64,
    prob_at: F,
    hand_size: i64,
) -> Result<f64, ProbabilityError>
where
    F: Fn(i64) -> Result<f64, ProbabilityError>,
{
    Ok(1.0 - (1.0 - base) * (1.0 - prob_at(hand_size)?))
}
