//! Enumeration of per-group draw-count vectors.

use crate::group::Group;

/// Every vector of per-group draw counts, one coordinate per group in
/// input order, with coordinate `i` inside group `i`'s
/// `[min_needed, max_needed]` window and the coordinates summing to
/// `draws`.
///
/// Instead of building the full Cartesian product of the windows and
/// discarding vectors with the wrong total, each coordinate is restricted
/// up front to the values that leave the remaining groups a reachable
/// total, so only surviving vectors are ever constructed. Cost is
/// proportional to the output size times the group count rather than the
/// product of all window widths.
///
/// The result is deterministic; callers may not rely on any ordering
/// beyond one coordinate per group in input order.
pub fn enumerate(groups: &[Group], draws: i64) -> Vec<Vec<i64>> {
    if groups.is_empty() {
        return Vec::new();
    }

    // suffix_min[i] / suffix_max[i]: bounds on what groups i.. can draw.
    let len = groups.len();
    let mut suffix_min = vec![0i64; len + 1];
    let mut suffix_max = vec![0i64; len + 1];
    for i in (0..len).rev() {
        suffix_min[i] = suffix_min[i + 1] + groups[i].min_needed();
        suffix_max[i] = suffix_max[i + 1] + groups[i].max_needed();
    }

    let mut partials: Vec<(i64, Vec<i64>)> = vec![(0, Vec::new())];
    for (i, group) in groups.iter().enumerate() {
        let mut extended = Vec::new();
        for (sum, partial) in &partials {
            // The window of values this coordinate may take while the
            // remaining groups can still bring the total to `draws`.
            let lo = group.min_needed().max(draws - sum - suffix_max[i + 1]);
            let hi = group.max_needed().min(draws - sum - suffix_min[i + 1]);
            for value in lo..=hi {
                let mut vector = Vec::with_capacity(len);
                vector.extend_from_slice(partial);
                vector.push(value);
                extended.push((sum + value, vector));
            }
        }
        partials = extended;
    }

    partials.into_iter().map(|(_, vector)| vector).collect()
}
