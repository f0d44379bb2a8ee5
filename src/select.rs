//! Selection helpers for the tree builder.

use std::cmp::Ordering;

use num::Float;

/// Return a total ordering for two distance values.
///
/// Panics when the values are incomparable (NaN).
pub fn cmp_distance<F: Float>(a: &F, b: &F) -> Ordering {
    match a.partial_cmp(b) {
        None => panic!("distance values must be comparable"),
        Some(ord) => ord,
    }
}

/// Select the median distance of a slice of `(distance, payload)` pairs,
/// permuting the slice in the process. Even-length slices yield the upper
/// median.
///
/// Panics if `pairs` is empty.
pub fn median_pair<F: Float, I>(pairs: &mut [(F, I)]) -> F {
    let mid = pairs.len() / 2;
    order_stat::kth_by(pairs, mid, |a, b| cmp_distance(&a.0, &b.0)).0
}
