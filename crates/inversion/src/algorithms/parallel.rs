use std::cmp::Ordering;

use crate::TUNED_PARAMS;

use super::{common, top_down};

/// Fork-join variant of [`top_down::sort_and_count_by`].
///
/// Both branches return their counts by value, so nothing is shared between
/// the two `rayon::join` closures except `data` and `cmp`, read-only.
pub fn sort_and_count_by<T, F>(data: &[T], cmp: &F) -> (Vec<T>, u64)
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if data.len() <= TUNED_PARAMS.parallel_threshold {
        return top_down::sort_and_count_by(data, cmp);
    }

    let mid = data.len() / 2;
    let (left, right) = data.split_at(mid);

    let ((left, left_count), (right, right_count)) = rayon::join(
        || sort_and_count_by(left, cmp),
        || sort_and_count_by(right, cmp),
    );

    let (merged, cross_count) = common::merge_and_count_by(&left, &right, cmp);
    (merged, left_count + right_count + cross_count)
}
