use std::cmp::Ordering;

use super::common;

/// Sorts a copy of `data` and counts its inversions.
///
/// Each call returns its own `(sorted, count)` pair; the halves are borrowed
/// views of `data` and only the merged runs are allocated.
pub fn sort_and_count_by<T, F>(data: &[T], cmp: &F) -> (Vec<T>, u64)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return (data.to_vec(), 0);
    }

    let mid = data.len() / 2;
    let (left, right) = data.split_at(mid);

    let (left, left_count) = sort_and_count_by(left, cmp);
    let (right, right_count) = sort_and_count_by(right, cmp);

    let (merged, cross_count) = common::merge_and_count_by(&left, &right, cmp);
    (merged, left_count + right_count + cross_count)
}
