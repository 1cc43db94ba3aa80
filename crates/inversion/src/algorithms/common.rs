use std::cmp::Ordering;

/// Merges two sorted runs into a new vector and counts the cross inversions.
///
/// Ties take from `left`, so equal elements never count and the merge is
/// stable. Each element taken from `right` while `left` still holds `r`
/// elements adds `r`: all of them are strictly greater and came first.
pub fn merge_and_count_by<T, F>(left: &[T], right: &[T], cmp: &F) -> (Vec<T>, u64)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0usize;
    let mut j = 0usize;
    let mut count = 0u64;

    while i < left.len() && j < right.len() {
        if cmp(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j].clone());
            count += (left.len() - i) as u64;
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    (merged, count)
}

/// Merges `src[left..mid]` and `src[mid..right]` into `dst[left..right]`.
#[inline]
pub fn merge_ranges<T, F>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    cmp: &F,
) -> u64
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut i = left;
    let mut j = mid;
    let mut k = left;
    let mut count = 0u64;

    while i < mid && j < right {
        if cmp(&src[j], &src[i]) == Ordering::Less {
            dst[k].clone_from(&src[j]);
            count += (mid - i) as u64;
            j += 1;
        } else {
            dst[k].clone_from(&src[i]);
            i += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].clone_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].clone_from_slice(&src[j..right]);
    }

    count
}

/// Stable insertion sort returning the number of shifts, which equals the
/// number of inversions in `data`.
///
/// Only used on runs bounded by `TUNED_PARAMS.insertion_threshold`.
#[inline]
pub fn insertion_sort_counting<T, F>(data: &mut [T], cmp: &F) -> u64
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut count = 0u64;
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && cmp(&data[j], &data[j - 1]) == Ordering::Less {
            data.swap(j - 1, j);
            count += 1;
            j -= 1;
        }
    }
    count
}

#[inline]
pub fn is_sorted_non_decreasing<T, F>(data: &[T], cmp: &F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    data.windows(2).all(|w| cmp(&w[1], &w[0]) != Ordering::Less)
}

/// `true` when `data[mid - 1] <= data[mid]`, i.e. the two runs need no merge.
#[inline]
pub fn runs_in_order<T, F>(data: &[T], mid: usize, cmp: &F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    cmp(&data[mid], &data[mid - 1]) != Ordering::Less
}
