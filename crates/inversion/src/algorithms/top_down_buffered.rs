use std::cmp::Ordering;

use crate::{CountContext, TUNED_PARAMS};

use super::common;

pub fn sort<T, F>(data: &mut [T], ctx: &mut CountContext<T>, cmp: &F) -> u64
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return 0;
    }
    if common::is_sorted_non_decreasing(data, cmp) {
        return 0;
    }

    let buf = ctx.load_scratch(data);
    merge_sort_recursive(buf, data, 0, len, cmp)
}

// On entry `src[left..right]` and `dst[left..right]` hold the same elements;
// on return `dst[left..right]` is sorted.
fn merge_sort_recursive<T, F>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    cmp: &F,
) -> u64
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = right - left;
    if len <= TUNED_PARAMS.insertion_threshold {
        return common::insertion_sort_counting(&mut dst[left..right], cmp);
    }

    let mid = left + (len >> 1);

    let left_count = merge_sort_recursive(dst, src, left, mid, cmp);
    let right_count = merge_sort_recursive(dst, src, mid, right, cmp);

    if common::runs_in_order(src, mid, cmp) {
        dst[left..right].clone_from_slice(&src[left..right]);
        return left_count + right_count;
    }

    left_count + right_count + common::merge_ranges(src, dst, left, mid, right, cmp)
}
