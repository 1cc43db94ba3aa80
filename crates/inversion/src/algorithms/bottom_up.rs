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

    let run = TUNED_PARAMS.insertion_threshold.max(1);
    let mut count = 0u64;
    for chunk in data.chunks_mut(run) {
        count += common::insertion_sort_counting(chunk, cmp);
    }
    if len <= run {
        return count;
    }

    let buf = ctx.load_scratch(data);

    let mut width = run;
    let mut src_is_buf = true;
    while width < len {
        if src_is_buf {
            count += merge_pass(buf, data, width, cmp);
        } else {
            count += merge_pass(data, buf, width, cmp);
        }
        src_is_buf = !src_is_buf;
        width <<= 1;
    }

    if src_is_buf {
        data.clone_from_slice(buf);
    }
    count
}

fn merge_pass<T, F>(src: &[T], dst: &mut [T], width: usize, cmp: &F) -> u64
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = src.len();
    let mut count = 0u64;
    let mut left = 0usize;
    while left < len {
        let mid = (left + width).min(len);
        let right = (mid + width).min(len);

        if mid >= right || common::runs_in_order(src, mid, cmp) {
            dst[left..right].clone_from_slice(&src[left..right]);
        } else {
            count += common::merge_ranges(src, dst, left, mid, right, cmp);
        }

        left = right;
    }
    count
}
