mod algorithms;
mod input;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use input::{ParseSequenceError, parse_sequence};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CountAlgorithm {
    TopDown,
    TopDownBuffered,
    BottomUp,
    Parallel,
}

pub const ALL_ALGORITHMS: [CountAlgorithm; 4] = [
    CountAlgorithm::TopDown,
    CountAlgorithm::TopDownBuffered,
    CountAlgorithm::BottomUp,
    CountAlgorithm::Parallel,
];

pub fn all_algorithms() -> &'static [CountAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: CountAlgorithm) -> &'static str {
    match algo {
        CountAlgorithm::TopDown => "top_down",
        CountAlgorithm::TopDownBuffered => "top_down_buffered",
        CountAlgorithm::BottomUp => "bottom_up",
        CountAlgorithm::Parallel => "parallel",
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?}, expected one of: top_down, top_down_buffered, bottom_up, parallel")]
pub struct UnknownAlgorithmError(String);

impl CountAlgorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == name)
    }
}

impl FromStr for CountAlgorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownAlgorithmError(s.to_owned()))
    }
}

impl fmt::Display for CountAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Runs up to this length are sorted by a counting insertion sort.
    pub insertion_threshold: usize,
    /// Inputs up to this length are not split across rayon tasks.
    pub parallel_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 16,
    parallel_threshold: 4096,
};

/// Reusable scratch space for the in-place variants.
#[derive(Clone, Debug)]
pub struct CountContext<T> {
    scratch: Vec<T>,
}

impl<T> Default for CountContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Clone> CountContext<T> {
    #[inline]
    pub(crate) fn load_scratch(&mut self, data: &[T]) -> &mut [T] {
        self.scratch.clear();
        self.scratch.extend_from_slice(data);
        &mut self.scratch[..]
    }
}

/// Returns `data` sorted in non-decreasing order together with its number of
/// inversions, the pairs `(i, j)` with `i < j` and `data[i] > data[j]`.
///
/// `data` is left untouched. Equal elements keep their relative order and
/// never count as an inversion.
///
/// ```
/// let (sorted, inversions) = inversion::sort_and_count(&[2, 4, 1, 3, 5]);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// assert_eq!(inversions, 3);
/// ```
pub fn sort_and_count<T: Ord + Clone>(data: &[T]) -> (Vec<T>, u64) {
    algorithms::top_down::sort_and_count_by(data, &T::cmp)
}

/// [`sort_and_count`] under the order given by `cmp`.
pub fn sort_and_count_by<T, F>(data: &[T], cmp: F) -> (Vec<T>, u64)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    algorithms::top_down::sort_and_count_by(data, &cmp)
}

/// Merges two sorted slices, returning the merged run and the number of
/// pairs `(a, b)` with `a` from `left`, `b` from `right` and `a > b`.
///
/// Both inputs must already be sorted; the count is meaningless otherwise.
pub fn merge_and_count<T: Ord + Clone>(left: &[T], right: &[T]) -> (Vec<T>, u64) {
    debug_assert!(algorithms::common::is_sorted_non_decreasing(left, &T::cmp));
    debug_assert!(algorithms::common::is_sorted_non_decreasing(right, &T::cmp));
    algorithms::common::merge_and_count_by(left, right, &T::cmp)
}

/// [`sort_and_count`] with the two halves of large inputs sorted on the
/// rayon thread pool.
pub fn par_sort_and_count<T: Ord + Clone + Send + Sync>(data: &[T]) -> (Vec<T>, u64) {
    algorithms::parallel::sort_and_count_by(data, &T::cmp)
}

pub fn count_inversions<T: Ord + Clone>(data: &[T]) -> u64 {
    let mut work = data.to_vec();
    let mut ctx = CountContext::default();
    algorithms::top_down_buffered::sort(&mut work, &mut ctx, &T::cmp)
}

pub fn sort_in_place_and_count<T: Ord + Clone + Send + Sync>(
    algo: CountAlgorithm,
    data: &mut [T],
) -> u64 {
    let mut ctx = CountContext::default();
    sort_in_place_and_count_with_ctx(algo, data, &mut ctx)
}

pub fn sort_in_place_and_count_with_ctx<T: Ord + Clone + Send + Sync>(
    algo: CountAlgorithm,
    data: &mut [T],
    ctx: &mut CountContext<T>,
) -> u64 {
    match algo {
        CountAlgorithm::TopDown => {
            let (sorted, count) = algorithms::top_down::sort_and_count_by(data, &T::cmp);
            data.clone_from_slice(&sorted);
            count
        }
        CountAlgorithm::TopDownBuffered => {
            algorithms::top_down_buffered::sort(data, ctx, &T::cmp)
        }
        CountAlgorithm::BottomUp => algorithms::bottom_up::sort(data, ctx, &T::cmp),
        CountAlgorithm::Parallel => {
            let (sorted, count) = algorithms::parallel::sort_and_count_by(data, &T::cmp);
            data.clone_from_slice(&sorted);
            count
        }
    }
}
