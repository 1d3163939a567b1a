//! Pairwise merge protocol for partial subset-sum results.
//!
//! Two results covering adjacent stretches `A` and `B` of the sorted input
//! combine into one for `AB`:
//!
//! `Σu(AB) = (Σu(A) ∪ Σu(B) ∪ (Σu(A) ⊕ Σu(B))) ∩ [0, u)`
//!
//! The Minkowski sum is the expensive part. With every element of `AB` in
//! `a + [0, l)` and at most `k = min(n, ⌈u/a⌉)` elements in any sum below
//! `u`, each relevant sum is `j·a + r` with `j <= k` and `r < k·l`. When
//! `k²·l < u` we compress with [`perfect_h`] using `(a, k·l)` so the FFT runs
//! over a range proportional to `k²·l` rather than `u`; otherwise the plain
//! convolution is no worse.
//!
//! [`MergeEngine::combine`] reduces a whole sequence of results as a
//! balanced binary tree, one round at a time: adjacent pairs merge, an odd
//! trailing result is carried into the next round unchanged.

use crate::blocks::SubsetSums;
use crate::compression::{inverse_h, perfect_h};
use crate::convolution::{minkowski_sum_bounded, DEFAULT_MAX_CONVOLUTION_LEN};
use crate::error::{Error, Result};
use crate::utils::ceil_div;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which convolution strategy a merge used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePath {
    /// Convolve the sum-sets directly.
    Standard,
    /// Convolve after coordinate compression with stride `max_l = k·l`.
    Compressed { max_l: u64 },
}

impl MergePath {
    #[cfg(feature = "tracing")]
    fn as_str(self) -> &'static str {
        match self {
            MergePath::Standard => "standard",
            MergePath::Compressed { .. } => "compressed",
        }
    }
}

/// Merges partial results under a fixed bound `u`.
///
/// Typical usage:
/// ```
/// use subset_sums::{blocks::SubsetSums, engine::MergeEngine};
///
/// let engine = MergeEngine::new(100);
/// let seeds = [1u64, 2, 3, 4, 5].map(SubsetSums::singleton).to_vec();
/// let merged = engine.combine(seeds).unwrap();
/// assert_eq!(merged.size(), 5);
/// assert_eq!(merged.sums().len(), 15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MergeEngine {
    bound: u64,
    max_convolution_len: u64,
}

impl MergeEngine {
    /// Engine for bound `u` with the default convolution ceiling.
    pub fn new(bound: u64) -> Self {
        Self::with_max_convolution_len(bound, DEFAULT_MAX_CONVOLUTION_LEN)
    }

    /// Engine for bound `u` with an explicit convolution ceiling.
    ///
    /// # Panics
    /// Panics if `max_convolution_len == 0`.
    pub fn with_max_convolution_len(bound: u64, max_convolution_len: u64) -> Self {
        assert!(
            max_convolution_len > 0,
            "max_convolution_len must be positive"
        );
        Self {
            bound,
            max_convolution_len,
        }
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn max_convolution_len(&self) -> u64 {
        self.max_convolution_len
    }

    /// Cost model for a merge over elements in `a + [0, l)`, `n` of them.
    ///
    /// Returns [`MergePath::Standard`] when `k²·l >= u`, otherwise
    /// [`MergePath::Compressed`] with `max_l = k·l`, where
    /// `k = min(n, ⌈u/a⌉)`. Requires `a >= 1`.
    pub fn choose_path(&self, a: u64, l: u64, n: u64) -> MergePath {
        debug_assert!(a >= 1);
        let k = n.min(ceil_div(self.bound, a));
        let cost = u128::from(k) * u128::from(k) * u128::from(l);
        if cost >= u128::from(self.bound) {
            MergePath::Standard
        } else {
            // cost < u, so k·l fits comfortably in u64.
            MergePath::Compressed { max_l: k * l }
        }
    }

    /// Combine results for two adjacent, disjoint stretches into one.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "trace",
            skip(self, left, right),
            fields(left_size = left.size, right_size = right.size)
        )
    )]
    pub fn merge(&self, left: &SubsetSums, right: &SubsetSums) -> Result<SubsetSums> {
        let u = self.bound;
        let span = left.span.union(&right.span);
        let a = span.lo;
        if a == 0 {
            return Err(Error::InvalidArgument(
                "partial results must not contain the element 0".into(),
            ));
        }
        let l = span.width();
        let size = left.size + right.size;

        let path = self.choose_path(a, l, size as u64);
        #[cfg(feature = "tracing")]
        tracing::debug!(path = path.as_str(), a, l, n = size, u, "merge path");

        let pairwise = match path {
            MergePath::Standard => {
                minkowski_sum_bounded(&left.sums, &right.sums, self.max_convolution_len)?
            }
            MergePath::Compressed { max_l } => {
                let ha = perfect_h(&left.sums, a, max_l);
                let hb = perfect_h(&right.sums, a, max_l);
                let hab = minkowski_sum_bounded(&ha, &hb, self.max_convolution_len)?;
                inverse_h(&hab, a, max_l)
            }
        };

        let sums = left
            .sums
            .range(..u)
            .chain(right.sums.range(..u))
            .chain(pairwise.range(..u))
            .copied()
            .collect();

        Ok(SubsetSums { sums, span, size })
    }

    /// Reduce an ordered, non-empty sequence of results to one.
    ///
    /// A single result is returned as-is, without filtering its sums.
    pub fn combine(&self, mut sets: Vec<SubsetSums>) -> Result<SubsetSums> {
        if sets.is_empty() {
            return Err(Error::InvalidArgument(
                "combine needs at least one partial result".into(),
            ));
        }
        while sets.len() > 1 {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("combine_round", width = sets.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            sets = self.merge_round(sets)?;
        }
        sets.pop().ok_or_else(|| {
            Error::InternalInvariantViolation("combine lost every partial result".into())
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn merge_round(&self, sets: Vec<SubsetSums>) -> Result<Vec<SubsetSums>> {
        let mut next = Vec::with_capacity(sets.len() / 2 + 1);
        let mut iter = sets.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => next.push(self.merge(&left, &right)?),
                None => next.push(left),
            }
        }
        Ok(next)
    }

    #[cfg(feature = "parallel")]
    fn merge_round(&self, sets: Vec<SubsetSums>) -> Result<Vec<SubsetSums>> {
        let mut pairs = Vec::with_capacity(sets.len() / 2 + 1);
        let mut iter = sets.into_iter();
        while let Some(left) = iter.next() {
            pairs.push((left, iter.next()));
        }
        pairs
            .into_par_iter()
            .map(|(left, right)| match right {
                Some(right) => self.merge(&left, &right),
                None => Ok(left),
            })
            .collect()
    }
}

/// Merge two partial results under bound `u` with the default ceiling.
pub fn merge_subset_sums(left: &SubsetSums, right: &SubsetSums, u: u64) -> Result<SubsetSums> {
    MergeEngine::new(u).merge(left, right)
}

/// Reduce a non-empty sequence of partial results under bound `u`.
pub fn combine(sets: Vec<SubsetSums>, u: u64) -> Result<SubsetSums> {
    MergeEngine::new(u).combine(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Span;
    use std::collections::BTreeSet;

    fn naive_sums(values: &[u64], u: u64) -> BTreeSet<u64> {
        let n = values.len();
        (1u32..(1 << n))
            .map(|mask| {
                (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| values[i])
                    .sum::<u64>()
            })
            .filter(|&s| s < u)
            .collect()
    }

    fn naive_result(values: &[u64], u: u64) -> SubsetSums {
        let lo = *values.iter().min().unwrap();
        let hi = *values.iter().max().unwrap();
        SubsetSums::new(naive_sums(values, u), Span::closed(lo, hi), values.len())
    }

    #[test]
    fn combines_singletons() {
        let values = [1, 2, 3, 4, 5];
        let seeds = values.iter().map(|&x| SubsetSums::singleton(x)).collect();
        let merged = combine(seeds, 100).unwrap();
        assert_eq!(merged.sums(), &naive_sums(&values, 100));
        assert_eq!(merged.span(), Span::closed(1, 5));
        assert_eq!(merged.size(), 5);
    }

    #[test]
    fn combine_of_one_is_identity() {
        let single = combine(vec![SubsetSums::singleton(42)], 100).unwrap();
        assert_eq!(single.sums(), &BTreeSet::from([42]));
        let unfiltered = combine(vec![SubsetSums::singleton(42)], 20).unwrap();
        assert_eq!(unfiltered.sums(), &BTreeSet::from([42]));
    }

    #[test]
    fn combine_of_nothing_is_rejected() {
        assert!(matches!(
            combine(Vec::new(), 10),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn odd_width_rounds_carry_the_tail() {
        let values = [3, 5, 8, 13, 21, 34, 55];
        let seeds = values.iter().map(|&x| SubsetSums::singleton(x)).collect();
        let merged = combine(seeds, 90).unwrap();
        assert_eq!(merged.sums(), &naive_sums(&values, 90));
        assert_eq!(merged.size(), values.len());
    }

    #[test]
    fn compressed_path_merge() {
        let a = [51, 52, 53];
        let b = [50, 54, 55];
        let u = 100;
        let engine = MergeEngine::new(u);
        assert_eq!(
            engine.choose_path(50, 6, 6),
            MergePath::Compressed { max_l: 12 }
        );
        let merged = engine
            .merge(&naive_result(&a, u), &naive_result(&b, u))
            .unwrap();
        assert_eq!(merged.sums(), &naive_sums(&[51, 52, 53, 50, 54, 55], u));
        assert_eq!(merged.span(), Span::closed(50, 55));
        assert_eq!(merged.size(), 6);
    }

    #[test]
    fn standard_path_merge() {
        let a = [5, 6, 7];
        let b = [8, 9, 10];
        let u = 20;
        let engine = MergeEngine::new(u);
        assert_eq!(engine.choose_path(5, 6, 6), MergePath::Standard);
        let merged = merge_subset_sums(&naive_result(&a, u), &naive_result(&b, u), u).unwrap();
        assert_eq!(merged.sums(), &naive_sums(&[5, 6, 7, 8, 9, 10], u));
    }

    #[test]
    fn compressed_path_with_multi_element_sums() {
        // a = 40, l = 3, n = 3: k = min(3, 5) = 3, k²l = 27 < 200.
        let u = 200;
        let engine = MergeEngine::new(u);
        assert_eq!(
            engine.choose_path(40, 3, 3),
            MergePath::Compressed { max_l: 9 }
        );
        let left = naive_result(&[40, 41], u);
        let merged = engine.merge(&left, &SubsetSums::singleton(42)).unwrap();
        assert_eq!(merged.sums(), &naive_sums(&[40, 41, 42], u));
        assert!(merged.sums().contains(&123));
    }

    #[test]
    fn engine_keeps_its_configuration() {
        let default = MergeEngine::new(500);
        assert_eq!(default.bound(), 500);
        assert_eq!(default.max_convolution_len(), DEFAULT_MAX_CONVOLUTION_LEN);
        let tight = MergeEngine::with_max_convolution_len(500, 64);
        assert_eq!(tight.bound(), 500);
        assert_eq!(tight.max_convolution_len(), 64);
    }

    #[test]
    fn trailing_result_survives_many_rounds() {
        // Widths 5 -> 3 -> 2 -> 1: the tail is carried twice before merging.
        let values = [7, 9, 12, 17, 30];
        let seeds = values.iter().map(|&x| SubsetSums::singleton(x)).collect();
        let merged = MergeEngine::new(60).combine(seeds).unwrap();
        assert_eq!(merged.sums(), &naive_sums(&values, 60));
        assert_eq!(merged.span(), Span::closed(7, 30));
        assert_eq!(merged.size(), values.len());
    }

    #[test]
    fn capacity_errors_propagate() {
        let engine = MergeEngine::with_max_convolution_len(1000, 8);
        let err = engine
            .merge(&SubsetSums::singleton(10), &SubsetSums::singleton(11))
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    #[should_panic]
    fn zero_ceiling_panics() {
        let _ = MergeEngine::with_max_convolution_len(10, 0);
    }
}
