//! Sub-quadratic solver: geometric intervals plus FFT merges.
//!
//! The sorted input is cut at the boundaries from
//! [`interval_boundaries`](crate::utils::interval_boundaries). Inside each
//! interval every element becomes a singleton partial result and the
//! singletons are reduced with [`MergeEngine::combine`]. The per-interval
//! results are then combined once more into the final answer.
//!
//! Elements inside one interval share a similar magnitude, which keeps
//! `k = min(n, ⌈u/a⌉)` small for every merge and lets the compressed merge
//! path do most of the work. Expected running time is
//! `O(√n · u · polylog(√n · u))`.
//!
//! Interval solves are independent of one another; with the `parallel`
//! feature they run on the rayon pool.

use std::collections::BTreeSet;

use crate::blocks::{Span, SubsetSums};
use crate::convolution::DEFAULT_MAX_CONVOLUTION_LEN;
use crate::engine::MergeEngine;
use crate::error::{Error, Result};
use crate::traits::SubsetSummer;
use crate::utils::interval_boundaries;
use crate::validate::{validate_input, validate_output};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Interval-splitting solver backed by [`MergeEngine`].
///
/// Typical usage:
/// ```
/// use std::collections::BTreeSet;
/// use subset_sums::{FastIntervalSummer, SubsetSummer};
///
/// let s: BTreeSet<u64> = [2, 3].into_iter().collect();
/// let sums = FastIntervalSummer::default().subset_sums(&s, 42).unwrap();
/// assert_eq!(sums.into_iter().collect::<Vec<_>>(), vec![2, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FastIntervalSummer {
    max_convolution_len: u64,
}

impl Default for FastIntervalSummer {
    fn default() -> Self {
        Self::new()
    }
}

impl FastIntervalSummer {
    /// Solver with the default convolution ceiling.
    pub fn new() -> Self {
        Self::with_max_convolution_len(DEFAULT_MAX_CONVOLUTION_LEN)
    }

    /// Solver with an explicit convolution ceiling.
    ///
    /// # Panics
    /// Panics if `max_convolution_len == 0`.
    pub fn with_max_convolution_len(max_convolution_len: u64) -> Self {
        assert!(
            max_convolution_len > 0,
            "max_convolution_len must be positive"
        );
        Self {
            max_convolution_len,
        }
    }

    pub fn max_convolution_len(&self) -> u64 {
        self.max_convolution_len
    }

    /// One partial result per non-empty interval `[bounds[i], bounds[i+1])`,
    /// in ascending order.
    #[cfg(not(feature = "parallel"))]
    fn solve_intervals(
        &self,
        engine: &MergeEngine,
        s: &BTreeSet<u64>,
        bounds: &[u64],
    ) -> Result<Vec<SubsetSums>> {
        bounds
            .windows(2)
            .filter_map(|w| solve_interval(engine, s, w[0], w[1]))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn solve_intervals(
        &self,
        engine: &MergeEngine,
        s: &BTreeSet<u64>,
        bounds: &[u64],
    ) -> Result<Vec<SubsetSums>> {
        bounds
            .par_windows(2)
            .filter_map(|w| solve_interval(engine, s, w[0], w[1]))
            .collect()
    }
}

/// `None` for an empty interval.
fn solve_interval(
    engine: &MergeEngine,
    s: &BTreeSet<u64>,
    lo: u64,
    hi: u64,
) -> Option<Result<SubsetSums>> {
    if lo >= hi {
        return None;
    }
    let seeds: Vec<SubsetSums> = s.range(lo..hi).map(|&x| SubsetSums::singleton(x)).collect();
    if seeds.is_empty() {
        return None;
    }
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("solve_interval", lo, hi, elements = seeds.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();
    Some(engine.combine(seeds))
}

impl SubsetSummer for FastIntervalSummer {
    fn subset_sums(&self, s: &BTreeSet<u64>, u: u64) -> Result<BTreeSet<u64>> {
        validate_input(s, u)?;
        if s.is_empty() {
            return Ok(BTreeSet::new());
        }
        let n = s.len();

        let engine = MergeEngine::with_max_convolution_len(u, self.max_convolution_len);
        let bounds = interval_boundaries(n, u);
        #[cfg(feature = "tracing")]
        tracing::debug!(n, u, intervals = bounds.len() - 1, "interval schedule");

        let partials = self.solve_intervals(&engine, s, &bounds)?;
        let output = engine.combine(partials)?;

        validate_output(&output.sums, u)?;
        if !Span::closed(0, u - 1).encloses(&output.span) {
            return Err(Error::InternalInvariantViolation(format!(
                "result span [{}, {}] escapes [0, {}]",
                output.span.lo,
                output.span.hi,
                u - 1
            )));
        }
        if output.size != n {
            return Err(Error::InternalInvariantViolation(format!(
                "result accounts for {} elements, input has {n}",
                output.size
            )));
        }
        Ok(output.into_sums())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::optimized_dp::OptimizedDynamicProgrammingSummer;

    fn set(values: &[u64]) -> BTreeSet<u64> {
        values.iter().copied().collect()
    }

    #[test]
    fn sums_first_five_integers() {
        let sums = FastIntervalSummer::default()
            .subset_sums(&set(&[1, 2, 3, 4, 5]), 100)
            .unwrap();
        assert_eq!(sums, (1..=15).collect::<BTreeSet<u64>>());
    }

    #[test]
    fn trivial_cases() {
        let fast = FastIntervalSummer::default();
        assert_eq!(fast.subset_sums(&set(&[]), 42).unwrap(), set(&[]));
        assert_eq!(fast.subset_sums(&set(&[7]), 42).unwrap(), set(&[7]));
        assert_eq!(fast.subset_sums(&set(&[2, 3]), 42).unwrap(), set(&[2, 3, 5]));
        assert_eq!(fast.subset_sums(&set(&[2, 3]), 5).unwrap(), set(&[2, 3]));
    }

    #[test]
    fn many_intervals_match_compact_dp() {
        // Around forty elements: k = 3, so four intervals.
        let s: BTreeSet<u64> = (0..40u64).map(|i| 3 + i * i * 7 % 997).collect();
        let u = 1000;
        let s: BTreeSet<u64> = s.into_iter().filter(|&x| x < u).collect();
        assert_eq!(
            FastIntervalSummer::default().subset_sums(&s, u).unwrap(),
            OptimizedDynamicProgrammingSummer.subset_sums(&s, u).unwrap()
        );
    }

    #[test]
    fn tight_ceiling_surfaces_capacity_error() {
        let err = FastIntervalSummer::with_max_convolution_len(4)
            .subset_sums(&set(&[10, 11, 12]), 100)
            .unwrap_err();
        assert!(err.is_recoverable(), "{err}");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(
            FastIntervalSummer::default().subset_sums(&set(&[0, 5]), 10),
            Err(Error::InvalidArgument(_))
        ));
    }
}
