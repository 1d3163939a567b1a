//! Partial results exchanged by the merge protocol.
//!
//! Each [`SubsetSums`] represents a contiguous stretch of the sorted input
//! together with the bounded subset sums of that stretch. Results start
//! out as singletons and are merged pairwise until one remains.

use std::collections::BTreeSet;

/// Closed interval `[lo, hi]` of input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Smallest element covered.
    pub lo: u64,
    /// Largest element covered (inclusive).
    pub hi: u64,
}

impl Span {
    /// Build `[lo, hi]`.
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    pub fn closed(lo: u64, hi: u64) -> Self {
        assert!(lo <= hi, "span lower bound {lo} exceeds upper bound {hi}");
        Self { lo, hi }
    }

    /// Single-point span `[x, x]`.
    #[inline]
    pub fn point(x: u64) -> Self {
        Self { lo: x, hi: x }
    }

    /// Number of integers covered, `hi + 1 - lo`. Never zero.
    #[inline]
    pub fn width(&self) -> u64 {
        self.hi + 1 - self.lo
    }

    /// Smallest span enclosing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Span) -> Span {
        Span {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// True if `other` lies entirely within `self`.
    #[inline]
    pub fn encloses(&self, other: &Span) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }
}

/// Bounded subset sums of one stretch of the input.
///
/// Invariants maintained by the merge protocol:
/// - every value in `sums` is a sum of a non-empty subset of the stretch,
///   and is below the bound the result was computed for;
/// - `span` encloses every element of the stretch;
/// - `size` is the number of input elements in the stretch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSums {
    pub(crate) sums: BTreeSet<u64>,
    pub(crate) span: Span,
    pub(crate) size: usize,
}

impl SubsetSums {
    /// Assemble a result from its parts. The caller is responsible for the
    /// invariants listed on the type.
    pub fn new(sums: BTreeSet<u64>, span: Span, size: usize) -> Self {
        Self { sums, span, size }
    }

    /// The seed for one input element: `sums = {x}`, `span = [x, x]`, `size = 1`.
    pub fn singleton(x: u64) -> Self {
        Self {
            sums: BTreeSet::from([x]),
            span: Span::point(x),
            size: 1,
        }
    }

    /// Achievable sums.
    #[inline]
    pub fn sums(&self) -> &BTreeSet<u64> {
        &self.sums
    }

    /// Consume the result and keep only the sums.
    #[inline]
    pub fn into_sums(self) -> BTreeSet<u64> {
        self.sums
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Count of input elements folded into this result.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}
