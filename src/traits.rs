//! Core trait definition shared by every subset-sum algorithm.
//!
//! All solvers in [`crate::solvers`] answer the same question:
//! given a set `S` of distinct positive integers and a bound `u`, which
//! values in `[1, u)` are sums of some non-empty subset of `S`?
//!
//! They differ only in how they get there:
//! - table-filling dynamic programming (simple, `O(u·n)`),
//! - the same table compacted to one index per row (`O(u)` space),
//! - interval splitting with FFT-based Minkowski merges
//!   (`O(√n · u · polylog)` expected time).
//!
//! Implementations are selected explicitly by the caller; see
//! [`crate::solvers::SolverKind`] for name-based selection.

use std::collections::BTreeSet;

use crate::error::Result;

/// A subset-sum algorithm.
///
/// Contract:
/// - Preconditions: `u > 0` and every element of `s` is in `[1, u-1]`;
///   violations are reported as [`crate::Error::InvalidArgument`].
/// - Postconditions: the returned set holds exactly the values `v` with
///   `1 <= v < u` such that some non-empty subset of `s` sums to `v`.
///
/// Implementations are pure: no state survives a call, and repeated calls
/// with the same arguments produce the same set (or the same error).
pub trait SubsetSummer {
    /// Compute every subset sum of `s` strictly below `u`.
    fn subset_sums(&self, s: &BTreeSet<u64>, u: u64) -> Result<BTreeSet<u64>>;
}
