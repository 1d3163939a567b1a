//! Interchangeable subset-sum algorithms.
//!
//! Each module implements [`SubsetSummer`](crate::traits::SubsetSummer)
//! with the same contract:
//! - [`dp`]            : full boolean table, `O(u·n)` time and space.
//! - [`optimized_dp`]  : the same table compacted to one index per row.
//! - [`fast_interval`] : geometric interval split plus FFT merges.

pub mod dp;
pub mod fast_interval;
pub mod optimized_dp;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::traits::SubsetSummer;

pub use dp::DynamicProgrammingSummer;
pub use fast_interval::FastIntervalSummer;
pub use optimized_dp::OptimizedDynamicProgrammingSummer;

/// Names the available solvers so callers can pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    DynamicProgramming,
    OptimizedDynamicProgramming,
    FastInterval,
}

impl SolverKind {
    /// Every solver, baseline first.
    pub const ALL: [SolverKind; 3] = [
        SolverKind::DynamicProgramming,
        SolverKind::OptimizedDynamicProgramming,
        SolverKind::FastInterval,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::DynamicProgramming => "dp",
            SolverKind::OptimizedDynamicProgramming => "optimized-dp",
            SolverKind::FastInterval => "fast",
        }
    }

    /// Run the named solver with its default configuration.
    pub fn run(self, s: &BTreeSet<u64>, u: u64) -> Result<BTreeSet<u64>> {
        match self {
            SolverKind::DynamicProgramming => DynamicProgrammingSummer.subset_sums(s, u),
            SolverKind::OptimizedDynamicProgramming => {
                OptimizedDynamicProgrammingSummer.subset_sums(s, u)
            }
            SolverKind::FastInterval => FastIntervalSummer::default().subset_sums(s, u),
        }
    }
}

/// `vec![value; len]` that reports allocation failure instead of aborting.
///
/// `limit` in the error is the largest length the address space could hold
/// for `T`; the allocator may still refuse anything smaller.
pub(crate) fn try_filled_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::CapacityExceeded {
            required: len as u64,
            limit: (isize::MAX as usize / std::mem::size_of::<T>().max(1)) as u64,
        })?;
    out.resize(len, value);
    Ok(out)
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown solver '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::SolverKind;

    #[test]
    fn names_round_trip() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.name().parse::<SolverKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!("naive".parse::<SolverKind>().is_err());
    }

    #[test]
    fn unaddressable_length_is_a_capacity_error() {
        let err = super::try_filled_vec(usize::MAX, 0u64).unwrap_err();
        assert!(err.is_recoverable(), "{err}");
        assert_eq!(super::try_filled_vec(3, 7u8).unwrap(), vec![7, 7, 7]);
    }

    #[test]
    fn every_kind_agrees_on_a_small_case() {
        let s = [2u64, 3].into_iter().collect();
        for kind in SolverKind::ALL {
            let sums = kind.run(&s, 42).unwrap();
            assert_eq!(sums.into_iter().collect::<Vec<_>>(), vec![2, 3, 5], "{kind}");
        }
    }
}
