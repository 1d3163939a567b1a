//! Bounded subset sums
//!
//! For a set `S` of distinct positive integers and a bound `u`, this crate
//! computes every value in `[1, u)` that is the sum of some non-empty subset
//! of `S`.
//!
//! ## Core idea
//! Three interchangeable solvers implement the same [`SubsetSummer`] contract:
//! 1. [`DynamicProgrammingSummer`]: the classic `u × n` boolean table.
//! 2. [`OptimizedDynamicProgrammingSummer`]: that table compacted to one
//!    column index per sum, `O(u)` space.
//! 3. [`FastIntervalSummer`]: splits the sorted input into geometrically
//!    sized intervals and merges partial results pairwise with FFT-based
//!    Minkowski sums, compressing coordinates whenever the cost model says
//!    the values sit in a high, narrow band.
//!
//! The fast solver runs in expected `O(√n · u · polylog(√n · u))` time,
//! against `O(u · n)` for the tables.
//!
//! ## Quick start
//! ```
//! use std::collections::BTreeSet;
//!
//! let s: BTreeSet<u64> = [1, 2, 3, 4, 5].into_iter().collect();
//! let sums = subset_sums::subset_sums(&s, 100).unwrap();
//! assert_eq!(sums, (1..=15).collect::<BTreeSet<u64>>());
//! ```
//!
//! ## Building blocks
//! - [`convolution`] : Minkowski sums via FFT with a length ceiling.
//! - [`compression`] : the `perfect_h` / `inverse_h` coordinate bijection.
//! - [`engine`]      : pairwise merge protocol and tree reduction.
//! - [`blocks`]      : partial results (`SubsetSums`, `Span`).
//!
//! ## Cargo features
//! - `parallel`: run independent merges and interval solves on rayon.
//! - `tracing`: emit spans and events through the `tracing` crate.
//! - `heavy`: enable long-running stress tests.

use std::collections::BTreeSet;

pub mod blocks;
pub mod builder;
pub mod compression;
pub mod convolution;
pub mod engine;
pub mod error;
pub mod solvers;
pub mod traits;
pub mod utils;
pub mod validate;

pub use crate::builder::FastIntervalSummerBuilder;
pub use crate::engine::MergeEngine;
pub use crate::error::{Error, Result};
pub use crate::solvers::{
    DynamicProgrammingSummer, FastIntervalSummer, OptimizedDynamicProgrammingSummer, SolverKind,
};
pub use crate::traits::SubsetSummer;

/// Every subset sum of `s` strictly below `u`, using [`FastIntervalSummer`].
pub fn subset_sums(s: &BTreeSet<u64>, u: u64) -> Result<BTreeSet<u64>> {
    FastIntervalSummer::default().subset_sums(s, u)
}
