//! Baseline table-filling dynamic program.
//!
//! With `S` sorted ascending as `S[0..n)`, cell `(i, j)` of a `u × n`
//! boolean table answers "does some subset of `{S[0], …, S[j]}` sum to `i`?".
//!
//! - Row 0 is all true (the empty subset).
//! - Column 0 is true only at row `S[0]`.
//! - `cell(i, j) = cell(i, j-1) || cell(i - S[j], j-1)` when `i >= S[j]`.
//!
//! Rows are monotone: once a cell is true, every cell to its right is too,
//! so the remainder of a row is filled as soon as one true cell is found.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::solvers::try_filled_vec;
use crate::traits::SubsetSummer;
use crate::validate::{validate_input, validate_output};

/// Full-table solver. `O(u·n)` time and space.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgrammingSummer;

impl SubsetSummer for DynamicProgrammingSummer {
    fn subset_sums(&self, s: &BTreeSet<u64>, u: u64) -> Result<BTreeSet<u64>> {
        validate_input(s, u)?;
        if s.is_empty() {
            return Ok(BTreeSet::new());
        }

        let values: Vec<usize> = s.iter().map(|&x| x as usize).collect();
        let n = values.len();
        let rows = usize::try_from(u).map_err(|_| Error::CapacityExceeded {
            required: u,
            limit: usize::MAX as u64,
        })?;
        let cells = rows.checked_mul(n).ok_or(Error::CapacityExceeded {
            required: u64::MAX,
            limit: usize::MAX as u64,
        })?;

        #[cfg(feature = "tracing")]
        tracing::trace!(rows, columns = n, "dp table");

        // Row-major: row i occupies table[i*n .. (i+1)*n].
        let mut table = try_filled_vec(cells, false)?;
        table[..n].fill(true);
        table[values[0] * n] = true;

        for i in 1..rows {
            let row = i * n;
            for j in 1..n {
                let reachable = table[row + j - 1]
                    || (i >= values[j] && table[(i - values[j]) * n + j - 1]);
                if reachable {
                    table[row + j..row + n].fill(true);
                    break;
                }
            }
        }

        let sums = (1..rows)
            .filter(|&i| table[i * n + n - 1])
            .map(|i| i as u64)
            .collect();

        validate_output(&sums, u)?;
        Ok(sums)
    }
}
