//! Row-compacted dynamic program.
//!
//! Stores, for each sum `i`, the first column `j` at which `cell(i, j)`
//! of the baseline table becomes true. Row monotonicity makes that single
//! index equivalent to the whole row.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::solvers::try_filled_vec;
use crate::traits::SubsetSummer;
use crate::validate::{validate_input, validate_output};

const UNREACHABLE: usize = usize::MAX;

/// Compacted solver. `O(u·n)` time, `O(u)` space.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizedDynamicProgrammingSummer;

impl SubsetSummer for OptimizedDynamicProgrammingSummer {
    fn subset_sums(&self, s: &BTreeSet<u64>, u: u64) -> Result<BTreeSet<u64>> {
        validate_input(s, u)?;
        if s.is_empty() {
            return Ok(BTreeSet::new());
        }

        let values: Vec<usize> = s.iter().map(|&x| x as usize).collect();
        let rows = usize::try_from(u).map_err(|_| Error::CapacityExceeded {
            required: u,
            limit: usize::MAX as u64,
        })?;

        let mut first_column = try_filled_vec(rows, UNREACHABLE)?;
        first_column[0] = 0;
        first_column[values[0]] = 0;

        for i in 1..rows {
            if first_column[i] != UNREACHABLE {
                continue;
            }
            for (j, &value) in values.iter().enumerate().skip(1) {
                // Sorted ascending: no later element fits either.
                if value > i {
                    break;
                }
                if first_column[i - value] < j {
                    first_column[i] = j;
                    break;
                }
            }
        }

        let sums = first_column
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &col)| col != UNREACHABLE)
            .map(|(i, _)| i as u64)
            .collect();

        validate_output(&sums, u)?;
        Ok(sums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::dp::DynamicProgrammingSummer;

    fn set(values: &[u64]) -> BTreeSet<u64> {
        values.iter().copied().collect()
    }

    #[test]
    fn trivial_cases() {
        let dp = OptimizedDynamicProgrammingSummer;
        assert_eq!(dp.subset_sums(&set(&[]), 42).unwrap(), set(&[]));
        assert_eq!(dp.subset_sums(&set(&[7]), 42).unwrap(), set(&[7]));
        assert_eq!(dp.subset_sums(&set(&[2, 3]), 42).unwrap(), set(&[2, 3, 5]));
        assert_eq!(dp.subset_sums(&set(&[2, 3]), 5).unwrap(), set(&[2, 3]));
    }

    #[test]
    fn matches_full_table() {
        let inputs: [&[u64]; 4] = [
            &[1, 2, 3, 4, 5],
            &[4, 10, 11],
            &[7, 13, 19, 23, 29, 31],
            &[50, 51, 52, 53, 54, 55],
        ];
        for values in inputs {
            for u in [1, 10, 60, 120, 400] {
                let s: BTreeSet<u64> = values.iter().copied().filter(|&x| x < u).collect();
                assert_eq!(
                    OptimizedDynamicProgrammingSummer.subset_sums(&s, u).unwrap(),
                    DynamicProgrammingSummer.subset_sums(&s, u).unwrap(),
                    "values={values:?} u={u}"
                );
            }
        }
    }

    #[test]
    fn huge_bound_reports_capacity_instead_of_aborting() {
        let err = OptimizedDynamicProgrammingSummer
            .subset_sums(&set(&[1]), 1 << 62)
            .unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { .. }), "{err}");
    }
}
