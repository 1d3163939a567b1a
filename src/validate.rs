//! Pre- and postcondition checks shared by every solver.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Check that `u` is positive and every element of `s` lies in `[1, u-1]`.
pub fn validate_input(s: &BTreeSet<u64>, u: u64) -> Result<()> {
    if u == 0 {
        return Err(Error::InvalidArgument("u must be positive, was 0".into()));
    }
    // Sorted, so only the extremes need checking.
    match (s.first(), s.last()) {
        (Some(&lo), _) if lo == 0 => Err(Error::InvalidArgument(format!(
            "all elements of S must be in [1, {}], found 0",
            u - 1
        ))),
        (_, Some(&hi)) if hi >= u => Err(Error::InvalidArgument(format!(
            "all elements of S must be in [1, {}], found {hi}",
            u - 1
        ))),
        _ => Ok(()),
    }
}

/// Check that every produced sum lies in `[1, u-1]`.
///
/// A failure here means a solver is broken; callers should treat it as fatal.
pub fn validate_output(sums: &BTreeSet<u64>, u: u64) -> Result<()> {
    match (sums.first(), sums.last()) {
        (Some(&lo), _) if lo == 0 => Err(Error::InternalInvariantViolation(
            "output contains 0".into(),
        )),
        (_, Some(&hi)) if hi >= u => Err(Error::InternalInvariantViolation(format!(
            "output value {hi} is not below u = {u}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u64]) -> BTreeSet<u64> {
        values.iter().copied().collect()
    }

    #[test]
    fn rejects_zero_bound() {
        assert!(matches!(
            validate_input(&set(&[]), 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_elements_outside_range() {
        assert!(validate_input(&set(&[0, 3]), 10).is_err());
        assert!(validate_input(&set(&[3, 10]), 10).is_err());
        assert!(validate_input(&set(&[1, 9]), 10).is_ok());
        assert!(validate_input(&set(&[]), 1).is_ok());
    }

    #[test]
    fn output_check_flags_invariant_violation() {
        assert!(validate_output(&set(&[1, 2, 9]), 10).is_ok());
        assert!(matches!(
            validate_output(&set(&[0, 2]), 10),
            Err(Error::InternalInvariantViolation(_))
        ));
        assert!(matches!(
            validate_output(&set(&[2, 10]), 10),
            Err(Error::InternalInvariantViolation(_))
        ));
    }
}
