//! Error types for subset-sum computations.

use thiserror::Error;

/// Error variants raised by the solvers and the merge machinery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller supplied an out-of-range bound or element, or an empty
    /// sequence where at least one item is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vector or table would be larger than the configured ceiling.
    #[error("capacity exceeded: required length {required}, limit {limit}")]
    CapacityExceeded {
        /// Length the operation would have needed.
        required: u64,
        /// Ceiling in force for this call.
        limit: u64,
    },

    /// A postcondition failed. This is a bug in the crate, never a user error.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl Error {
    /// Returns true when the caller can reasonably retry with a different
    /// solver or a larger ceiling (only capacity failures).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }
}

/// A specialized Result type for subset-sum operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn only_capacity_is_recoverable() {
        assert!(Error::CapacityExceeded {
            required: 10,
            limit: 4
        }
        .is_recoverable());
        assert!(!Error::InvalidArgument("u".into()).is_recoverable());
        assert!(!Error::InternalInvariantViolation("size".into()).is_recoverable());
    }

    #[test]
    fn display_mentions_lengths() {
        let err = Error::CapacityExceeded {
            required: 1 << 30,
            limit: 1 << 29,
        };
        let msg = err.to_string();
        assert!(msg.contains("1073741824"), "{msg}");
        assert!(msg.contains("536870912"), "{msg}");
    }
}
