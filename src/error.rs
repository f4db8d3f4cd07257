//! Error types for table construction and queries.

use std::io;
use thiserror::Error;

/// Result type alias for fallible prime table operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by prime table construction and queries
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A generation request for more primes than fit into the `i32` range.
    #[error("cannot generate {requested} primes, only {max} primes fit below i32::MAX")]
    CountOutOfRange {
        /// The requested number of primes
        requested: usize,
        /// The number of primes representable as `i32`
        max: usize,
    },

    /// Indexed access past the end of the table.
    #[error("index {index} is out of range for a table of {len} primes")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The number of primes held by the table
        len: usize,
    },

    /// The bulk-load source failed before yielding the requested number of
    /// integers. A short stream surfaces as `UnexpectedEof`. This indicates a
    /// broken source or a setup error, not a recoverable condition.
    #[error("failed to load prime table: {0}")]
    Initialization(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_out_of_range_display() {
        let err = Error::CountOutOfRange {
            requested: 200_000_000,
            max: 105_097_565,
        };
        assert!(err.to_string().contains("200000000"));
        assert!(err.to_string().contains("105097565"));
    }

    #[test]
    fn initialization_preserves_cause() {
        use std::error::Error as _;

        let cause = io::Error::new(io::ErrorKind::UnexpectedEof, "stream ended");
        let err = Error::Initialization(cause);
        assert!(err.to_string().contains("failed to load prime table"));
        let source = err.source().expect("cause should be preserved");
        assert!(source.to_string().contains("stream ended"));
    }
}
