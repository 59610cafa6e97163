//! Error types for spansort operations.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for spansort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for spansort operations
#[derive(Error, Debug)]
pub enum SortError {
    /// Sort or selection range reaches outside the buffer
    #[error("range {start}..{end} out of bounds for buffer of length {len}")]
    RangeOutOfBounds {
        /// Start of the requested range
        start: usize,
        /// End of the requested range (exclusive)
        end: usize,
        /// Length of the buffer
        len: usize,
    },

    /// Order-statistic index outside the queried range
    #[error("order statistic {index} outside queried range {start}..{end}")]
    IndexOutOfRange {
        /// The requested sorted position
        index: usize,
        /// Start of the queried range
        start: usize,
        /// End of the queried range (exclusive)
        end: usize,
    },

    /// Counting-sort key observed outside the declared bounds
    #[error("key {key} outside declared bounds {min}..={max}")]
    KeyOutOfBounds {
        /// The offending key, widened for display
        key: i128,
        /// Declared minimum key
        min: i128,
        /// Declared maximum key
        max: i128,
    },

    /// Counting-sort bounds are inverted or span more bins than addressable memory
    #[error("invalid key bounds {min}..={max}")]
    InvalidKeyBounds {
        /// Declared minimum key
        min: i128,
        /// Declared maximum key
        max: i128,
    },

    /// Worker pool failed to terminate within the bounded wait; fatal, not retryable
    #[error("worker pool failed to terminate within {wait:?}")]
    PoolTimeout {
        /// How long the invoking thread waited
        wait: Duration,
    },
}
