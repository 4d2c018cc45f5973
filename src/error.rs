//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when reading or writing a card sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A scalar position fell outside `[-len, len - 1]`.
    #[error("position {position} is out of range for a sequence of {len} cards")]
    IndexOutOfRange {
        /// The requested position.
        position: isize,
        /// The length of the sequence at the time of the request.
        len: usize,
    },
    /// The sequence does not support positional writes.
    #[error("this sequence does not support item assignment")]
    UnsupportedOperation,
}
