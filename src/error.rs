//! Error types for sort key operations.

use thiserror::Error;

/// Errors returned by [`SortKeys`](crate::SortKeys).
///
/// Every variant is a contract violation by the caller (or a defect caught by the
/// post-condition check). None of them are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortKeyError {
    /// The configured alphabet cannot be used as a digit set.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    /// A key contains a character outside the configured alphabet.
    #[error("character {character:?} in key {key:?} is not in the alphabet")]
    InvalidCharacter { character: char, key: String },

    /// A computed digit has no corresponding alphabet character.
    #[error("digit {0} has no alphabet character")]
    InvalidDigit(u8),

    /// Bounds or a key sequence are not in ascending order.
    #[error("keys not sorted: {less:?} must be less than {more:?}")]
    NotSorted { less: String, more: String },

    /// Both bounds are the same key.
    #[error("identical keys: {key:?}")]
    IdenticalKeys { key: String },

    /// The generated key is not strictly between its bounds.
    #[error("generated key {candidate:?} is not strictly between {less:?} and {more:?}")]
    OutOfRange {
        less: String,
        more: String,
        candidate: String,
    },
}
