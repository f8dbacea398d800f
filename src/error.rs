// Error types for the pricing and weighting core.
//
// Every failure here is local and synchronous: the checks run before
// anything is persisted, so there is nothing to unwind. Callers surface
// these to the user and do not retry.

use thiserror::Error;

use crate::reactions::amount::Wei;
use crate::reactions::ReactionKind;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unrecognized edition type, or a non-positive supply for a
    /// limited/allowlist edition.
    #[error("Invalid edition: {0}")]
    InvalidEdition(String),

    /// Reaction kind not present in the price table.
    #[error("Unknown reaction kind: {0}")]
    UnknownReactionKind(String),

    /// Offered payment is below the minimum for the reaction kind.
    #[error("Insufficient payment for {kind} reaction: required {required} wei, offered {offered} wei")]
    InsufficientPayment {
        kind: ReactionKind,
        required: Wei,
        offered: Wei,
    },

    /// Amount string is not a base-10 unsigned integer.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
