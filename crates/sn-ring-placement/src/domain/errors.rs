//! Domain errors for ring placement.

use thiserror::Error;

/// Errors surfaced by the address codec and ring queries.
///
/// Every failure is returned to the caller as an explicit `Result`; the
/// core never coerces a bad address to a default identifier, never
/// substitutes a nearest match for an unknown node, and never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Input string does not match any recognized encoding, or its
    /// embedded checksum failed verification.
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// The offending address string
        address: String,
        /// What made it unrecognizable
        reason: String,
    },

    /// A supplied address used as a ring position is not a member of the
    /// current ring.
    #[error("Node {0:?} is not in the ring")]
    UnknownNode(String),

    /// A closest/neighbor query was issued against a ring with no peers.
    #[error("Ring has no members")]
    EmptyRing,

    /// Internal precondition failure. A programming error, not a
    /// runtime-recoverable condition.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl PlacementError {
    /// Shorthand for an [`PlacementError::InvalidAddress`] with context.
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}
