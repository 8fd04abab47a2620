//! Core domain entities for ring placement.

use std::fmt;

/// Length in bytes of a canonical node identifier.
pub const ID_LENGTH: usize = 20;

/// 160-bit node identifier in the shared distance space.
///
/// Every recognized external address format either carries or derives a
/// 20-byte identity; decoding normalizes all of them into this single
/// value space. Identifiers are used only for distance computation and
/// ring ordering — callers exchange addresses and proxy identifiers,
/// never raw `NodeId` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub [u8; ID_LENGTH]);

impl NodeId {
    /// Create a NodeId from a raw 20-byte array.
    pub fn new(bytes: [u8; ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create a NodeId from a byte slice.
    ///
    /// Returns `None` when the slice is not exactly [`ID_LENGTH`] bytes.
    /// Callers decide whether a mismatch is a malformed input
    /// (`InvalidAddress`) or a broken internal precondition
    /// (`InvariantViolation`).
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let mut out = [0u8; ID_LENGTH];
        if bytes.len() != ID_LENGTH {
            return None;
        }
        out.copy_from_slice(bytes);
        Some(Self(out))
    }

    /// Get the underlying bytes for XOR distance calculation.
    pub fn as_bytes(&self) -> &[u8; ID_LENGTH] {
        &self.0
    }

    /// Zero-valued identifier, useful as a deterministic test origin.
    pub fn zero() -> Self {
        Self([0u8; ID_LENGTH])
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A ring member: the decoded identifier together with the original
/// address string that produced it.
///
/// The registry the ring is built over maps address → `Peer`; addresses
/// are unique, insertion order is irrelevant to the registry itself
/// (ordering lives in the ring's order sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    /// Canonical identifier decoded from `address`.
    pub id: NodeId,
    /// The external address string as originally registered.
    pub address: String,
}

impl Peer {
    /// Create a new peer entry.
    pub fn new(id: NodeId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
        }
    }
}
