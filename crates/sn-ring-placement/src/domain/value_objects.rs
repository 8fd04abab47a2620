//! Value objects for ring placement.

use crate::domain::entities::ID_LENGTH;

/// XOR distance between two node identifiers.
///
/// The byte-wise XOR of two identifiers, compared as a big-endian
/// unsigned 160-bit integer. The derived ordering on the inner array is
/// lexicographic, which for fixed-length big-endian bytes is exactly the
/// unsigned-integer ordering — no big-integer crate needed.
///
/// Properties relied on by the ring:
/// - symmetric: `d(a, b) == d(b, a)`
/// - zero iff the identifiers are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(pub [u8; ID_LENGTH]);

impl Distance {
    /// Create a Distance from raw XOR bytes.
    pub fn new(bytes: [u8; ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The zero distance (identical identifiers).
    pub fn zero() -> Self {
        Self([0u8; ID_LENGTH])
    }

    /// Maximum representable distance.
    pub fn max() -> Self {
        Self([0xFF; ID_LENGTH])
    }

    /// True when the two identifiers were equal.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}
