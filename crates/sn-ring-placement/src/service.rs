//! # Placement Service
//!
//! High-level service implementing the `PlacementApi` port.
//!
//! Owns the current [`Ring`] behind a rebuild-and-swap handle: queries
//! read an `Arc` snapshot, and a membership change constructs a complete
//! replacement ring before atomically swapping the pointer. Callers can
//! never observe a partially built ring, and concurrent readers keep the
//! snapshot they started with.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::domain::{decode_address, encode_proxy_id, NodeId, PlacementError, Ring};
use crate::ports::PlacementApi;

/// Placement service wrapping the immutable ring with swap-on-rebuild
/// ownership.
pub struct PlacementService {
    /// Current ring. Swapped wholesale, never mutated in place.
    ring: RwLock<Arc<Ring>>,
}

impl PlacementService {
    /// Build the initial ring and wrap it in a service handle.
    ///
    /// Fails with [`PlacementError::InvalidAddress`] when any address
    /// does not decode; no service is published in that case.
    pub fn new<I, S>(local_address: &str, peer_addresses: I) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ring = Ring::build(local_address, peer_addresses)?;
        info!(
            local = %ring.local_address(),
            members = ring.len(),
            "placement ring constructed"
        );
        Ok(Self {
            ring: RwLock::new(Arc::new(ring)),
        })
    }

    /// Snapshot handle to the current ring.
    ///
    /// The snapshot stays valid (and unchanged) even if the service
    /// rebuilds concurrently; queries on it need no lock.
    pub fn ring(&self) -> Arc<Ring> {
        Arc::clone(&self.ring.read())
    }

    /// Rebuild the ring for a changed membership and swap it in.
    ///
    /// The replacement is fully constructed before the swap; on failure
    /// the previous ring stays published untouched.
    pub fn rebuild<I, S>(&self, local_address: &str, peer_addresses: I) -> Result<(), PlacementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let replacement = Ring::build(local_address, peer_addresses)?;
        debug!(
            local = %replacement.local_address(),
            members = replacement.len(),
            "swapping rebuilt placement ring"
        );
        *self.ring.write() = Arc::new(replacement);
        Ok(())
    }
}

impl PlacementApi for PlacementService {
    fn decode(&self, address: &str) -> Result<NodeId, PlacementError> {
        decode_address(address)
    }

    fn encode_proxy(&self, id: &NodeId) -> String {
        encode_proxy_id(id)
    }

    fn local_address(&self) -> String {
        self.ring().local_address().to_string()
    }

    fn order(&self) -> Vec<String> {
        self.ring().order()
    }

    fn forward_arc(&self, from: &str, to: &str) -> Result<Vec<String>, PlacementError> {
        self.ring().forward_arc(from, to)
    }

    fn backward_arc(&self, from: &str, to: &str) -> Result<Vec<String>, PlacementError> {
        self.ring().backward_arc(from, to)
    }

    fn successors(&self, address: &str, n: usize) -> Result<Vec<String>, PlacementError> {
        self.ring().successors(address, n)
    }

    fn predecessors(&self, address: &str, n: usize) -> Result<Vec<String>, PlacementError> {
        self.ring().predecessors(address, n)
    }

    fn closest(&self, target: &str, n: usize) -> Result<Vec<String>, PlacementError> {
        self.ring().closest(target, n)
    }
}
