//! # Ports Layer
//!
//! Driving-port trait for the placement subsystem: the contract the
//! transport and replication layers consume. Adapters (API gateway
//! views, test doubles) depend on this trait rather than on the concrete
//! service.

use crate::domain::{NodeId, PlacementError};

/// Driving port: ring navigation and identifier canonicalization as
/// consumed by transport/replication collaborators.
///
/// Every method is a pure query; implementations must be safe to call
/// concurrently from multiple request-handling tasks.
pub trait PlacementApi {
    /// Canonicalize any recognized external address into an identifier.
    fn decode(&self, address: &str) -> Result<NodeId, PlacementError>;

    /// Encode an identifier as a portable proxy identifier.
    fn encode_proxy(&self, id: &NodeId) -> String;

    /// The local node's address.
    fn local_address(&self) -> String;

    /// Snapshot of the current ascending-distance ordering.
    fn order(&self) -> Vec<String>;

    /// Members strictly between `from` and `to`, walking forward.
    fn forward_arc(&self, from: &str, to: &str) -> Result<Vec<String>, PlacementError>;

    /// Members strictly between `to` and `from`, the opposite arc.
    fn backward_arc(&self, from: &str, to: &str) -> Result<Vec<String>, PlacementError>;

    /// Up to `n` forward neighbors of `address`, nearest first.
    fn successors(&self, address: &str, n: usize) -> Result<Vec<String>, PlacementError>;

    /// Up to `n` backward neighbors of `address`, nearest first.
    fn predecessors(&self, address: &str, n: usize) -> Result<Vec<String>, PlacementError>;

    /// The `n` members closest to an arbitrary external target key.
    fn closest(&self, target: &str, n: usize) -> Result<Vec<String>, PlacementError>;
}
