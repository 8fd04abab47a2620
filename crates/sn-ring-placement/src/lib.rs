//! # Ring Placement Subsystem
//!
//! Membership and placement core for the supernode network: maps
//! heterogeneously-encoded external blockchain addresses into a flat
//! 20-byte identifier space, orders all known peers around that space by
//! XOR distance, and exposes ring-navigation primitives (successor /
//! predecessor walks, arc extraction, k-nearest lookup) that the
//! transport and replication layers use for routing and forwarding.
//!
//! ## Architecture
//!
//! The crate follows the workspace's hexagonal layout:
//! - **Domain Layer:** pure placement logic (address codec, XOR distance,
//!   the distance-ordered ring)
//! - **Ports Layer:** the `PlacementApi` driving port
//! - **Service Layer:** rebuild-and-swap ring ownership
//! - **Adapters Layer:** feature-gated integrations (`rpc` JSON views)
//!
//! ## Example
//!
//! ```rust
//! use sn_ring_placement::{decode_address, encode_proxy_id, Ring};
//!
//! // Account-style addresses: the 20-byte value is the identifier
//! let local = "0000000000000000000000000000000000000000";
//! let peers = [
//!     "0000000000000000000000000000000000000005",
//!     "0000000000000000000000000000000000000002",
//!     "0000000000000000000000000000000000000008",
//! ];
//!
//! let ring = Ring::build(local, peers).unwrap();
//! assert_eq!(ring.order()[0], peers[1]); // distance 2 sorts first
//!
//! // Any member's identifier has a portable checksummed proxy form
//! let id = decode_address(peers[0]).unwrap();
//! let proxy = encode_proxy_id(&id);
//! assert_eq!(decode_address(&proxy).unwrap(), id);
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// FEATURE-GATED MODULES
// =============================================================================

/// Adapters for external integrations.
/// Requires feature: `rpc`
#[cfg(feature = "rpc")]
pub mod adapters;

// =============================================================================
// CORE RE-EXPORTS
// =============================================================================

// Domain entities and values
pub use domain::{AddressKind, Distance, NodeId, Peer, PlacementError, Ring, ID_LENGTH};

// Domain services and the address codec
pub use domain::{classify, decode_address, encode_proxy_id, xor_distance, NETWORK_PREFIX};

// Port traits
pub use ports::PlacementApi;

// Service
pub use service::PlacementService;

// =============================================================================
// ADAPTER RE-EXPORTS (Feature-Gated)
// =============================================================================

#[cfg(feature = "rpc")]
pub use adapters::{ApiGatewayHandler, ApiQueryError, RpcMemberInfo, RpcRingInfo};
