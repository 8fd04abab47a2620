//! # Distance-Ordered Ring
//!
//! The peer set ordered by ascending XOR distance from a fixed local
//! node, with wrap-aware navigation queries (successor/predecessor
//! walks, arc extraction, k-closest lookup).
//!
//! A ring is immutable once built: membership change means building a
//! replacement ring and swapping the handle (see the service layer),
//! never patching the order in place. Every query is a pure read, so one
//! ring instance is safe to share across request-handling threads.

use std::collections::HashMap;

use crate::domain::address::decode_address;
use crate::domain::entities::{NodeId, Peer};
use crate::domain::errors::PlacementError;
use crate::domain::services::{rank_by_distance, xor_distance};

/// Registry of known peers plus the precomputed ascending-distance
/// ordering relative to the local node.
#[derive(Debug, Clone)]
pub struct Ring {
    /// Identifier of the local node the ordering is anchored to.
    local_id: NodeId,
    /// The local node's address as given at construction.
    local_address: String,
    /// Address → peer. Address-unique; insertion order irrelevant.
    registry: HashMap<String, Peer>,
    /// Addresses sorted ascending by distance from `local_id`; ties keep
    /// registration order. A permutation of the registry's keys.
    order: Vec<String>,
}

impl Ring {
    /// Build a ring from the local address and the known peer set.
    ///
    /// Every address is decoded up front; any failure aborts construction
    /// with [`PlacementError::InvalidAddress`] — there is no partial
    /// ring. Duplicate peer addresses collapse to one entry keeping the
    /// first occurrence. A peer address equal to the local address is
    /// included like any other member (distance zero sorts it first).
    pub fn build<I, S>(local_address: &str, peer_addresses: I) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let local_id = decode_address(local_address)?;

        let mut registry = HashMap::new();
        let mut order = Vec::new();
        for addr in peer_addresses {
            let addr = addr.as_ref();
            if registry.contains_key(addr) {
                continue;
            }
            let id = decode_address(addr)?;
            registry.insert(addr.to_string(), Peer::new(id, addr));
            order.push(addr.to_string());
        }

        // Stable sort: exact distance ties keep registration order
        rank_by_distance(&mut order, &local_id, |a| registry[a].id);

        Ok(Self {
            local_id,
            local_address: local_address.to_string(),
            registry,
            order,
        })
    }

    /// The local node's address.
    pub fn local_address(&self) -> &str {
        &self.local_address
    }

    /// Number of ring members.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the ring has no members.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `address` is a ring member.
    pub fn contains(&self, address: &str) -> bool {
        self.registry.contains_key(address)
    }

    /// Snapshot copy of the ascending-distance ordering.
    pub fn order(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Members strictly between `from` and `to`, walking the order
    /// forward and wrapping past the end, excluding both endpoints.
    ///
    /// When the walk comes all the way around without meeting `to` (the
    /// `from == to` case), the ring holds a single distinct position and
    /// the arc is empty.
    pub fn forward_arc(&self, from: &str, to: &str) -> Result<Vec<String>, PlacementError> {
        let from_pos = self.position(from)?;
        let to_pos = self.position(to)?;

        let len = self.order.len();
        let mut arc = Vec::new();
        for step in 1..len {
            let i = (from_pos + step) % len;
            if i == to_pos {
                return Ok(arc);
            }
            arc.push(self.order[i].clone());
        }

        // Full wrap without meeting `to`: from == to, nothing in between
        Ok(Vec::new())
    }

    /// Members strictly between `to` and `from` on the opposite side of
    /// the ring. By definition `backward_arc(a, b) == forward_arc(b, a)`;
    /// the two arcs partition the ring minus the endpoints.
    pub fn backward_arc(&self, from: &str, to: &str) -> Result<Vec<String>, PlacementError> {
        self.forward_arc(to, from)
    }

    /// Up to `n` members after `address`, walking forward with
    /// wraparound, nearest first, never including `address` itself.
    ///
    /// Returns fewer than `n` when the ring has fewer than `n` other
    /// distinct members. `n == 0` means every other member.
    pub fn successors(&self, address: &str, n: usize) -> Result<Vec<String>, PlacementError> {
        self.walk(address, n, Direction::Forward)
    }

    /// Up to `n` members before `address`, walking backward with
    /// wraparound, nearest first. Counterpart of [`Ring::successors`].
    pub fn predecessors(&self, address: &str, n: usize) -> Result<Vec<String>, PlacementError> {
        self.walk(address, n, Direction::Backward)
    }

    /// The single ring member after `address`, or `None` when `address`
    /// is the only member.
    pub fn successor(&self, address: &str) -> Result<Option<String>, PlacementError> {
        Ok(self.successors(address, 1)?.into_iter().next())
    }

    /// The single ring member before `address`, or `None` when `address`
    /// is the only member.
    pub fn predecessor(&self, address: &str) -> Result<Option<String>, PlacementError> {
        Ok(self.predecessors(address, 1)?.into_iter().next())
    }

    /// The `n` members closest to `target` by XOR distance, ascending,
    /// ties broken by ring position. `n == 0` means all members.
    ///
    /// `target` may be any recognized external address form — it is
    /// canonicalized through the codec and need not be a ring member.
    /// This is the routing primitive mapping an arbitrary key onto the
    /// nodes responsible for it.
    pub fn closest(&self, target: &str, n: usize) -> Result<Vec<String>, PlacementError> {
        if self.order.is_empty() {
            return Err(PlacementError::EmptyRing);
        }
        let target_id = decode_address(target)?;

        let mut ranked = self.order.clone();
        for addr in &ranked {
            if !self.registry.contains_key(addr) {
                return Err(PlacementError::InvariantViolation(format!(
                    "ordered address {addr:?} missing from registry"
                )));
            }
        }
        // Stable sort over ring-position order: ties keep ring position
        ranked.sort_by_key(|addr| xor_distance(&self.registry[addr].id, &target_id));

        if n > 0 {
            ranked.truncate(n);
        }
        Ok(ranked)
    }

    /// The single member closest to `target`.
    pub fn closest_one(&self, target: &str) -> Result<String, PlacementError> {
        let mut found = self.closest(target, 1)?;
        found.pop().ok_or_else(|| {
            PlacementError::InvariantViolation("closest returned empty on non-empty ring".into())
        })
    }

    /// Position of a member in the ordering, or `UnknownNode`.
    fn position(&self, address: &str) -> Result<usize, PlacementError> {
        self.order
            .iter()
            .position(|a| a == address)
            .ok_or_else(|| PlacementError::UnknownNode(address.to_string()))
    }

    /// Shared wrap-aware neighbor walk. Modular index arithmetic: the
    /// step counter is bounded by ring length, so the walk can never
    /// revisit the starting position or loop.
    fn walk(
        &self,
        address: &str,
        n: usize,
        direction: Direction,
    ) -> Result<Vec<String>, PlacementError> {
        let pos = self.position(address)?;
        let len = self.order.len();
        let want = if n == 0 { len - 1 } else { n.min(len - 1) };

        let mut out = Vec::with_capacity(want);
        for step in 1..len {
            if out.len() == want {
                break;
            }
            let i = match direction {
                Direction::Forward => (pos + step) % len,
                Direction::Backward => (pos + len - step) % len,
            };
            out.push(self.order[i].clone());
        }
        Ok(out)
    }
}

/// Walk direction for neighbor queries.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}
