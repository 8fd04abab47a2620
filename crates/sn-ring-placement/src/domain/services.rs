//! Domain services - pure functions over identifiers and distances.
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).

use crate::domain::entities::{NodeId, ID_LENGTH};
use crate::domain::value_objects::Distance;

/// Calculate the XOR distance between two node identifiers.
///
/// Byte-wise XOR interpreted as a big-endian unsigned integer. Symmetric,
/// and zero exactly when the identifiers are equal. Equal input lengths
/// are guaranteed by the `NodeId` type, so there is no runtime failure
/// mode here.
pub fn xor_distance(a: &NodeId, b: &NodeId) -> Distance {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut out = [0u8; ID_LENGTH];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = a_bytes[i] ^ b_bytes[i];
    }
    Distance::new(out)
}

/// Order addresses ascending by distance from `origin`, stably.
///
/// `id_of` maps an address to its decoded identifier. The sort is stable,
/// so entries at exactly equal distance keep their relative input order —
/// the tie-break rule the ring's ordering invariant depends on.
pub fn rank_by_distance<F>(addresses: &mut [String], origin: &NodeId, id_of: F)
where
    F: Fn(&str) -> NodeId,
{
    addresses.sort_by_key(|addr| xor_distance(origin, &id_of(addr.as_str())));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node_id(last_byte: u8) -> NodeId {
        let mut bytes = [0u8; ID_LENGTH];
        bytes[ID_LENGTH - 1] = last_byte;
        NodeId::new(bytes)
    }

    #[test]
    fn test_xor_distance_is_symmetric() {
        let a = make_node_id(0b1010_0000);
        let b = make_node_id(0b0101_0000);

        assert_eq!(xor_distance(&a, &b), xor_distance(&b, &a));
    }

    #[test]
    fn test_xor_distance_to_self_is_zero() {
        let a = make_node_id(0xAB);
        assert!(xor_distance(&a, &a).is_zero());
    }

    #[test]
    fn test_xor_distance_nonzero_for_distinct_ids() {
        let a = make_node_id(1);
        let b = make_node_id(2);

        let dist = xor_distance(&a, &b);
        assert!(!dist.is_zero());
        assert!(dist > Distance::zero());
    }

    #[test]
    fn test_xor_distance_orders_by_magnitude() {
        let origin = NodeId::zero();
        let near = make_node_id(2);
        let far = make_node_id(8);

        assert!(xor_distance(&origin, &near) < xor_distance(&origin, &far));
    }

    #[test]
    fn test_rank_by_distance_ascending() {
        let origin = NodeId::zero();
        // addresses are last-byte values in disguise
        let mut addrs = vec!["5".to_string(), "2".to_string(), "8".to_string()];

        rank_by_distance(&mut addrs, &origin, |a| make_node_id(a.parse().unwrap()));

        assert_eq!(addrs, vec!["2", "5", "8"]);
    }

    #[test]
    fn test_rank_by_distance_stable_on_ties() {
        let origin = NodeId::zero();
        // "7a" and "7b" decode to the same identifier: an exact tie
        let mut addrs = vec!["7a".to_string(), "3".to_string(), "7b".to_string()];

        rank_by_distance(&mut addrs, &origin, |a| {
            make_node_id(a.trim_end_matches(char::is_alphabetic).parse().unwrap())
        });

        assert_eq!(
            addrs,
            vec!["3", "7a", "7b"],
            "tied entries keep original relative order"
        );
    }
}
