//! # Placement Integration Flows
//!
//! End-to-end checks that the address codec, the distance-ordered ring,
//! and the service-level rebuild-and-swap handle work together:
//!
//! 1. **Mixed-format membership**: one ring built from legacy, bech32,
//!    public-key, and account-style addresses
//! 2. **Proxy round trips**: proxy identifiers re-enter the codec as
//!    lookup keys
//! 3. **Gateway views**: `rpc` adapter JSON over a live service

#[cfg(test)]
mod tests {
    use shared_digest::{checksum4, hash160};
    use sn_ring_placement::{
        decode_address, encode_proxy_id, xor_distance, ApiGatewayHandler, PlacementApi,
        PlacementError, PlacementService, Ring, NETWORK_PREFIX,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// One valid address per recognized format (precomputed fixtures).
    const LEGACY: &str = "F5vSYmrTEn8HLcZZ7yVhvAfu82fp86Vvt6";
    const BECH32: &str = "bc1qxqcnyve5x5mrwwpe8ganc0f78aqyzsjrrycjt9";
    const PUBKEY: &str = "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352";
    const ACCOUNT: &str = "0x00112233445566778899aabbccddeeff00112233";

    /// Account-style address with a chosen last identifier byte.
    fn hex_addr(last_byte: u8) -> String {
        let mut bytes = [0u8; 20];
        bytes[19] = last_byte;
        hex::encode(bytes)
    }

    // =============================================================================
    // Flow 1: Mixed-format membership
    // =============================================================================

    #[test]
    fn test_ring_over_all_address_formats() {
        let ring = Ring::build(&hex_addr(0), [LEGACY, BECH32, PUBKEY, ACCOUNT]).unwrap();
        assert_eq!(ring.len(), 4);

        // Order is a permutation of the membership, ascending by distance
        let order = ring.order();
        let local_id = decode_address(&hex_addr(0)).unwrap();
        let distances: Vec<_> = order
            .iter()
            .map(|a| xor_distance(&local_id, &decode_address(a).unwrap()))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));

        let mut sorted_order = order.clone();
        sorted_order.sort();
        let mut members = vec![
            LEGACY.to_string(),
            BECH32.to_string(),
            PUBKEY.to_string(),
            ACCOUNT.to_string(),
        ];
        members.sort();
        assert_eq!(sorted_order, members);
    }

    #[test]
    fn test_arcs_partition_mixed_ring() {
        let ring = Ring::build(&hex_addr(0), [LEGACY, BECH32, PUBKEY, ACCOUNT]).unwrap();
        let order = ring.order();

        for a in &order {
            for b in &order {
                let forward = ring.forward_arc(a, b).unwrap();
                let backward = ring.backward_arc(a, b).unwrap();

                let mut combined: Vec<&String> =
                    forward.iter().chain(backward.iter()).collect();
                combined.sort();
                combined.dedup();

                let expected = if a == b { 0 } else { order.len() - 2 };
                assert_eq!(combined.len(), expected, "arc partition for ({a}, {b})");
                assert_eq!(forward.len() + backward.len(), expected);
            }
        }
    }

    #[test]
    fn test_every_member_is_its_own_closest() {
        let ring = Ring::build(&hex_addr(0), [LEGACY, BECH32, PUBKEY, ACCOUNT]).unwrap();
        for member in ring.order() {
            assert_eq!(ring.closest_one(&member).unwrap(), member);
        }
    }

    // =============================================================================
    // Flow 2: Proxy identifiers as lookup keys
    // =============================================================================

    #[test]
    fn test_proxy_id_reenters_codec_and_routing() {
        let ring = Ring::build(&hex_addr(0), [LEGACY, BECH32, PUBKEY, ACCOUNT]).unwrap();

        for member in ring.order() {
            let id = decode_address(&member).unwrap();
            let proxy = encode_proxy_id(&id);

            // The proxy form is a checksummed legacy-style string whose
            // checksum shared-digest can reproduce
            let raw = bs58::decode(&proxy).into_vec().unwrap();
            assert_eq!(raw[0], NETWORK_PREFIX);
            assert_eq!(
                raw[raw.len() - 4..],
                checksum4(&raw[..raw.len() - 4])[..]
            );

            // Using the proxy as a lookup key routes back to the member
            assert_eq!(decode_address(&proxy).unwrap(), id);
            assert_eq!(ring.closest_one(&proxy).unwrap(), member);
        }
    }

    #[test]
    fn test_pubkey_identifier_matches_hash160() {
        let id = decode_address(PUBKEY).unwrap();
        let raw = hex::decode(PUBKEY).unwrap();
        assert_eq!(id.as_bytes(), &hash160(&raw));
    }

    // =============================================================================
    // Flow 3: Service and gateway views
    // =============================================================================

    #[test]
    fn test_service_end_to_end_contrived_distances() {
        // local at 0; peers at distances 5, 2, 8
        let (n1, n2, n3) = (hex_addr(5), hex_addr(2), hex_addr(8));
        let service = PlacementService::new(&hex_addr(0), [&n1, &n2, &n3]).unwrap();

        assert_eq!(service.order(), vec![n2.clone(), n1.clone(), n3.clone()]);
        assert_eq!(service.successors(&n2, 1).unwrap(), vec![n1.clone()]);
        assert_eq!(service.predecessors(&n1, 1).unwrap(), vec![n2.clone()]);
        assert_eq!(service.forward_arc(&n2, &n3).unwrap(), vec![n1.clone()]);
        assert_eq!(service.backward_arc(&n2, &n3).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_rebuild_changes_published_ordering() {
        let service = PlacementService::new(&hex_addr(0), [hex_addr(5)]).unwrap();
        let before = service.ring();

        service
            .rebuild(&hex_addr(0), [hex_addr(5), hex_addr(2)])
            .unwrap();

        assert_eq!(before.len(), 1, "old snapshot unchanged");
        assert_eq!(service.order(), vec![hex_addr(2), hex_addr(5)]);
    }

    #[test]
    fn test_gateway_view_over_mixed_ring() {
        let service = PlacementService::new(&hex_addr(0), [LEGACY, ACCOUNT]).unwrap();
        let handler = ApiGatewayHandler::new(service);

        let info = handler.get_ring_info().unwrap();
        assert_eq!(info.size, 2);
        for member in &info.order {
            // every advertised proxy id decodes back to the member's id
            assert_eq!(
                decode_address(&member.proxy_id).unwrap(),
                decode_address(&member.address).unwrap()
            );
        }

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("localAddress"));
    }

    #[test]
    fn test_unknown_and_empty_errors_surface() {
        let service = PlacementService::new(&hex_addr(0), [hex_addr(5)]).unwrap();
        assert!(matches!(
            service.successors(&hex_addr(9), 1),
            Err(PlacementError::UnknownNode(_))
        ));

        let empty = Ring::build(&hex_addr(0), Vec::<String>::new()).unwrap();
        assert_eq!(empty.closest(&hex_addr(1), 1), Err(PlacementError::EmptyRing));
    }
}
