//! # Address Codec
//!
//! Canonicalizes heterogeneously-encoded external addresses into the
//! 20-byte identifier space, and encodes identifiers back into the
//! portable checksummed proxy form.
//!
//! Format inference is a closed enumeration keyed on string length and
//! prefix ([`AddressKind`]) with one decode routine per kind, so adding a
//! new address format is a reviewable enumeration change rather than
//! duck-typed sniffing.

use crate::domain::entities::{NodeId, ID_LENGTH};
use crate::domain::errors::PlacementError;
use shared_digest::{checksum4, hash160};

/// One-byte version prefix applied to proxy identifiers.
pub const NETWORK_PREFIX: u8 = 0x23;

/// Length of the base58check checksum suffix.
const CHECKSUM_LENGTH: usize = 4;

/// The closed set of recognized external address encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// 34 chars: base58check with a leading version byte.
    Legacy,
    /// 42 or 62 chars: bech32 5-bit-group encoding with a witness-version
    /// prefix group. The 62-char variant carries a 256-bit payload that
    /// needs a second regrouping pass to reach identifier length.
    BitPacked,
    /// 66 chars: hex-encoded compressed public key; the identifier is its
    /// HASH160.
    PublicKey,
    /// 40 chars of bare hex, or 42 chars with a `0x` marker: the 20-byte
    /// value is the identifier verbatim.
    Account,
}

/// Infer the encoding of an address from its length and prefix.
///
/// The `0x` marker is checked before the generic length-42 rule so that
/// account-style addresses never reach the bech32 decoder.
pub fn classify(address: &str) -> Option<AddressKind> {
    match address.len() {
        34 => Some(AddressKind::Legacy),
        42 if address.starts_with("0x") => Some(AddressKind::Account),
        42 | 62 => Some(AddressKind::BitPacked),
        66 => Some(AddressKind::PublicKey),
        40 if !address.starts_with("0x") => Some(AddressKind::Account),
        _ => None,
    }
}

/// Decode an external address of any recognized format into a canonical
/// node identifier.
///
/// Fails with [`PlacementError::InvalidAddress`] when the format cannot
/// be determined, the embedded checksum does not verify, or the decoded
/// payload is not exactly 20 bytes. A bad address is never coerced to a
/// partially-decoded identifier.
pub fn decode_address(address: &str) -> Result<NodeId, PlacementError> {
    let kind = classify(address).ok_or_else(|| {
        PlacementError::invalid_address(address, "unrecognized length or prefix")
    })?;

    match kind {
        AddressKind::Legacy => decode_legacy(address),
        AddressKind::BitPacked => decode_bit_packed(address),
        AddressKind::PublicKey => decode_public_key(address),
        AddressKind::Account => decode_account(address),
    }
}

/// Encode an identifier as a proxy identifier: the portable,
/// checksummed base58 form used to name nodes and lookup keys across
/// the network.
///
/// Deterministic and total: `NETWORK_PREFIX ‖ id ‖ sha256d(prefix ‖ id)[..4]`,
/// base58-encoded. The result is itself a valid [`AddressKind::Legacy`]
/// address, so proxy identifiers round-trip through [`decode_address`].
pub fn encode_proxy_id(id: &NodeId) -> String {
    let mut payload = Vec::with_capacity(1 + ID_LENGTH + CHECKSUM_LENGTH);
    payload.push(NETWORK_PREFIX);
    payload.extend_from_slice(id.as_bytes());
    let check = checksum4(&payload);
    payload.extend_from_slice(&check);
    bs58::encode(payload).into_string()
}

/// Base58check: verify the 4-byte double-SHA-256 checksum, drop the
/// version byte, take the remaining 20 bytes.
fn decode_legacy(address: &str) -> Result<NodeId, PlacementError> {
    let raw = bs58::decode(address)
        .into_vec()
        .map_err(|e| PlacementError::invalid_address(address, e.to_string()))?;

    if raw.len() <= CHECKSUM_LENGTH + 1 {
        return Err(PlacementError::invalid_address(address, "payload too short"));
    }

    let (payload, checksum) = raw.split_at(raw.len() - CHECKSUM_LENGTH);
    if checksum4(payload).as_slice() != checksum {
        return Err(PlacementError::invalid_address(address, "checksum mismatch"));
    }

    // payload[0] is the version marker; any value is accepted
    NodeId::from_slice(&payload[1..]).ok_or_else(|| {
        PlacementError::invalid_address(
            address,
            format!("identifier is {} bytes, expected {}", payload.len() - 1, ID_LENGTH),
        )
    })
}

/// Bech32: drop the witness-version group, regroup the 5-bit groups into
/// bytes; the double-length variant regroups once more to reach 160 bits.
fn decode_bit_packed(address: &str) -> Result<NodeId, PlacementError> {
    let (_hrp, data, _variant) = bech32::decode(address)
        .map_err(|e| PlacementError::invalid_address(address, e.to_string()))?;

    if data.is_empty() {
        return Err(PlacementError::invalid_address(address, "empty data part"));
    }

    let groups: Vec<u8> = data[1..].iter().map(|g| g.to_u8()).collect();
    let mut bytes = regroup_bits(&groups, 5, 8);
    if address.len() == 62 {
        bytes = regroup_bits(&bytes, 5, 8);
    }

    NodeId::from_slice(&bytes).ok_or_else(|| {
        PlacementError::invalid_address(
            address,
            format!("identifier is {} bytes, expected {}", bytes.len(), ID_LENGTH),
        )
    })
}

/// Compressed public key hex: identifier = HASH160 of the raw key bytes.
fn decode_public_key(address: &str) -> Result<NodeId, PlacementError> {
    let raw = hex::decode(address)
        .map_err(|e| PlacementError::invalid_address(address, e.to_string()))?;
    Ok(NodeId::new(hash160(&raw)))
}

/// Account-style hex: the 20-byte value is the identifier verbatim.
fn decode_account(address: &str) -> Result<NodeId, PlacementError> {
    let digits = address.strip_prefix("0x").unwrap_or(address);
    let raw = hex::decode(digits)
        .map_err(|e| PlacementError::invalid_address(address, e.to_string()))?;
    NodeId::from_slice(&raw).ok_or_else(|| {
        PlacementError::invalid_address(
            address,
            format!("identifier is {} bytes, expected {}", raw.len(), ID_LENGTH),
        )
    })
}

/// Repack a sequence of `from`-bit groups into `to`-bit groups.
///
/// Permissive by contract: input values are not range-checked and
/// partial trailing bits are dropped, matching the wire behavior the
/// double-length bit-packed variant depends on (its second pass feeds
/// full bytes back through the 5-bit regrouping).
fn regroup_bits(data: &[u8], from: u32, to: u32) -> Vec<u8> {
    let max = (1u32 << to) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize);

    for &value in data {
        acc = acc.wrapping_shl(from) | value as u32;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max) as u8);
        }
    }

    out
}
