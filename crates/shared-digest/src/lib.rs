//! # Digest Primitives
//!
//! One-shot hashing helpers shared by the address codec:
//!
//! - `sha256` / `sha256d` — single and double SHA-256, used for
//!   base58check checksums
//! - `hash160` — RIPEMD160(SHA256(x)), the 160-bit identity digest used to
//!   derive node identifiers from public keys

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 digest output (256-bit).
pub type Digest32 = [u8; 32];

/// HASH160 digest output (160-bit).
pub type Digest20 = [u8; 20];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Digest32 {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(data));
    out
}

/// Double SHA-256: `SHA256(SHA256(data))`.
///
/// This is the checksum digest for base58check encodings; the first four
/// bytes of the result are appended as the checksum.
pub fn sha256d(data: &[u8]) -> Digest32 {
    sha256(&sha256(data))
}

/// First four bytes of the double SHA-256, as used by base58check.
pub fn checksum4(data: &[u8]) -> [u8; 4] {
    let digest = sha256d(data);
    [digest[0], digest[1], digest[2], digest[3]]
}

/// HASH160: `RIPEMD160(SHA256(data))`.
///
/// Collapses a public key (or any payload) into the 160-bit identifier
/// space shared by every recognized address format.
pub fn hash160(data: &[u8]) -> Digest20 {
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(sha256(data)));
    out
}
