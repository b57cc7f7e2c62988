//! # Fingerprints
//!
//! Keccak-256 over packed payloads and code bodies.

use crate::domain::Hash;
use sha3::{Digest, Keccak256};

/// Keccak-256 of arbitrary bytes.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    Hash::new(Keccak256::digest(data).into())
}

/// Content fingerprint of an encoded payload. This, not the payload, is what
/// the sequencer persists.
#[must_use]
pub fn fingerprint(payload: &[u8]) -> Hash {
    keccak256(payload)
}
