use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::merkle_sum_tree::NodeHash;

/// Commitment hash of a leaf: `SHA256(id || value || nonce)`.
///
/// The id is hashed as UTF-8 bytes, the value as its decimal rendering and
/// the nonce as raw bytes, concatenated in that order with no delimiters.
/// The layout is the wire format; changing it orphans every proof issued so
/// far.
pub fn leaf_hash(id: &str, value: u64, nonce: &[u8; 32]) -> NodeHash {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    hasher.update(value.to_string().as_bytes());
    hasher.update(nonce);
    hasher.finalize().into()
}

/// Commitment hash of an internal node: `SHA256(value || left || right)`,
/// the value as its decimal rendering and both child hashes as raw bytes.
pub fn node_hash(value: u64, left: &NodeHash, right: &NodeHash) -> NodeHash {
    let mut hasher = Sha256::new();
    hasher.update(value.to_string().as_bytes());
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Mint a fresh 32-byte blinding nonce from the operating system CSPRNG.
///
/// Only used when building leaves from a snapshot. Reconstruction replays
/// the nonce disclosed in the proof instead and must never come through
/// here.
pub fn random_nonce() -> [u8; 32] {
    let mut nonce = [0u8; 32];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
