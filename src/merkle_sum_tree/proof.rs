use serde::{Deserialize, Serialize};

use super::error::ProofError;
use super::node::NodeHash;

/// The disclosed leaf data of an inclusion proof.
///
/// `hash` is redundant next to `(id, value, nonce)` but is carried on the
/// wire so a verifier can flag tampering with it explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRecord {
    pub id: String,
    pub value: u64,
    #[serde(with = "hex_digest")]
    pub nonce: [u8; 32],
    #[serde(with = "hex_digest")]
    pub hash: NodeHash,
}

/// Value and hash of one disclosed child of a [`ParentRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub value: u64,
    #[serde(with = "hex_digest")]
    pub hash: NodeHash,
}

/// One ancestor on the leaf-to-root path: the branch's own commitment plus
/// both children's, enough for a verifier to recompute every hash on the
/// path without seeing anything else of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRecord {
    pub value: u64,
    #[serde(with = "hex_digest")]
    pub hash: NodeHash,
    pub left: ChildRecord,
    pub right: ChildRecord,
}

/// A path-restricted disclosure sufficient to verify one leaf's inclusion
/// in a published root commitment. `parents` is ordered leaf-to-root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub leaf: LeafRecord,
    pub parents: Vec<ParentRecord>,
}

impl MerkleProof {
    /// Number of combination rounds the leaf survived; zero for a proof out
    /// of a single-leaf tree.
    pub fn path_len(&self) -> usize {
        self.parents.len()
    }

    pub fn to_json(&self) -> Result<String, ProofError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProofError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Hex string codec for 32-byte digests and nonces (64 hex characters on
/// the wire).
mod hex_digest {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let raw = String::deserialize(deserializer)?;
        let bytes = hex::decode(&raw).map_err(de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| de::Error::custom("expected exactly 32 bytes of hex"))
    }
}
