use tracing::debug;

use crate::merkle_sum_tree::utils::reconstruct_proof;
use crate::merkle_sum_tree::{MerkleProof, NodeHash, ProofError, VerifyFailure};

/// Run every check a proof must pass against a published root commitment,
/// reporting the first failure. Callers that only need a boolean go through
/// [`verify_proof`].
pub fn check_proof(
    proof: &MerkleProof,
    expected_id: &str,
    expected_value: u64,
    expected_root_hash: &NodeHash,
    expected_root_value: u64,
) -> Result<(), VerifyFailure> {
    let rebuilt = reconstruct_proof(proof)?;

    let leaf = rebuilt.leaf();
    if leaf.account() != Some(expected_id) {
        return Err(VerifyFailure::IdMismatch);
    }
    if leaf.value() != expected_value {
        return Err(VerifyFailure::ValueMismatch);
    }

    let root = rebuilt.root();
    if root.hash() != expected_root_hash {
        return Err(VerifyFailure::RootHashMismatch);
    }
    if root.value() != expected_root_value {
        return Err(VerifyFailure::RootValueMismatch);
    }

    // Reconstruction recomputes every on-path value and hash, so these
    // disclosed copies are redundant; they are still required to match, so
    // that no field of a stored proof can be altered without detection.
    if leaf.hash() != &proof.leaf.hash {
        return Err(VerifyFailure::LeafHashMismatch);
    }
    for (level, (&branch_id, record)) in rebuilt.path().iter().zip(&proof.parents).enumerate() {
        let branch = rebuilt.tree().node(branch_id);
        if branch.value() != record.value {
            return Err(VerifyFailure::ParentValueMismatch(level));
        }
        if branch.hash() != &record.hash {
            return Err(VerifyFailure::ParentHashMismatch(level));
        }
    }

    rebuilt.tree().verify_node(rebuilt.leaf_id())
}

/// Verify a proof against a published root commitment.
///
/// Never panics on adversarial input: forged and malformed proofs come back
/// as `false`, with the reason logged at debug level.
pub fn verify_proof(
    proof: &MerkleProof,
    expected_id: &str,
    expected_value: u64,
    expected_root_hash: &NodeHash,
    expected_root_value: u64,
) -> bool {
    match check_proof(
        proof,
        expected_id,
        expected_value,
        expected_root_hash,
        expected_root_value,
    ) {
        Ok(()) => true,
        Err(failure) => {
            debug!(account = expected_id, reason = %failure, "rejecting inclusion proof");
            false
        }
    }
}

/// Parse a serialized proof, then verify it.
///
/// Input that does not even decode is reported as [`ProofError::Malformed`]
/// so callers can tell "this is not a proof" apart from "this proof is
/// cryptographically invalid", which comes back as `Ok(false)`.
pub fn verify_json_proof(
    raw: &str,
    expected_id: &str,
    expected_value: u64,
    expected_root_hash: &NodeHash,
    expected_root_value: u64,
) -> Result<bool, ProofError> {
    let proof = MerkleProof::from_json(raw)?;
    Ok(verify_proof(
        &proof,
        expected_id,
        expected_value,
        expected_root_hash,
        expected_root_value,
    ))
}
