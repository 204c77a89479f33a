use thiserror::Error;

/// Errors raised while building or walking a tree the caller owns directly.
///
/// These always propagate: a caller manipulating its own tree is expected to
/// treat them as programming or data errors, not as adversarial input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A build was attempted over an empty snapshot.
    #[error("no leaves given")]
    EmptyInput,

    /// A parent chain revisited a node it had already passed through.
    #[error("parent chain loops back on itself")]
    CyclicParent,

    /// Summing two subtree balances left the u64 domain.
    #[error("aggregate balance overflows u64")]
    BalanceOverflow,

    /// Proof generation was asked for a leaf index outside the tree.
    #[error("the leaf does not exist in this tree (index {0})")]
    UnknownLeaf(usize),
}

/// Errors raised while decoding or reconstructing a received proof.
///
/// Through [`verify_proof`] these fold into a plain `false`; through
/// [`reconstruct_proof`] they propagate so callers can tell a forged proof
/// from one that failed a semantic check.
///
/// [`verify_proof`]: super::verify_proof
/// [`reconstruct_proof`]: super::reconstruct_proof
#[derive(Debug, Error)]
pub enum ProofError {
    /// The current child's hash matches neither side of its claimed parent
    /// record, so the hash chain does not connect.
    #[error("child hash matches neither side of its claimed parent (level {level})")]
    BrokenChain { level: usize },

    /// The serialized proof could not be decoded at all.
    #[error("malformed proof: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Recombining two disclosed balances left the u64 domain.
    #[error("aggregate balance overflows u64")]
    BalanceOverflow,
}

/// The first check that failed while verifying a proof against a published
/// root commitment.
#[derive(Debug, Error)]
pub enum VerifyFailure {
    #[error("leaf id does not match the expected account id")]
    IdMismatch,

    #[error("leaf value does not match the expected balance")]
    ValueMismatch,

    #[error("reconstructed root hash does not match the published root hash")]
    RootHashMismatch,

    #[error("reconstructed root value does not match the published root value")]
    RootValueMismatch,

    #[error("disclosed leaf hash does not match the hash recomputed from id, value and nonce")]
    LeafHashMismatch,

    #[error("disclosed parent value does not match the reconstructed branch (level {0})")]
    ParentValueMismatch(usize),

    #[error("disclosed parent hash does not match the reconstructed branch (level {0})")]
    ParentHashMismatch(usize),

    #[error("branch value is not the sum of its children's values")]
    SumMismatch,

    #[error("branch hash does not commit to its value and children")]
    NodeHashMismatch,

    #[error("node is not registered as exactly one of its parent's children")]
    NotAChild,

    #[error("parent chain loops back on itself")]
    CyclicParent,

    /// The proof could not even be reconstructed.
    #[error(transparent)]
    Rejected(#[from] ProofError),
}
