/// A 32-byte SHA-256 digest committing to a node's content.
pub type NodeHash = [u8; 32];

/// Index of a node inside the arena of its owning [`MerkleSumTree`].
///
/// A branch owns its two subtrees through `NodeId`s; the `parent` link on a
/// node is the same index used as a non-owning back-reference, so no strong
/// reference cycle can form.
///
/// [`MerkleSumTree`]: super::MerkleSumTree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// What a node is, beyond its `(value, hash)` commitment.
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// A blinded commitment to one account's balance.
    Leaf { id: String, nonce: [u8; 32] },
    /// An internal node combining two children; its value is the sum of both
    /// subtrees and its hash binds that sum to both child hashes.
    Branch { left: NodeId, right: NodeId },
    /// An off-path sibling inside a reconstructed proof tree. Carries only
    /// the value and hash disclosed by the proof, no further structure; it is
    /// only as trustworthy as the hash chain above it.
    Disclosed,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) value: u64,
    pub(crate) hash: NodeHash,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn hash(&self) -> &NodeHash {
        &self.hash
    }

    /// The branch this node was combined into, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The account id, for leaf nodes.
    pub fn account(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}
