use crate::merkle_sum_tree::{MerkleProof, MerkleSumTree, Node, NodeId, ProofError};

/// The minimal tree a proof describes: one fully-known leaf, one disclosed
/// sibling per level and the recomputed branches joining them.
pub struct ProofTree {
    tree: MerkleSumTree,
    leaf: NodeId,
    root: NodeId,
    path: Vec<NodeId>,
}

impl ProofTree {
    pub fn tree(&self) -> &MerkleSumTree {
        &self.tree
    }

    pub fn leaf_id(&self) -> NodeId {
        self.leaf
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn leaf(&self) -> &Node {
        self.tree.node(self.leaf)
    }

    pub fn root(&self) -> &Node {
        self.tree.node(self.root)
    }

    /// The reconstructed branches, leaf-to-root, one per parent record.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }
}

/// Rebuild the minimal tree out of a proof object.
///
/// The leaf hash is recomputed from the disclosed `(id, value, nonce)` with
/// the nonce replayed verbatim; each branch's value and hash are recomputed
/// from its children. Nothing on the path is taken from the proof as-is;
/// only the off-path sibling at each level carries disclosed data, and the
/// recomputed hash chain above it is what holds that data accountable.
///
/// Which side the current child occupies is decided by an explicit three-way
/// comparison of its hash against the record's `left.hash` and `right.hash`;
/// matching neither aborts with [`ProofError::BrokenChain`], the check that
/// stops a forged proof from splicing in an unrelated subtree.
pub fn reconstruct_proof(proof: &MerkleProof) -> Result<ProofTree, ProofError> {
    let mut tree = MerkleSumTree::new_empty();
    let leaf = tree.push_leaf(&proof.leaf.id, proof.leaf.value, proof.leaf.nonce);

    let mut path = Vec::with_capacity(proof.parents.len());
    let mut child = leaf;
    for (level, parent) in proof.parents.iter().enumerate() {
        let child_hash = *tree.node(child).hash();

        let (left, right) = if child_hash == parent.left.hash {
            let sibling = tree.push_disclosed(parent.right.value, parent.right.hash);
            (child, sibling)
        } else if child_hash == parent.right.hash {
            let sibling = tree.push_disclosed(parent.left.value, parent.left.hash);
            (sibling, child)
        } else {
            return Err(ProofError::BrokenChain { level });
        };

        child = tree
            .push_branch(left, right)
            .map_err(|_| ProofError::BalanceOverflow)?;
        path.push(child);
    }

    // With zero parent records the leaf itself is the root.
    tree.set_root(child);
    Ok(ProofTree {
        tree,
        leaf,
        root: child,
        path,
    })
}
