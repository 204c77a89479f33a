use crate::merkle_sum_tree::{
    ChildRecord, LeafRecord, MerkleProof, MerkleSumTree, NodeKind, ParentRecord, TreeError,
};

/// Extract the inclusion proof for the leaf at `index`.
///
/// Walks the parent chain leaf-to-root, recording at each branch its own
/// `(value, hash)` and both children's. Everything below the single
/// disclosed sibling per level stays hidden, which is what keeps the proof
/// proportional to this leaf's depth rather than to the tree size.
pub fn create_proof(tree: &MerkleSumTree, index: usize) -> Result<MerkleProof, TreeError> {
    let leaf_id = *tree
        .leaves()
        .get(index)
        .ok_or(TreeError::UnknownLeaf(index))?;
    let leaf = tree.node(leaf_id);

    let (account, nonce) = match leaf.kind() {
        NodeKind::Leaf { id, nonce } => (id.clone(), *nonce),
        _ => return Err(TreeError::UnknownLeaf(index)),
    };

    let mut parents = Vec::new();
    for ancestor_id in tree.parent_chain(leaf_id)? {
        let branch = tree.node(ancestor_id);
        let (left_id, right_id) = match branch.kind() {
            NodeKind::Branch { left, right } => (*left, *right),
            // parent links are only ever set by branch construction
            _ => unreachable!("parent link points at a non-branch node"),
        };
        let left = tree.node(left_id);
        let right = tree.node(right_id);

        parents.push(ParentRecord {
            value: branch.value(),
            hash: *branch.hash(),
            left: ChildRecord {
                value: left.value(),
                hash: *left.hash(),
            },
            right: ChildRecord {
                value: right.value(),
                hash: *right.hash(),
            },
        });
    }

    Ok(MerkleProof {
        leaf: LeafRecord {
            id: account,
            value: leaf.value(),
            nonce,
            hash: *leaf.hash(),
        },
        parents,
    })
}
