use std::collections::VecDeque;

use crate::merkle_sum_tree::utils::random_nonce;
use crate::merkle_sum_tree::{Entry, MerkleSumTree, TreeError};

/// Reduce a snapshot of entries into a Merkle sum tree.
///
/// The leaves enter a FIFO work queue; each round pops the two front nodes,
/// combines them into a branch and pushes the branch to the back, until a
/// single node remains. No power-of-two padding: an unpaired node simply
/// re-enters the queue and is combined in a later round. The shape trends
/// right-leaning, with earlier leaves ending up deeper; sums and hashes hold
/// regardless of shape, only proof lengths differ.
pub fn build_merkle_sum_tree(entries: &[Entry]) -> Result<MerkleSumTree, TreeError> {
    if entries.is_empty() {
        return Err(TreeError::EmptyInput);
    }

    let mut tree = MerkleSumTree::new_empty();

    let mut queue: VecDeque<_> = entries
        .iter()
        .map(|entry| {
            let nonce = entry.nonce().copied().unwrap_or_else(random_nonce);
            tree.push_leaf(entry.id(), entry.balance(), nonce)
        })
        .collect();

    while queue.len() > 1 {
        let left = queue.pop_front().unwrap();
        let right = queue.pop_front().unwrap();
        let branch = tree.push_branch(left, right)?;
        queue.push_back(branch);
    }

    // A single leaf is itself the root; no synthetic self-wrapping.
    let root = queue.pop_front().unwrap();
    tree.set_root(root);
    Ok(tree)
}
