use std::error::Error;
use std::path::Path;

use super::error::{TreeError, VerifyFailure};
use super::node::{Node, NodeHash, NodeId, NodeKind};
use super::proof::MerkleProof;
use super::utils::{
    build_merkle_sum_tree, create_proof, leaf_hash, node_hash, parse_csv_to_entries,
};
use super::Entry;

/// A Merkle sum tree over blinded account balance commitments.
///
/// Nodes live in an arena indexed by [`NodeId`]. A branch owns its two
/// subtrees by index; each child keeps a non-owning back-index to the branch
/// that combined it, set once at combination time and never mutated again.
/// The same arena representation backs both operator-built trees and the
/// minimal trees reconstructed from proofs.
pub struct MerkleSumTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) leaves: Vec<NodeId>,
}

impl MerkleSumTree {
    /// Build a tree from an `id,balance` snapshot CSV.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let entries = parse_csv_to_entries(path)?;
        Ok(build_merkle_sum_tree(&entries)?)
    }

    /// Build a tree from in-memory snapshot entries.
    pub fn from_entries(entries: &[Entry]) -> Result<Self, TreeError> {
        build_merkle_sum_tree(entries)
    }

    pub fn root(&self) -> &Node {
        self.node(self.root)
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root_hash(&self) -> &NodeHash {
        &self.root().hash
    }

    /// The aggregate of every leaf balance in the tree.
    pub fn root_value(&self) -> u64 {
        self.root().value
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Leaf node ids in snapshot order.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The snapshot position of the leaf committing to `account_id`, if any.
    pub fn index_of(&self, account_id: &str) -> Option<usize> {
        self.leaves
            .iter()
            .position(|&id| self.node(id).account() == Some(account_id))
    }

    /// Extract the inclusion proof for the leaf at `index`.
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, TreeError> {
        create_proof(self, index)
    }

    /// Collect the ancestors of `start`, leaf-to-root order.
    ///
    /// Fails with [`TreeError::CyclicParent`] if the chain revisits a node
    /// instead of terminating at a parentless root; tolerating that silently
    /// would make proof extraction non-terminating.
    pub fn parent_chain(&self, start: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut chain = Vec::new();
        let mut current = start;
        while let Some(parent) = self.node(current).parent {
            if parent == start || chain.contains(&parent) {
                return Err(TreeError::CyclicParent);
            }
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }

    /// Check a node and every ancestor above it.
    ///
    /// A leaf must hash to its stored commitment; a branch must carry the sum
    /// of its children and the hash recomputed from it; every node must be
    /// registered as exactly one of its parent's two children. Verification
    /// walks upward until the parentless root, which trivially passes.
    pub fn verify_node(&self, id: NodeId) -> Result<(), VerifyFailure> {
        // The arena cannot express unbounded chains, so a walk longer than
        // the node count means the parent links loop.
        self.verify_upward(id, self.nodes.len())
    }

    fn verify_upward(&self, id: NodeId, remaining: usize) -> Result<(), VerifyFailure> {
        if remaining == 0 {
            return Err(VerifyFailure::CyclicParent);
        }

        let node = self.node(id);
        match &node.kind {
            NodeKind::Leaf { id: account, nonce } => {
                if leaf_hash(account, node.value, nonce) != node.hash {
                    return Err(VerifyFailure::LeafHashMismatch);
                }
            }
            NodeKind::Branch { left, right } => {
                let l = self.node(*left);
                let r = self.node(*right);
                let sum = l
                    .value
                    .checked_add(r.value)
                    .ok_or(VerifyFailure::SumMismatch)?;
                if node.value != sum {
                    return Err(VerifyFailure::SumMismatch);
                }
                if node_hash(node.value, &l.hash, &r.hash) != node.hash {
                    return Err(VerifyFailure::NodeHashMismatch);
                }
            }
            // A disclosed sibling has no structure of its own; the recomputed
            // hash of its parent is what holds it accountable.
            NodeKind::Disclosed => {}
        }

        match node.parent {
            None => Ok(()),
            Some(parent_id) => {
                match &self.node(parent_id).kind {
                    NodeKind::Branch { left, right } => {
                        // Exactly one side, never both, never neither.
                        if (*left == id) == (*right == id) {
                            return Err(VerifyFailure::NotAChild);
                        }
                    }
                    _ => return Err(VerifyFailure::NotAChild),
                }
                self.verify_upward(parent_id, remaining - 1)
            }
        }
    }

    pub(crate) fn new_empty() -> Self {
        MerkleSumTree {
            nodes: Vec::new(),
            root: NodeId(0),
            leaves: Vec::new(),
        }
    }

    pub(crate) fn push_leaf(&mut self, account_id: &str, value: u64, nonce: [u8; 32]) -> NodeId {
        let hash = leaf_hash(account_id, value, &nonce);
        let id = self.alloc(Node {
            value,
            hash,
            parent: None,
            kind: NodeKind::Leaf {
                id: account_id.to_owned(),
                nonce,
            },
        });
        self.leaves.push(id);
        id
    }

    pub(crate) fn push_disclosed(&mut self, value: u64, hash: NodeHash) -> NodeId {
        self.alloc(Node {
            value,
            hash,
            parent: None,
            kind: NodeKind::Disclosed,
        })
    }

    /// Combine two parentless nodes into a branch owning both.
    pub(crate) fn push_branch(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, TreeError> {
        debug_assert!(left != right);
        debug_assert!(self.node(left).parent.is_none());
        debug_assert!(self.node(right).parent.is_none());

        let value = self
            .node(left)
            .value
            .checked_add(self.node(right).value)
            .ok_or(TreeError::BalanceOverflow)?;
        let hash = node_hash(value, &self.node(left).hash, &self.node(right).hash);

        let id = self.alloc(Node {
            value,
            hash,
            parent: None,
            kind: NodeKind::Branch { left, right },
        });
        self.nodes[left.0].parent = Some(id);
        self.nodes[right.0].parent = Some(id);
        Ok(id)
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
