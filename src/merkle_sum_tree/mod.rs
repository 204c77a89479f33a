mod entry;
mod error;
mod node;
mod proof;
mod tree;
pub mod utils;

pub use entry::Entry;
pub use error::{ProofError, TreeError, VerifyFailure};
pub use node::{Node, NodeHash, NodeId, NodeKind};
pub use proof::{ChildRecord, LeafRecord, MerkleProof, ParentRecord};
pub use tree::MerkleSumTree;
pub use utils::{
    build_merkle_sum_tree, check_proof, create_proof, reconstruct_proof, verify_json_proof,
    verify_proof, ProofTree,
};
