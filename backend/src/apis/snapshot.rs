use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};

use merkle_sum_solvency::merkle_sum_tree::{Entry, MerkleProof, MerkleSumTree, NodeHash, TreeError};

use super::proof_store::ProofStore;

/// The document an operator publishes for one solvency round: the root hash
/// and the aggregate balance it attests to. How the document is
/// authenticated (signed, announced) is up to the operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootCommitment {
    pub root_hash: String,
    pub root_value: u64,
}

impl RootCommitment {
    /// Decode the hex root hash back into digest bytes.
    pub fn root_hash_bytes(&self) -> Result<NodeHash, hex::FromHexError> {
        let bytes = hex::decode(&self.root_hash)?;
        bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)
    }
}

/// One solvency round: a tree built once from one static balance snapshot,
/// ready to issue the published commitment and per-account proofs.
pub struct Snapshot {
    mst: MerkleSumTree,
}

impl Snapshot {
    pub fn new<P: AsRef<Path>>(entry_csv_path: P) -> Result<Self, Box<dyn Error>> {
        Ok(Snapshot {
            mst: MerkleSumTree::from_csv(entry_csv_path)?,
        })
    }

    pub fn from_entries(entries: &[Entry]) -> Result<Self, TreeError> {
        Ok(Snapshot {
            mst: MerkleSumTree::from_entries(entries)?,
        })
    }

    pub fn tree(&self) -> &MerkleSumTree {
        &self.mst
    }

    pub fn root_commitment(&self) -> RootCommitment {
        RootCommitment {
            root_hash: hex::encode(self.mst.root_hash()),
            root_value: self.mst.root_value(),
        }
    }

    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, TreeError> {
        self.mst.generate_proof(index)
    }

    /// Issue one proof document per account into `store`. Returns how many
    /// were written.
    pub fn export_proofs(&self, store: &ProofStore) -> Result<usize, Box<dyn Error>> {
        let mut count = 0;
        for index in 0..self.mst.leaf_count() {
            let leaf = self.mst.node(self.mst.leaves()[index]);
            let account_id = leaf.account().ok_or("leaf without an account id")?;
            let proof = self.mst.generate_proof(index)?;
            store.save(account_id, &proof)?;
            count += 1;
        }
        Ok(count)
    }
}
