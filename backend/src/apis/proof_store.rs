use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use merkle_sum_solvency::merkle_sum_tree::{MerkleProof, ProofError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("proof storage io: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but does not decode as a proof.
    #[error(transparent)]
    Proof(#[from] ProofError),
}

/// On-disk home for issued proofs: one JSON document per account id, named
/// deterministically after that id, under a configurable directory.
#[derive(Clone, Debug)]
pub struct ProofStore {
    dir: PathBuf,
}

impl ProofStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(ProofStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic location of one account's proof document.
    pub fn path_for(&self, account_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", account_id))
    }

    pub fn save(&self, account_id: &str, proof: &MerkleProof) -> Result<PathBuf, StoreError> {
        let path = self.path_for(account_id);
        fs::write(&path, proof.to_json()?)?;
        info!(account = account_id, path = %path.display(), "stored inclusion proof");
        Ok(path)
    }

    pub fn load(&self, account_id: &str) -> Result<MerkleProof, StoreError> {
        let raw = fs::read_to_string(self.path_for(account_id))?;
        Ok(MerkleProof::from_json(&raw)?)
    }
}
