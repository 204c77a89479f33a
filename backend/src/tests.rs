use std::fs;

use tempfile::tempdir;

use merkle_sum_solvency::merkle_sum_tree::{verify_proof, ProofError};

use crate::apis::proof_store::{ProofStore, StoreError};
use crate::apis::snapshot::{RootCommitment, Snapshot};
use crate::{load_from_file, save_to_file};

#[test]
fn test_full_flow_through_storage() {
    let workdir = tempdir().unwrap();

    let csv_path = workdir.path().join("entries.csv");
    fs::write(&csv_path, "id,balance\nalice,30\nbob,70\ncarol,10\n").unwrap();

    let snapshot = Snapshot::new(&csv_path).unwrap();
    let commitment = snapshot.root_commitment();
    assert_eq!(commitment.root_value, 110);

    // the operator publishes the commitment document...
    let commitment_path = workdir.path().join("root.json");
    save_to_file(&commitment_path, &commitment).unwrap();
    let published: RootCommitment = load_from_file(&commitment_path).unwrap();
    assert_eq!(published, commitment);

    // ...and issues one proof document per account
    let store = ProofStore::new(workdir.path().join("proofs")).unwrap();
    assert_eq!(snapshot.export_proofs(&store).unwrap(), 3);

    // an account holder loads their own document and checks it
    let proof = store.load("bob").unwrap();
    let root_hash = published.root_hash_bytes().unwrap();
    assert!(verify_proof(&proof, "bob", 70, &root_hash, 110));
    assert!(!verify_proof(&proof, "bob", 71, &root_hash, 110));
}

#[test]
fn test_store_distinguishes_missing_from_corrupt() {
    let workdir = tempdir().unwrap();
    let store = ProofStore::new(workdir.path().join("proofs")).unwrap();

    assert!(matches!(store.load("nobody"), Err(StoreError::Io(_))));

    fs::write(store.path_for("mallory"), "{ not a proof }").unwrap();
    assert!(matches!(
        store.load("mallory"),
        Err(StoreError::Proof(ProofError::Malformed(_)))
    ));
}

#[test]
fn test_proof_documents_are_named_after_accounts() {
    let workdir = tempdir().unwrap();
    let store = ProofStore::new(workdir.path()).unwrap();
    assert_eq!(
        store.path_for("alice"),
        workdir.path().join("alice.json")
    );
}
