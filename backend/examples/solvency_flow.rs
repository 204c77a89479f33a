use std::error::Error;

use merkle_sum_solvency::merkle_sum_tree::{verify_proof, Entry};

use solvency_backend::apis::proof_store::ProofStore;
use solvency_backend::apis::snapshot::Snapshot;

fn main() -> Result<(), Box<dyn Error>> {
    // 1. The operator takes a static snapshot of every account balance.
    let entries = vec![
        Entry::new("alice", 30),
        Entry::new("bob", 70),
        Entry::new("carol", 10),
    ];

    let snapshot = Snapshot::from_entries(&entries)?;
    let commitment = snapshot.root_commitment();
    println!(
        "1. Root commitment published: hash {}, value {}",
        commitment.root_hash, commitment.root_value
    );

    // 2. One proof document is issued per account.
    let store = ProofStore::new(std::env::temp_dir().join("solvency_flow_proofs"))?;
    let count = snapshot.export_proofs(&store)?;
    println!(
        "2. {} inclusion proofs issued under {}",
        count,
        store.dir().display()
    );

    // 3. An account holder fetches only their own document and checks it
    //    against the published commitment.
    let proof = store.load("alice")?;
    let root_hash = commitment.root_hash_bytes()?;
    assert!(verify_proof(
        &proof,
        "alice",
        30,
        &root_hash,
        commitment.root_value
    ));
    println!("3. alice's balance is included in the published total!");

    // 4. A tampered claim is rejected.
    assert!(!verify_proof(
        &proof,
        "alice",
        31,
        &root_hash,
        commitment.root_value
    ));
    println!("4. a forged balance claim does not verify");

    Ok(())
}
