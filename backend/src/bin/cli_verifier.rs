use std::fs;

use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use merkle_sum_solvency::merkle_sum_tree::{check_proof, MerkleProof, NodeHash};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get the path of the proof file
    let proof_file: String = Input::new()
        .with_prompt("Please input the path to the proof file")
        .with_initial_text("proofs/alice.json")
        .interact()
        .unwrap();

    let raw = match fs::read_to_string(&proof_file) {
        Ok(raw) => raw,
        Err(error) => {
            eprintln!("Cannot read {}: {}", proof_file, error);
            return;
        }
    };

    let proof = match MerkleProof::from_json(&raw) {
        Ok(proof) => proof,
        Err(error) => {
            eprintln!("This file does not contain a readable proof: {}", error);
            return;
        }
    };

    // Ask for user details
    let account_id: String = Input::new()
        .with_prompt("Please provide your account id")
        .interact()
        .unwrap();

    let balance: u64 = Input::new()
        .with_prompt("Please provide your balance")
        .interact()
        .unwrap();

    // The published commitment, distributed out-of-band by the operator
    let root_hash_str: String = Input::new()
        .with_prompt("Please provide the published root hash (hex)")
        .interact()
        .unwrap();

    let root_value: u64 = Input::new()
        .with_prompt("Please provide the published root value")
        .interact()
        .unwrap();

    let root_hash: NodeHash = match hex::decode(root_hash_str.trim())
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
    {
        Some(hash) => hash,
        None => {
            eprintln!("The root hash must be 64 hex characters");
            return;
        }
    };

    match check_proof(&proof, &account_id, balance, &root_hash, root_value) {
        Ok(()) => {
            println!("==========================");
            println!("    root hash : \"{}\"", root_hash_str.trim());
            println!("    root value: {}", root_value);
            println!("    account   : \"{}\"", account_id);
            println!("    balance   : {}", balance);
            println!("  ");
            println!("  The proof has been validated");
            println!("==========================");
        }
        Err(failure) => {
            println!("Proof verification failed: {}", failure);
        }
    }
}
