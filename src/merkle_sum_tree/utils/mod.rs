mod build_tree;
mod create_proof;
mod csv_parser;
mod hash;
mod proof_verification;
mod reconstruct_proof;

pub use build_tree::build_merkle_sum_tree;
pub use create_proof::create_proof;
pub use csv_parser::parse_csv_to_entries;
pub use hash::{leaf_hash, node_hash, random_nonce};
pub use proof_verification::{check_proof, verify_json_proof, verify_proof};
pub use reconstruct_proof::{reconstruct_proof, ProofTree};
