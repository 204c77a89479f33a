//! This crate contains the cryptographic primitives for implementing a proof
//! of solvency protocol. The operator commits to a snapshot of account
//! balances with a Merkle sum tree and publishes only the root commitment;
//! each account holder receives a path-restricted inclusion proof they can
//! check against that commitment on their own.

/// Utilities to build the Merkle sum tree data structure, extract inclusion
/// proofs from it and verify them against a published root.
pub mod merkle_sum_tree;
