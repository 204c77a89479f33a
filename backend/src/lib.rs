//! Operator- and user-side plumbing around the Merkle sum tree core: file
//! storage for issued proofs, snapshot rounds and small CLI wrappers. No
//! tree or proof logic lives here; this crate only moves bytes between the
//! core's structured records and disk.

pub mod apis;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::{error::Error, fs, path::Path};

/// Serialize `data` as JSON into a file at `path`.
pub fn save_to_file<P: AsRef<Path>, T: Serialize>(path: P, data: &T) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string(data)?)?;
    Ok(())
}

/// Deserialize a JSON file at `path`.
pub fn load_from_file<P: AsRef<Path>, T: for<'de> Deserialize<'de>>(
    path: P,
) -> Result<T, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
