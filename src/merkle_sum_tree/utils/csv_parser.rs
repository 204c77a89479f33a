use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::merkle_sum_tree::Entry;

#[derive(Debug, Deserialize)]
struct CsvEntry {
    id: String,
    balance: u64,
}

/// Parse an `id,balance` snapshot CSV into tree entries.
///
/// The root commits to the aggregate of all balances, so a snapshot whose
/// sum cannot be represented is rejected here, before any tree is built.
pub fn parse_csv_to_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut entries = Vec::new();
    let mut balance_acc: u64 = 0;

    for result in rdr.deserialize() {
        let record: CsvEntry = result?;
        balance_acc = balance_acc
            .checked_add(record.balance)
            .ok_or("accumulated balance overflows u64, tree build would fail")?;
        entries.push(Entry::new(record.id, record.balance));
    }

    Ok(entries)
}
