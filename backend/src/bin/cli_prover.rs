use std::path::Path;

use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use solvency_backend::apis::proof_store::ProofStore;
use solvency_backend::apis::snapshot::Snapshot;
use solvency_backend::save_to_file;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Prompt for entry CSV file path
    let entry_csv: String = Input::new()
        .with_prompt("Enter path to entry CSV file")
        .with_initial_text("entry_8.csv")
        .interact()
        .unwrap();

    if !Path::new(&entry_csv).exists() {
        eprintln!("File not found: {}", entry_csv);
        return;
    }

    // Prompt for the directory the proof documents go to
    let proofs_dir: String = Input::new()
        .with_prompt("Enter directory for exported proofs")
        .with_initial_text("proofs")
        .interact()
        .unwrap();

    let snapshot = match Snapshot::new(&entry_csv) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            eprintln!("Error building the snapshot tree: {}", error);
            return;
        }
    };

    let commitment = snapshot.root_commitment();
    println!("root hash : {}", commitment.root_hash);
    println!("root value: {}", commitment.root_value);

    let store = match ProofStore::new(&proofs_dir) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("Error opening proof store: {}", error);
            return;
        }
    };

    // The commitment document is what the operator publishes; proofs are
    // handed out individually.
    let commitment_path = store.dir().join("root.json");
    if let Err(error) = save_to_file(&commitment_path, &commitment) {
        eprintln!("Error exporting root commitment: {}", error);
        return;
    }
    println!("Exported root commitment to {}", commitment_path.display());

    match snapshot.export_proofs(&store) {
        Ok(count) => println!(
            "Exported {} inclusion proofs to {}",
            count,
            store.dir().display()
        ),
        Err(error) => eprintln!("Error exporting proofs: {}", error),
    }
}
