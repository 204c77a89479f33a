/// An entry in the Merkle sum tree from the operator's balance snapshot.
/// It contains the account id and the balance of the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    id: String,
    balance: u64,
    nonce: Option<[u8; 32]>,
}

impl Entry {
    pub fn new(id: impl Into<String>, balance: u64) -> Self {
        Entry {
            id: id.into(),
            balance,
            nonce: None,
        }
    }

    /// Pin the blinding nonce instead of minting a fresh one at build time.
    ///
    /// Meant for deterministic fixtures; production snapshots leave the nonce
    /// unset so every build blinds each leaf with fresh CSPRNG bytes.
    pub fn with_nonce(id: impl Into<String>, balance: u64, nonce: [u8; 32]) -> Self {
        Entry {
            id: id.into(),
            balance,
            nonce: Some(nonce),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub(crate) fn nonce(&self) -> Option<&[u8; 32]> {
        self.nonce.as_ref()
    }
}
