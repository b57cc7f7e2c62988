//! In-Memory Accounts Adapter
//!
//! Implements `CodeHashReader` over a map of code digests.

use crate::algorithms::keccak256;
use crate::domain::{Address, Hash, StateError, EMPTY_CODE_HASH};
use crate::ports::outbound::CodeHashReader;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory code-hash state for testing.
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    code_hashes: RwLock<HashMap<Address, Hash>>,
}

impl InMemoryAccounts {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plain account (exists, no code).
    pub fn create_account(&self, address: Address) {
        self.code_hashes.write().insert(address, EMPTY_CODE_HASH);
    }

    /// Deploy `code` at `address`. Empty code leaves a plain account.
    pub fn deploy_code(&self, address: Address, code: &[u8]) {
        let code_hash = if code.is_empty() {
            EMPTY_CODE_HASH
        } else {
            keccak256(code)
        };
        self.code_hashes.write().insert(address, code_hash);
    }

    /// Mark `address` as running its constructor. Until
    /// [`InMemoryAccounts::deploy_code`] is called it reads as a plain account.
    pub fn begin_construction(&self, address: Address) {
        self.create_account(address);
    }
}

impl CodeHashReader for InMemoryAccounts {
    fn code_hash(&self, address: Address) -> Result<Hash, StateError> {
        Ok(self
            .code_hashes
            .read()
            .get(&address)
            .copied()
            .unwrap_or(Hash::ZERO))
    }
}
