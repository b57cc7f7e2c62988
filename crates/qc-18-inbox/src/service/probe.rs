//! # Contract Address Probe
//!
//! Decides whether an identity is a code-bearing principal.

use crate::domain::{code_hash_has_code, Address, StateError};
use crate::ports::outbound::CodeHashReader;
use std::sync::Arc;

/// Read-only "has code" check over the ledger's code digests.
///
/// Compares the digest against the zero and empty-code sentinels. An
/// identity mid-construction has no visible code yet, so the answer for
/// the same identity can change within one call chain.
pub struct ContractAddressProbe<C> {
    state: Arc<C>,
}

impl<C: CodeHashReader> ContractAddressProbe<C> {
    /// Probe over `state`.
    pub fn new(state: Arc<C>) -> Self {
        Self { state }
    }

    /// True when `address` currently holds executable code.
    pub fn is_contract(&self, address: Address) -> Result<bool, StateError> {
        let code_hash = self.state.code_hash(address)?;
        Ok(code_hash_has_code(&code_hash))
    }
}

impl<C> Clone for ContractAddressProbe<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
