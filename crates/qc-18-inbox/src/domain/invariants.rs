//! # Domain Invariants
//!
//! Entry-point preconditions. Each check runs before the sequencer is
//! called, so a failure leaves no trace.

use super::entities::CallContext;
use super::errors::InboxError;
use super::value_objects::Hash;

/// Default payload ceiling in bytes.
pub const DEFAULT_MAX_DATA_SIZE: usize = 117_964;

/// Keccak-256 of the empty byte string: an account that exists without code.
pub const EMPTY_CODE_HASH: Hash = Hash([
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
]);

/// Invariant: origin-relayed messages come straight from the originator.
///
/// Observers rebuild the payload from the originating request's calldata,
/// which is only sound when nothing forwarded the call.
pub fn invariant_origin_only(ctx: &CallContext) -> Result<(), InboxError> {
    if !ctx.is_from_origin() {
        return Err(InboxError::OriginOnly);
    }
    Ok(())
}

/// Invariant: the caller of a paired deploy has executable code.
pub fn invariant_caller_is_contract(has_code: bool) -> Result<(), InboxError> {
    if !has_code {
        return Err(InboxError::CallerMustBeContract);
    }
    Ok(())
}

/// Invariant: non-payable entry points carry no value.
pub fn invariant_not_payable(ctx: &CallContext) -> Result<(), InboxError> {
    if !ctx.value.is_zero() {
        return Err(InboxError::NotPayable { value: ctx.value });
    }
    Ok(())
}

/// Invariant: encoded payload fits the configured ceiling.
pub fn invariant_payload_size(len: usize, max: usize) -> Result<(), InboxError> {
    if len > max {
        return Err(InboxError::DataTooLarge { len, max });
    }
    Ok(())
}

/// A code digest denotes executable code unless it is one of the two
/// sentinels: zero (no account) or the empty-code digest (plain account).
///
/// Ledger-specific. A contract still running its constructor reports the
/// empty-code digest, so the same identity can read as "no code" early in a
/// call chain and "has code" later.
#[must_use]
pub fn code_hash_has_code(code_hash: &Hash) -> bool {
    !code_hash.is_zero() && *code_hash != EMPTY_CODE_HASH
}
