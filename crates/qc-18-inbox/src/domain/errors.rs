//! # Domain Errors
//!
//! Error types for the Cross-Layer Inbox.
//!
//! Precondition failures are raised before any external call. Sequencer and
//! state failures are propagated verbatim. Encoding has no error type: it is
//! total for well-typed input.

use super::value_objects::U256;
use thiserror::Error;

/// Failure reported by the external sequencer's accept operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequencerError {
    /// The sequencer refused the message.
    #[error("sequencer rejected message: {0}")]
    Rejected(String),

    /// The sequencer could not be reached.
    #[error("sequencer unavailable: {0}")]
    Unavailable(String),
}

/// Failure reading ledger state (code digests).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The state backend could not answer.
    #[error("state unavailable: {0}")]
    Unavailable(String),
}

/// Inbox error types. Every variant aborts the whole request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InboxError {
    /// Caller is not the transaction originator.
    #[error("origin only")]
    OriginOnly,

    /// Caller has no executable code.
    #[error("caller must be contract")]
    CallerMustBeContract,

    /// Value attached to an entry point that does not accept value.
    #[error("entry point is not payable: attached value {value}")]
    NotPayable {
        /// Attached value.
        value: U256,
    },

    /// Encoded payload exceeds the configured ceiling.
    #[error("message data too large: {len} > {max} bytes")]
    DataTooLarge {
        /// Encoded payload length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Sequencer refused or failed the accept call.
    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    /// Code digest lookup failed.
    #[error(transparent)]
    State(#[from] StateError),
}

impl InboxError {
    /// True for failures detected locally before the sequencer was called.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::OriginOnly
                | Self::CallerMustBeContract
                | Self::NotPayable { .. }
                | Self::DataTooLarge { .. }
        )
    }
}
