//! # Outbound Ports
//!
//! Traits for external dependencies: the sequencer that owns the inbox,
//! the ledger state the contract probe reads, and the observer boundary.
//!
//! All three are synchronous. A request runs to completion without
//! suspension points.

use crate::domain::{
    Address, Hash, InboxEvent, MessageKind, Position, SequencerError, StateError, U256,
};

/// Sequencer - outbound port.
///
/// Assigns each accepted message the next position and persists its
/// fingerprint. `value` travels with the call: on error nothing moves.
pub trait Sequencer: Send + Sync {
    /// Accept a message and return its position.
    fn accept(
        &self,
        kind: MessageKind,
        sender: Address,
        fingerprint: Hash,
        value: U256,
    ) -> Result<Position, SequencerError>;
}

/// Code digest lookup - outbound port.
pub trait CodeHashReader: Send + Sync {
    /// Digest of the code held by `address`.
    ///
    /// * zero hash - no account
    /// * empty-code hash - account without code
    /// * anything else - digest of deployed code
    fn code_hash(&self, address: Address) -> Result<Hash, StateError>;
}

/// Observer boundary - outbound port.
///
/// Publishing cannot fail. It is called only after the sequencer has
/// returned a position.
pub trait EventSink: Send + Sync {
    /// Publish an event. Returns the number of observers reached.
    fn publish(&self, event: InboxEvent) -> usize;
}

impl<T: Sequencer + ?Sized> Sequencer for std::sync::Arc<T> {
    fn accept(
        &self,
        kind: MessageKind,
        sender: Address,
        fingerprint: Hash,
        value: U256,
    ) -> Result<Position, SequencerError> {
        (**self).accept(kind, sender, fingerprint, value)
    }
}

impl<T: CodeHashReader + ?Sized> CodeHashReader for std::sync::Arc<T> {
    fn code_hash(&self, address: Address) -> Result<Hash, StateError> {
        (**self).code_hash(address)
    }
}

impl<T: EventSink + ?Sized> EventSink for std::sync::Arc<T> {
    fn publish(&self, event: InboxEvent) -> usize {
        (**self).publish(event)
    }
}
