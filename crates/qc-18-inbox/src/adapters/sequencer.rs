//! In-Memory Sequencer Adapter
//!
//! Implements `Sequencer` with a monotonic counter and an append-only list
//! of accepted fingerprints.

use crate::domain::{Address, Hash, MessageKind, Position, SequencerError, U256};
use crate::ports::outbound::Sequencer;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// One message as the sequencer persisted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptedMessage {
    /// Assigned position.
    pub position: Position,
    /// Kind tag.
    pub kind: MessageKind,
    /// Submitting identity.
    pub sender: Address,
    /// Payload digest.
    pub fingerprint: Hash,
    /// Value received with the call.
    pub value: U256,
}

#[derive(Debug)]
struct Inbox {
    next_position: Position,
    accepted: Vec<AcceptedMessage>,
    balance: U256,
}

/// In-memory sequencer for testing and embedding.
#[derive(Debug)]
pub struct InMemorySequencer {
    inbox: Mutex<Inbox>,
    rejecting: AtomicBool,
}

impl InMemorySequencer {
    /// Sequencer whose first position is 0.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Sequencer whose first position is `position`.
    #[must_use]
    pub fn starting_at(position: Position) -> Self {
        Self {
            inbox: Mutex::new(Inbox {
                next_position: position,
                accepted: Vec::new(),
                balance: U256::zero(),
            }),
            rejecting: AtomicBool::new(false),
        }
    }

    /// Make every subsequent accept fail.
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }

    /// Messages accepted so far, in position order.
    #[must_use]
    pub fn accepted(&self) -> Vec<AcceptedMessage> {
        self.inbox.lock().accepted.clone()
    }

    /// Total value received across all accepted messages.
    #[must_use]
    pub fn balance(&self) -> U256 {
        self.inbox.lock().balance
    }

    /// Position the next accepted message will receive.
    #[must_use]
    pub fn next_position(&self) -> Position {
        self.inbox.lock().next_position
    }
}

impl Default for InMemorySequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer for InMemorySequencer {
    fn accept(
        &self,
        kind: MessageKind,
        sender: Address,
        fingerprint: Hash,
        value: U256,
    ) -> Result<Position, SequencerError> {
        if self.rejecting.load(Ordering::SeqCst) {
            warn!(%kind, %sender, "[qc-18] Sequencer rejecting message");
            return Err(SequencerError::Rejected("sequencer is rejecting".to_string()));
        }

        let mut inbox = self.inbox.lock();
        let balance = inbox
            .balance
            .checked_add(value)
            .ok_or_else(|| SequencerError::Rejected("inbox balance overflow".to_string()))?;

        let position = inbox.next_position;
        let next_position = position
            .checked_add(1)
            .ok_or_else(|| SequencerError::Rejected("inbox position space exhausted".to_string()))?;

        inbox.next_position = next_position;
        inbox.balance = balance;
        inbox.accepted.push(AcceptedMessage {
            position,
            kind,
            sender,
            fingerprint,
            value,
        });

        debug!(position, %kind, %fingerprint, "[qc-18] Sequencer accepted message");
        Ok(position)
    }
}
