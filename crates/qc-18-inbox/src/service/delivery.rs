//! # Delivery Client
//!
//! Fingerprints a payload and hands it to the sequencer in one synchronous
//! call, forwarding the attached value with it.

use crate::domain::{Address, DeliveryReceipt, InboxMessage, MessageKind, SequencerError, U256};
use crate::ports::outbound::Sequencer;
use std::sync::Arc;
use tracing::debug;

/// Client for the external sequencer. No retries: a failed accept fails
/// the request and the submitter decides whether to resubmit.
pub struct DeliveryClient<S> {
    sequencer: Arc<S>,
}

impl<S: Sequencer> DeliveryClient<S> {
    /// Client over `sequencer`.
    pub fn new(sequencer: Arc<S>) -> Self {
        Self { sequencer }
    }

    /// Deliver `payload` and return the assigned position.
    pub fn deliver(
        &self,
        kind: MessageKind,
        sender: Address,
        payload: Vec<u8>,
        value: U256,
    ) -> Result<DeliveryReceipt, SequencerError> {
        let message = InboxMessage::new(kind, sender, payload, value);
        let position = self.sequencer.accept(
            message.kind,
            message.sender,
            message.fingerprint,
            message.value,
        )?;

        debug!(
            position,
            %kind,
            fingerprint = %message.fingerprint,
            value = %message.value,
            "[qc-18] Message delivered to sequencer"
        );

        Ok(DeliveryReceipt { position, message })
    }
}

impl<S> Clone for DeliveryClient<S> {
    fn clone(&self) -> Self {
        Self {
            sequencer: Arc::clone(&self.sequencer),
        }
    }
}
