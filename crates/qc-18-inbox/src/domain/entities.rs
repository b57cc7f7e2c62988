//! # Domain Entities
//!
//! The message handed to the sequencer, the caller context it is built
//! from, and the records surfaced to observers.

use super::value_objects::{Address, Hash, MessageKind, Position, U256};
use crate::algorithms::fingerprint;
use serde::{Deserialize, Serialize};

/// Identity and value of the request currently being dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// Immediate caller as the inbox observes it.
    pub caller: Address,
    /// Principal that started the outermost request.
    pub origin: Address,
    /// Native value attached to this call.
    pub value: U256,
}

impl CallContext {
    /// A call made directly by the originator, without value.
    #[must_use]
    pub fn direct(caller: Address) -> Self {
        Self {
            caller,
            origin: caller,
            value: U256::zero(),
        }
    }

    /// A call forwarded by `caller` on behalf of `origin`.
    #[must_use]
    pub fn forwarded(caller: Address, origin: Address) -> Self {
        Self {
            caller,
            origin,
            value: U256::zero(),
        }
    }

    /// Attach native value.
    #[must_use]
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// True when no intermediate principal sits between originator and inbox.
    #[must_use]
    pub fn is_from_origin(&self) -> bool {
        self.caller == self.origin
    }
}

/// A message for the duration of one delivery call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboxMessage {
    /// Layout tag.
    pub kind: MessageKind,
    /// Immediate caller.
    pub sender: Address,
    /// Packed payload.
    pub payload: Vec<u8>,
    /// Keccak-256 of `payload`.
    pub fingerprint: Hash,
    /// Attached value, forwarded exactly.
    pub value: U256,
}

impl InboxMessage {
    /// Build a message, fingerprinting the payload.
    #[must_use]
    pub fn new(kind: MessageKind, sender: Address, payload: Vec<u8>, value: U256) -> Self {
        let fingerprint = fingerprint(&payload);
        Self {
            kind,
            sender,
            payload,
            fingerprint,
            value,
        }
    }

    /// Check reconstructed bytes against this message's fingerprint.
    #[must_use]
    pub fn matches_payload(&self, payload: &[u8]) -> bool {
        fingerprint(payload) == self.fingerprint
    }
}

/// Result of a successful delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Position assigned by the sequencer.
    pub position: Position,
    /// The delivered message.
    pub message: InboxMessage,
}

/// Records surfaced to indexers after a successful delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InboxEvent {
    /// Delivery whose payload observers cannot recover from the request alone.
    MessageDelivered {
        /// Assigned position.
        position: Position,
        /// Full packed payload.
        #[serde(with = "crate::domain::value_objects::hex_bytes")]
        payload: Vec<u8>,
    },
    /// Delivery of an origin-relayed message. The payload is the calldata of
    /// the originating request.
    MessageDeliveredFromOrigin {
        /// Assigned position.
        position: Position,
    },
}

impl InboxEvent {
    /// Position carried by any event.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::MessageDelivered { position, .. }
            | Self::MessageDeliveredFromOrigin { position } => *position,
        }
    }

    /// Echoed payload, when present.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::MessageDelivered { payload, .. } => Some(payload.as_slice()),
            Self::MessageDeliveredFromOrigin { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_context_direct_is_from_origin() {
        let ctx = CallContext::direct(Address::new([1u8; 20]));
        assert!(ctx.is_from_origin());
        assert!(ctx.value.is_zero());
    }

    #[test]
    fn test_call_context_forwarded_is_not_from_origin() {
        let ctx = CallContext::forwarded(Address::new([2u8; 20]), Address::new([1u8; 20]));
        assert!(!ctx.is_from_origin());
    }

    #[test]
    fn test_message_fingerprint_matches_payload() {
        let msg = InboxMessage::new(
            MessageKind::RelayedMessage,
            Address::new([1u8; 20]),
            vec![0xde, 0xad],
            U256::zero(),
        );
        assert!(msg.matches_payload(&[0xde, 0xad]));
        assert!(!msg.matches_payload(&[0xde]));
    }

    #[test]
    fn test_event_accessors() {
        let echoed = InboxEvent::MessageDelivered {
            position: 4,
            payload: vec![1, 2],
        };
        assert_eq!(echoed.position(), 4);
        assert_eq!(echoed.payload(), Some(&[1u8, 2][..]));

        let origin = InboxEvent::MessageDeliveredFromOrigin { position: 5 };
        assert_eq!(origin.position(), 5);
        assert!(origin.payload().is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let event = InboxEvent::MessageDelivered {
            position: 0,
            payload: vec![0xab],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "message_delivered");
        assert_eq!(json["payload"], "0xab");
    }
}
