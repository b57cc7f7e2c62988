//! Event Sink Adapters
//!
//! Implements `EventSink` for in-process observers: an append-only log and
//! a broadcast fan-out.

use crate::domain::InboxEvent;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Default broadcast channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Append-only event log.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<InboxEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far.
    #[must_use]
    pub fn events(&self) -> Vec<InboxEvent> {
        self.events.read().clone()
    }

    /// Number of events published.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// True when nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&self, event: InboxEvent) -> usize {
        self.events.write().push(event);
        1
    }
}

/// Broadcast fan-out to any number of subscribers.
///
/// Uses `tokio::sync::broadcast`; sending does not need a runtime.
/// Events published with no subscriber are dropped.
pub struct BroadcastEventSink {
    sender: broadcast::Sender<InboxEvent>,
    events_published: AtomicU64,
}

impl BroadcastEventSink {
    /// Sink with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Sink with the given channel capacity. A capacity of zero is raised
    /// to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            events_published: AtomicU64::new(0),
        }
    }

    /// New receiver for all subsequent events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<InboxEvent> {
        self.sender.subscribe()
    }

    /// Total events published.
    #[must_use]
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for BroadcastEventSink {
    fn publish(&self, event: InboxEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        let position = event.position();
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!(position, "[qc-18] No subscribers for inbox event");
                0
            }
        }
    }
}
