//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-process implementations of the outbound ports.

mod accounts;
mod event_sink;
mod sequencer;

pub use accounts::InMemoryAccounts;
pub use event_sink::{BroadcastEventSink, InMemoryEventLog};
pub use sequencer::{AcceptedMessage, InMemorySequencer};
