//! # QC-18 Cross-Layer Inbox
//!
//! Entry boundary through which submitters on the settlement layer push
//! messages into the execution layer's ordered inbox.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Pack each request into a kind-specific byte layout
//! - Fingerprint the payload with Keccak-256
//! - Hand (kind, sender, fingerprint, value) to the external sequencer
//! - Publish the assigned position (and payload) to observers
//!
//! ## Message Kinds
//!
//! | Tag | Kind | Entry points |
//! |-----|------|--------------|
//! | 0 | Value transfer | `transfer_value` |
//! | 3 | Relayed message | `send_message`, `send_origin_message`, unsigned txs |
//! | 5 | Paired deploy | `deploy_contract_pair` (contracts only) |
//! | 7 | Funded by value | funded txs, `deposit` |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-inbox/
//! ├── domain/          # Address, Hash, MessageKind, InboxEvent, errors, invariants
//! ├── algorithms/      # Packed encoding, Keccak fingerprint
//! ├── ports/           # InboxApi, Sequencer, CodeHashReader, EventSink
//! ├── adapters/        # In-memory sequencer, accounts, event sinks
//! ├── service/         # InboxService, DeliveryClient, ContractAddressProbe
//! ├── config.rs        # InboxConfig
//! └── telemetry.rs     # Logging setup
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use qc_18_inbox::{
//!     Address, CallContext, InMemoryAccounts, InMemoryEventLog, InMemorySequencer,
//!     InboxApi, InboxConfig, InboxService, U256,
//! };
//! use std::sync::Arc;
//!
//! let inbox = InboxService::new(
//!     Arc::new(InMemorySequencer::new()),
//!     Arc::new(InMemoryAccounts::new()),
//!     Arc::new(InMemoryEventLog::new()),
//!     InboxConfig::default(),
//! );
//!
//! let ctx = CallContext::direct(Address::new([1u8; 20])).with_value(U256::from(1000));
//! let position = inbox.deposit(&ctx, Address::new([2u8; 20])).unwrap();
//! assert_eq!(position, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-exports
pub use adapters::{
    AcceptedMessage, BroadcastEventSink, InMemoryAccounts, InMemoryEventLog, InMemorySequencer,
};
pub use algorithms::{fingerprint, keccak256, InboxRequest, PackedEncoder};
pub use config::InboxConfig;
pub use domain::{
    code_hash_has_code, Address, CallContext, DeliveryReceipt, Hash, InboxError, InboxEvent,
    InboxMessage, MessageKind, Position, SequencerError, StateError, TxSubKind,
    DEFAULT_MAX_DATA_SIZE, EMPTY_CODE_HASH, U256,
};
pub use ports::{CodeHashReader, EventSink, InboxApi, Sequencer};
pub use service::{ContractAddressProbe, DeliveryClient, InboxService};
pub use telemetry::{init_logging, LoggingConfig, TelemetryError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
