//! # Message Encoding
//!
//! Packed, delimiter-free payload layouts per message kind.
//!
//! ## Field widths
//!
//! | Field | Width |
//! |-------|-------|
//! | sub-kind | 1 byte |
//! | gas, bids, payments, sequence numbers, amounts | 32-byte big-endian word |
//! | destination | 32-byte word, address right-aligned |
//! | data | raw, always last |
//!
//! ## Layouts
//!
//! | Request | Kind | Fields |
//! |---------|------|--------|
//! | `ValueTransfer` | 0 | dest, value |
//! | `OriginMessage`, `Message` | 3 | data verbatim |
//! | `UnsignedTransaction` | 3 | 0, max_gas, bid, seq, dest, amount, data |
//! | `ContractTransaction` | 3 | 1, max_gas, bid, dest, amount, data |
//! | `PairedDeploy` | 5 | max_gas, bid, payment, init_data |
//! | `FundedTransaction` | 7 | 0, max_gas, bid, seq, dest, value, data |
//! | `FundedContractTransaction` | 7 | 1, max_gas, bid, dest, value, data |
//! | `Deposit` | 7 | 1, 0, 0, dest, value |
//!
//! `value` is always the attached value handed to [`InboxRequest::encode`],
//! never a request field, so the payload and the forwarded amount agree by
//! construction.

use crate::domain::value_objects::hex_bytes;
use crate::domain::{Address, MessageKind, TxSubKind, U256};
use serde::{Deserialize, Serialize};

/// Width of a numeric or identity field.
pub const WORD_LEN: usize = 32;

/// Width of the unsigned-transaction sub-kind.
pub const SUB_KIND_LEN: usize = 1;

/// Fixed-layout writer. Fields are appended in call order with no
/// separators or length prefixes.
#[derive(Debug, Default)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    /// Empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with a preallocated buffer.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// One raw byte.
    #[must_use]
    pub fn byte(mut self, value: u8) -> Self {
        self.buf.push(value);
        self
    }

    /// A 256-bit big-endian word.
    #[must_use]
    pub fn word(mut self, value: U256) -> Self {
        let mut bytes = [0u8; WORD_LEN];
        value.to_big_endian(&mut bytes);
        self.buf.extend_from_slice(&bytes);
        self
    }

    /// An identity widened to a word.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.buf.extend_from_slice(&address.to_word());
        self
    }

    /// Variable-length tail. Must be the last field.
    #[must_use]
    pub fn tail(mut self, data: &[u8]) -> Self {
        self.buf.extend_from_slice(data);
        self
    }

    /// The packed bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// A request as received at one of the inbox entry points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboxRequest {
    /// Opaque bytes from the transaction originator. Not echoed in events.
    OriginMessage {
        /// Relayed bytes.
        #[serde(with = "hex_bytes")]
        data: Vec<u8>,
    },
    /// Opaque bytes from any caller.
    Message {
        /// Relayed bytes.
        #[serde(with = "hex_bytes")]
        data: Vec<u8>,
    },
    /// Paired contract deployment, callable by contracts only.
    PairedDeploy {
        /// Gas ceiling on the execution layer.
        max_gas: U256,
        /// Opaque price bid, forwarded verbatim.
        gas_price_bid: U256,
        /// Payment for the deployment.
        payment: U256,
        /// Contract init code.
        #[serde(with = "hex_bytes")]
        init_data: Vec<u8>,
    },
    /// Account-style unsigned transaction funded by the attached value.
    FundedTransaction {
        /// Gas ceiling.
        max_gas: U256,
        /// Opaque price bid.
        gas_price_bid: U256,
        /// Sender sequence number on the execution layer.
        sequence_number: U256,
        /// Destination.
        destination: Address,
        /// Calldata.
        #[serde(with = "hex_bytes")]
        data: Vec<u8>,
    },
    /// Contract-style unsigned transaction funded by the attached value.
    FundedContractTransaction {
        /// Gas ceiling.
        max_gas: U256,
        /// Opaque price bid.
        gas_price_bid: U256,
        /// Destination.
        destination: Address,
        /// Calldata.
        #[serde(with = "hex_bytes")]
        data: Vec<u8>,
    },
    /// Plain deposit of the attached value.
    Deposit {
        /// Credited identity.
        destination: Address,
    },
    /// Plain transfer of the attached value.
    ValueTransfer {
        /// Credited identity.
        destination: Address,
    },
    /// Account-style unsigned transaction paid on the execution layer.
    UnsignedTransaction {
        /// Gas ceiling.
        max_gas: U256,
        /// Opaque price bid.
        gas_price_bid: U256,
        /// Sender sequence number on the execution layer.
        sequence_number: U256,
        /// Destination.
        destination: Address,
        /// Value moved on the execution layer.
        amount: U256,
        /// Calldata.
        #[serde(with = "hex_bytes")]
        data: Vec<u8>,
    },
    /// Contract-style unsigned transaction paid on the execution layer.
    ContractTransaction {
        /// Gas ceiling.
        max_gas: U256,
        /// Opaque price bid.
        gas_price_bid: U256,
        /// Destination.
        destination: Address,
        /// Value moved on the execution layer.
        amount: U256,
        /// Calldata.
        #[serde(with = "hex_bytes")]
        data: Vec<u8>,
    },
}

impl InboxRequest {
    /// Kind the request is tagged with.
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::ValueTransfer { .. } => MessageKind::ValueTransfer,
            Self::OriginMessage { .. }
            | Self::Message { .. }
            | Self::UnsignedTransaction { .. }
            | Self::ContractTransaction { .. } => MessageKind::RelayedMessage,
            Self::PairedDeploy { .. } => MessageKind::PairedDeploy,
            Self::FundedTransaction { .. }
            | Self::FundedContractTransaction { .. }
            | Self::Deposit { .. } => MessageKind::FundedByValue,
        }
    }

    /// True when the entry point accepts attached value.
    #[must_use]
    pub fn is_payable(&self) -> bool {
        matches!(
            self,
            Self::FundedTransaction { .. }
                | Self::FundedContractTransaction { .. }
                | Self::Deposit { .. }
                | Self::ValueTransfer { .. }
        )
    }

    /// True when the payload must appear in the delivery event.
    #[must_use]
    pub fn echoes_payload(&self) -> bool {
        !matches!(self, Self::OriginMessage { .. })
    }

    /// True when only the transaction originator may submit.
    #[must_use]
    pub fn requires_origin(&self) -> bool {
        matches!(self, Self::OriginMessage { .. })
    }

    /// True when only a code-bearing principal may submit.
    #[must_use]
    pub fn requires_contract_caller(&self) -> bool {
        matches!(self, Self::PairedDeploy { .. })
    }

    /// Exact payload length for the given request.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::OriginMessage { data } | Self::Message { data } => data.len(),
            Self::PairedDeploy { init_data, .. } => 3 * WORD_LEN + init_data.len(),
            Self::FundedTransaction { data, .. } | Self::UnsignedTransaction { data, .. } => {
                SUB_KIND_LEN + 5 * WORD_LEN + data.len()
            }
            Self::FundedContractTransaction { data, .. }
            | Self::ContractTransaction { data, .. } => SUB_KIND_LEN + 4 * WORD_LEN + data.len(),
            Self::Deposit { .. } => SUB_KIND_LEN + 4 * WORD_LEN,
            Self::ValueTransfer { .. } => 2 * WORD_LEN,
        }
    }

    /// Packed payload. Pure and total.
    #[must_use]
    pub fn encode(&self, attached_value: U256) -> Vec<u8> {
        let out = PackedEncoder::with_capacity(self.encoded_len());
        let packed = match self {
            Self::OriginMessage { data } | Self::Message { data } => out.tail(data),
            Self::PairedDeploy {
                max_gas,
                gas_price_bid,
                payment,
                init_data,
            } => out
                .word(*max_gas)
                .word(*gas_price_bid)
                .word(*payment)
                .tail(init_data),
            Self::FundedTransaction {
                max_gas,
                gas_price_bid,
                sequence_number,
                destination,
                data,
            } => out
                .byte(TxSubKind::Account.tag())
                .word(*max_gas)
                .word(*gas_price_bid)
                .word(*sequence_number)
                .address(*destination)
                .word(attached_value)
                .tail(data),
            Self::FundedContractTransaction {
                max_gas,
                gas_price_bid,
                destination,
                data,
            } => out
                .byte(TxSubKind::Contract.tag())
                .word(*max_gas)
                .word(*gas_price_bid)
                .address(*destination)
                .word(attached_value)
                .tail(data),
            Self::Deposit { destination } => out
                .byte(TxSubKind::Contract.tag())
                .word(U256::zero())
                .word(U256::zero())
                .address(*destination)
                .word(attached_value),
            Self::ValueTransfer { destination } => {
                out.address(*destination).word(attached_value)
            }
            Self::UnsignedTransaction {
                max_gas,
                gas_price_bid,
                sequence_number,
                destination,
                amount,
                data,
            } => out
                .byte(TxSubKind::Account.tag())
                .word(*max_gas)
                .word(*gas_price_bid)
                .word(*sequence_number)
                .address(*destination)
                .word(*amount)
                .tail(data),
            Self::ContractTransaction {
                max_gas,
                gas_price_bid,
                destination,
                amount,
                data,
            } => out
                .byte(TxSubKind::Contract.tag())
                .word(*max_gas)
                .word(*gas_price_bid)
                .address(*destination)
                .word(*amount)
                .tail(data),
        };
        packed.finish()
    }
}
