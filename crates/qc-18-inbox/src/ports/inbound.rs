//! # Inbound Ports
//!
//! API trait defining what the inbox offers submitters. One method per
//! entry point. Every call either commits fully (value forwarded, position
//! assigned, event published) or has no effect.

use crate::domain::{Address, CallContext, InboxError, Position, U256};

/// Cross-layer inbox API - inbound port.
pub trait InboxApi: Send + Sync {
    /// Relay opaque bytes from the transaction originator.
    ///
    /// Fails with [`InboxError::OriginOnly`] when forwarded. The payload is
    /// not echoed in the delivery event.
    fn send_origin_message(
        &self,
        ctx: &CallContext,
        data: &[u8],
    ) -> Result<Position, InboxError>;

    /// Relay opaque bytes from any caller.
    fn send_message(&self, ctx: &CallContext, data: &[u8]) -> Result<Position, InboxError>;

    /// Request a paired contract deployment.
    ///
    /// Fails with [`InboxError::CallerMustBeContract`] for plain accounts.
    fn deploy_contract_pair(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        payment: U256,
        init_data: &[u8],
    ) -> Result<Position, InboxError>;

    /// Account-style unsigned transaction funded by the attached value.
    fn send_funded_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        sequence_number: U256,
        destination: Address,
        data: &[u8],
    ) -> Result<Position, InboxError>;

    /// Contract-style unsigned transaction funded by the attached value.
    fn send_funded_contract_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        destination: Address,
        data: &[u8],
    ) -> Result<Position, InboxError>;

    /// Deposit the attached value to `destination`.
    fn deposit(&self, ctx: &CallContext, destination: Address) -> Result<Position, InboxError>;

    /// Transfer the attached value to `destination`.
    fn transfer_value(
        &self,
        ctx: &CallContext,
        destination: Address,
    ) -> Result<Position, InboxError>;

    /// Account-style unsigned transaction paid from the execution-layer balance.
    #[allow(clippy::too_many_arguments)]
    fn send_unsigned_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        sequence_number: U256,
        destination: Address,
        amount: U256,
        data: &[u8],
    ) -> Result<Position, InboxError>;

    /// Contract-style unsigned transaction paid from the execution-layer balance.
    fn send_contract_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        destination: Address,
        amount: U256,
        data: &[u8],
    ) -> Result<Position, InboxError>;
}
