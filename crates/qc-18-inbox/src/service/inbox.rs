//! # Inbox Service
//!
//! Dispatches each entry point to its message kind, runs the precondition
//! checks, delivers to the sequencer and publishes the delivery event.
//!
//! ## Request Pipeline
//!
//! ```text
//! preconditions -> encode -> size check -> sequencer.accept -> publish
//! ```
//!
//! Every fallible step runs before `publish`, and publishing cannot fail,
//! so a request either commits fully or leaves no trace. The service keeps
//! no mutable state, so a sequencer that calls back into the inbox observes
//! nothing half-done.

use super::delivery::DeliveryClient;
use super::probe::ContractAddressProbe;
use crate::algorithms::InboxRequest;
use crate::config::InboxConfig;
use crate::domain::{
    invariant_caller_is_contract, invariant_not_payable, invariant_origin_only,
    invariant_payload_size, Address, CallContext, InboxError, InboxEvent, Position, U256,
};
use crate::ports::inbound::InboxApi;
use crate::ports::outbound::{CodeHashReader, EventSink, Sequencer};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The cross-layer inbox.
pub struct InboxService<S, C, E> {
    config: InboxConfig,
    delivery: DeliveryClient<S>,
    probe: ContractAddressProbe<C>,
    events: Arc<E>,
}

impl<S, C, E> InboxService<S, C, E>
where
    S: Sequencer,
    C: CodeHashReader,
    E: EventSink,
{
    /// Create a new inbox over its three collaborators.
    pub fn new(sequencer: Arc<S>, state: Arc<C>, events: Arc<E>, config: InboxConfig) -> Self {
        Self {
            config,
            delivery: DeliveryClient::new(sequencer),
            probe: ContractAddressProbe::new(state),
            events,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &InboxConfig {
        &self.config
    }

    /// Submit a request described as data. Equivalent to calling the
    /// matching [`InboxApi`] method.
    pub fn submit(&self, ctx: &CallContext, request: InboxRequest) -> Result<Position, InboxError> {
        self.dispatch(ctx, request)
    }

    #[instrument(
        name = "inbox_dispatch",
        skip(self, ctx, request),
        fields(kind = %request.kind(), caller = %ctx.caller)
    )]
    fn dispatch(&self, ctx: &CallContext, request: InboxRequest) -> Result<Position, InboxError> {
        let result = self.commit(ctx, &request);
        if let Err(err) = &result {
            if err.is_precondition() {
                warn!(error = %err, value = %ctx.value, "[qc-18] Request rejected");
            } else {
                warn!(error = %err, "[qc-18] Delivery failed");
            }
        }
        result
    }

    fn commit(&self, ctx: &CallContext, request: &InboxRequest) -> Result<Position, InboxError> {
        if request.requires_origin() {
            invariant_origin_only(ctx)?;
        }
        if request.requires_contract_caller() {
            let has_code = self.probe.is_contract(ctx.caller)?;
            invariant_caller_is_contract(has_code)?;
        }
        if !request.is_payable() {
            invariant_not_payable(ctx)?;
        }

        let payload = request.encode(ctx.value);
        invariant_payload_size(payload.len(), self.config.max_data_size)?;

        let receipt = self
            .delivery
            .deliver(request.kind(), ctx.caller, payload, ctx.value)?;
        let position = receipt.position;

        // Nothing fallible past this point.
        let event = if request.echoes_payload() {
            InboxEvent::MessageDelivered {
                position,
                payload: receipt.message.payload,
            }
        } else {
            InboxEvent::MessageDeliveredFromOrigin { position }
        };
        let observers = self.events.publish(event);

        info!(
            position,
            fingerprint = %receipt.message.fingerprint,
            value = %receipt.message.value,
            "[qc-18] Message accepted into inbox"
        );
        debug!(observers, "[qc-18] Delivery event published");

        Ok(position)
    }
}

impl<S, C, E> InboxApi for InboxService<S, C, E>
where
    S: Sequencer,
    C: CodeHashReader,
    E: EventSink,
{
    fn send_origin_message(
        &self,
        ctx: &CallContext,
        data: &[u8],
    ) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::OriginMessage {
                data: data.to_vec(),
            },
        )
    }

    fn send_message(&self, ctx: &CallContext, data: &[u8]) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::Message {
                data: data.to_vec(),
            },
        )
    }

    fn deploy_contract_pair(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        payment: U256,
        init_data: &[u8],
    ) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::PairedDeploy {
                max_gas,
                gas_price_bid,
                payment,
                init_data: init_data.to_vec(),
            },
        )
    }

    fn send_funded_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        sequence_number: U256,
        destination: Address,
        data: &[u8],
    ) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::FundedTransaction {
                max_gas,
                gas_price_bid,
                sequence_number,
                destination,
                data: data.to_vec(),
            },
        )
    }

    fn send_funded_contract_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        destination: Address,
        data: &[u8],
    ) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::FundedContractTransaction {
                max_gas,
                gas_price_bid,
                destination,
                data: data.to_vec(),
            },
        )
    }

    fn deposit(&self, ctx: &CallContext, destination: Address) -> Result<Position, InboxError> {
        self.dispatch(ctx, InboxRequest::Deposit { destination })
    }

    fn transfer_value(
        &self,
        ctx: &CallContext,
        destination: Address,
    ) -> Result<Position, InboxError> {
        self.dispatch(ctx, InboxRequest::ValueTransfer { destination })
    }

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
    ) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::UnsignedTransaction {
                max_gas,
                gas_price_bid,
                sequence_number,
                destination,
                amount,
                data: data.to_vec(),
            },
        )
    }

    fn send_contract_transaction(
        &self,
        ctx: &CallContext,
        max_gas: U256,
        gas_price_bid: U256,
        destination: Address,
        amount: U256,
        data: &[u8],
    ) -> Result<Position, InboxError> {
        self.dispatch(
            ctx,
            InboxRequest::ContractTransaction {
                max_gas,
                gas_price_bid,
                destination,
                amount,
                data: data.to_vec(),
            },
        )
    }
}
