//! # Inbox Integration Flows
//!
//! End-to-end submissions through `InboxApi` against the in-memory
//! sequencer, account state and event sinks.
//!
//! ## Flows Tested:
//!
//! 1. **Encoding**: exact payload bytes and fingerprints for funded kinds
//! 2. **Access control**: origin-only and contract-only entry points
//! 3. **Value conservation**: attached value reaches the sequencer unchanged
//! 4. **Atomicity**: a rejecting sequencer leaves no event and moves no value

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use primitive_types::U256;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use qc_18_inbox::{
        fingerprint, Address, BroadcastEventSink, CallContext, Hash, InMemoryAccounts,
        InMemoryEventLog, InMemorySequencer, InboxApi, InboxConfig, InboxError, InboxEvent,
        InboxRequest, InboxService, MessageKind, Position, SequencerError,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type LoggedInbox = InboxService<InMemorySequencer, InMemoryAccounts, InMemoryEventLog>;

    struct Harness {
        sequencer: Arc<InMemorySequencer>,
        accounts: Arc<InMemoryAccounts>,
        events: Arc<InMemoryEventLog>,
        inbox: LoggedInbox,
    }

    fn harness() -> Harness {
        harness_from(InMemorySequencer::new())
    }

    fn harness_from(sequencer: InMemorySequencer) -> Harness {
        let sequencer = Arc::new(sequencer);
        let accounts = Arc::new(InMemoryAccounts::new());
        let events = Arc::new(InMemoryEventLog::new());
        let inbox = InboxService::new(
            Arc::clone(&sequencer),
            Arc::clone(&accounts),
            Arc::clone(&events),
            InboxConfig::default(),
        );
        Harness {
            sequencer,
            accounts,
            events,
            inbox,
        }
    }

    fn alice() -> Address {
        Address::new([0xA1; 20])
    }

    fn router() -> Address {
        Address::new([0xEE; 20])
    }

    fn destination() -> Address {
        Address::new([0xD0; 20])
    }

    fn hash_from_hex(raw: &str) -> Hash {
        let bytes: [u8; 32] = hex::decode(raw).unwrap().try_into().unwrap();
        Hash::new(bytes)
    }

    // =============================================================================
    // ENCODING
    // =============================================================================

    #[test]
    fn test_deposit_payload_and_fingerprint() {
        let h = harness();
        let ctx = CallContext::direct(alice()).with_value(U256::from(1000));

        let position = h.inbox.deposit(&ctx, destination()).unwrap();
        assert_eq!(position, 0);

        let expected_payload = hex::decode(concat!(
            "01",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "000000000000000000000000d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0",
            "00000000000000000000000000000000000000000000000000000000000003e8",
        ))
        .unwrap();

        let accepted = h.sequencer.accepted();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].kind.tag(), 7);
        assert_eq!(accepted[0].sender, alice());
        assert_eq!(accepted[0].value, U256::from(1000));
        assert_eq!(
            accepted[0].fingerprint,
            hash_from_hex("157e48c9c6475fe13a4ab5effbd78adbb586bce0509989adaf5a357c6503875f")
        );

        assert_eq!(
            h.events.events(),
            vec![InboxEvent::MessageDelivered {
                position: 0,
                payload: expected_payload,
            }]
        );
    }

    #[test]
    fn test_value_transfer_fingerprint() {
        let h = harness();
        let ctx = CallContext::direct(alice()).with_value(U256::from(1000));

        h.inbox.transfer_value(&ctx, destination()).unwrap();

        let accepted = &h.sequencer.accepted()[0];
        assert_eq!(accepted.kind, MessageKind::ValueTransfer);
        assert_eq!(
            accepted.fingerprint,
            hash_from_hex("a0c2e8ec3e4641b84845890bccc6458324bcc284f53eeee1eb10a05fba45c4b5")
        );
        assert_eq!(h.events.events()[0].payload().map(<[u8]>::len), Some(64));
    }

    #[test]
    fn test_identical_messages_share_fingerprint() {
        let h = harness();
        let ctx = CallContext::direct(alice());

        let first = h.inbox.send_message(&ctx, b"hello").unwrap();
        let second = h.inbox.send_message(&ctx, b"hello").unwrap();
        assert_eq!((first, second), (0, 1));

        let expected =
            hash_from_hex("1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8");
        for accepted in h.sequencer.accepted() {
            assert_eq!(accepted.fingerprint, expected);
        }
    }

    #[test]
    fn test_every_entry_point_uses_its_kind() {
        let h = harness();
        h.accounts.deploy_code(router(), &[0x60, 0x01]);

        let direct = CallContext::direct(alice());
        let funded = direct.with_value(U256::from(10));
        let from_router = CallContext::forwarded(router(), alice());
        let one = U256::one();

        h.inbox.send_origin_message(&direct, b"o").unwrap();
        h.inbox.send_message(&direct, b"m").unwrap();
        h.inbox
            .deploy_contract_pair(&from_router, one, one, one, b"init")
            .unwrap();
        h.inbox
            .send_funded_transaction(&funded, one, one, one, destination(), b"f")
            .unwrap();
        h.inbox
            .send_funded_contract_transaction(&funded, one, one, destination(), b"c")
            .unwrap();
        h.inbox.deposit(&funded, destination()).unwrap();
        h.inbox.transfer_value(&funded, destination()).unwrap();
        h.inbox
            .send_unsigned_transaction(&direct, one, one, one, destination(), one, b"u")
            .unwrap();
        h.inbox
            .send_contract_transaction(&direct, one, one, destination(), one, b"k")
            .unwrap();

        let tags: Vec<u8> = h
            .sequencer
            .accepted()
            .iter()
            .map(|m| m.kind.tag())
            .collect();
        assert_eq!(tags, vec![3, 3, 5, 7, 7, 7, 0, 3, 3]);

        // Only the origin message omits its payload.
        let echoed: Vec<bool> = h
            .events
            .events()
            .iter()
            .map(|e| e.payload().is_some())
            .collect();
        assert_eq!(
            echoed,
            vec![false, true, true, true, true, true, true, true, true]
        );
    }

    #[test]
    fn test_json_request_matches_direct_call() {
        let h = harness();
        let ctx = CallContext::direct(alice()).with_value(U256::from(1000));

        let request: InboxRequest = serde_json::from_str(
            r#"{"type":"deposit","destination":"0xd0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0"}"#,
        )
        .unwrap();
        h.inbox.submit(&ctx, request).unwrap();
        h.inbox.deposit(&ctx, destination()).unwrap();

        let accepted = h.sequencer.accepted();
        assert_eq!(accepted[0].fingerprint, accepted[1].fingerprint);
        assert_eq!(
            h.events.events()[0].payload(),
            h.events.events()[1].payload()
        );
    }

    // =============================================================================
    // ACCESS CONTROL
    // =============================================================================

    #[test]
    fn test_origin_message_only_from_originator() {
        let h = harness();

        let direct = h
            .inbox
            .send_origin_message(&CallContext::direct(alice()), b"calldata");
        assert!(direct.is_ok());

        let forwarded = h
            .inbox
            .send_origin_message(&CallContext::forwarded(router(), alice()), b"calldata");
        assert_eq!(forwarded, Err(InboxError::OriginOnly));

        assert_eq!(h.sequencer.accepted().len(), 1);
        assert_eq!(h.events.len(), 1);
    }

    #[test]
    fn test_paired_deploy_caller_kind() {
        let h = harness();
        let one = U256::one();
        let init = b"init";
        h.accounts.create_account(alice());

        let direct = CallContext::direct(alice());
        let plain = h.inbox.deploy_contract_pair(&direct, one, one, one, init);
        assert_eq!(plain, Err(InboxError::CallerMustBeContract));

        let unused = CallContext::direct(Address::new([0x42; 20]));
        let missing = h.inbox.deploy_contract_pair(&unused, one, one, one, init);
        assert_eq!(missing, Err(InboxError::CallerMustBeContract));

        h.accounts.deploy_code(router(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        let forwarded = CallContext::forwarded(router(), alice());
        let deployed = h.inbox.deploy_contract_pair(&forwarded, one, one, one, init);
        assert_eq!(deployed, Ok(0));
    }

    #[test]
    fn test_contract_under_construction_reads_as_plain() {
        let h = harness();
        let one = U256::one();
        let factory = Address::new([0xFA; 20]);
        let ctx = CallContext::forwarded(factory, alice());

        h.accounts.begin_construction(factory);
        assert_eq!(
            h.inbox.deploy_contract_pair(&ctx, one, one, one, b""),
            Err(InboxError::CallerMustBeContract)
        );

        h.accounts.deploy_code(factory, &[0x00]);
        let built = h.inbox.deploy_contract_pair(&ctx, one, one, one, b"");
        assert!(built.is_ok());
    }

    // =============================================================================
    // VALUE CONSERVATION & ORDERING
    // =============================================================================

    #[test]
    fn test_value_conservation_randomized() {
        let h = harness();
        let mut rng = StdRng::seed_from_u64(18);
        let mut attached = Vec::new();

        for _ in 0..64 {
            let value = U256::from(rng.gen::<u64>()) * U256::from(rng.gen_range(1u64..1_000));
            let ctx = CallContext::direct(alice()).with_value(value);
            let result = match rng.gen_range(0..4) {
                0 => h.inbox.deposit(&ctx, destination()),
                1 => h.inbox.transfer_value(&ctx, destination()),
                2 => h.inbox.send_funded_transaction(
                    &ctx,
                    U256::from(21_000),
                    U256::one(),
                    U256::from(rng.gen::<u32>()),
                    destination(),
                    b"payload",
                ),
                _ => h.inbox.send_funded_contract_transaction(
                    &ctx,
                    U256::from(21_000),
                    U256::one(),
                    destination(),
                    b"payload",
                ),
            };
            result.unwrap();
            attached.push(value);
        }

        let observed: Vec<U256> = h.sequencer.accepted().iter().map(|m| m.value).collect();
        assert_eq!(observed, attached);

        let total = attached
            .iter()
            .fold(U256::zero(), |acc, value| acc + *value);
        assert_eq!(h.sequencer.balance(), total);
    }

    #[test]
    fn test_positions_strictly_increase() {
        let h = harness_from(InMemorySequencer::starting_at(500));
        let ctx = CallContext::direct(alice());

        let positions: Vec<Position> = (0u8..20)
            .map(|i| h.inbox.send_message(&ctx, &[i]).unwrap())
            .collect();

        assert_eq!(positions.first(), Some(&500));
        assert!(positions.windows(2).all(|w| w[1] == w[0] + 1));
        let event_positions: Vec<Position> =
            h.events.events().iter().map(InboxEvent::position).collect();
        assert_eq!(event_positions, positions);
    }

    // =============================================================================
    // ATOMICITY
    // =============================================================================

    #[test]
    fn test_rejecting_sequencer_is_all_or_nothing() {
        let sequencer = Arc::new(InMemorySequencer::new());
        let sink = Arc::new(BroadcastEventSink::new());
        let mut receiver = sink.subscribe();
        let inbox = InboxService::new(
            Arc::clone(&sequencer),
            Arc::new(InMemoryAccounts::new()),
            Arc::clone(&sink),
            InboxConfig::default(),
        );
        let ctx = CallContext::direct(alice()).with_value(U256::from(1000));

        sequencer.set_rejecting(true);
        let result = inbox.deposit(&ctx, destination());
        assert!(matches!(
            result,
            Err(InboxError::Sequencer(SequencerError::Rejected(_)))
        ));
        assert!(receiver.try_recv().is_err());
        assert!(sequencer.balance().is_zero());
        assert_eq!(sink.events_published(), 0);

        sequencer.set_rejecting(false);
        let position = inbox.deposit(&ctx, destination()).unwrap();
        assert_eq!(position, 0);
        assert_eq!(receiver.try_recv().unwrap().position(), 0);
        assert_eq!(sequencer.balance(), U256::from(1000));
    }

    #[test]
    fn test_precondition_failure_moves_nothing() {
        let h = harness();
        let paid = CallContext::direct(alice()).with_value(U256::from(5));

        assert_eq!(
            h.inbox.send_message(&paid, b"x"),
            Err(InboxError::NotPayable {
                value: U256::from(5)
            })
        );
        assert!(h.sequencer.accepted().is_empty());
        assert!(h.sequencer.balance().is_zero());
        assert!(h.events.is_empty());
    }

    #[test]
    fn test_inbox_behind_trait_object() {
        let h = harness();
        let inbox: Arc<dyn InboxApi> = Arc::new(h.inbox);
        let ctx = CallContext::direct(alice());

        assert_eq!(inbox.send_message(&ctx, b"dyn").unwrap(), 0);
        assert_eq!(h.sequencer.accepted()[0].fingerprint, fingerprint(b"dyn"));
    }

    #[test]
    fn test_delivery_event_json_shape() {
        let h = harness();
        h.inbox
            .send_origin_message(&CallContext::direct(alice()), b"o")
            .unwrap();
        h.inbox
            .send_message(&CallContext::direct(alice()), &[0xAB, 0xCD])
            .unwrap();

        let events = h.events.events();
        let origin = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(
            origin,
            serde_json::json!({"event": "message_delivered_from_origin", "position": 0})
        );
        let echoed = serde_json::to_value(&events[1]).unwrap();
        assert_eq!(
            echoed,
            serde_json::json!({"event": "message_delivered", "position": 1, "payload": "0xabcd"})
        );
    }
}
