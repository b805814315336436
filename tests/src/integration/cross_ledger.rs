//! # Cross-Ledger Swap Choreography
//!
//! Two independent escrow instances standing in for two ledgers. One
//! secret, two agreements, and the atomicity argument end to end: either
//! both parties receive the counter-asset, or both recover their own.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use escrow_core::{
        create_hash_lock, generate_random_secret, plan_swap_deadlines, validate_swap_deadlines,
        EscrowApi, EscrowService, InMemoryTokenLedger, ManualClock, SwapConfig,
    };
    use shared_bus::{EscrowEvent, EventFilter, EventTopic, InMemoryEventBus};
    use shared_types::{Address, Secret, Timestamp};

    const ASSET_X: Address = [0xA0u8; 20]; // Lives on ledger 1
    const ASSET_Y: Address = [0xB0u8; 20]; // Lives on ledger 2
    const PARTY_A: Address = [0x11u8; 20];
    const PARTY_B: Address = [0x22u8; 20];
    const ESCROW_1: Address = [0xE1u8; 20];
    const ESCROW_2: Address = [0xE2u8; 20];

    const T0: Timestamp = 1_700_000_000;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// One ledger's worth of infrastructure.
    struct Ledger {
        service: EscrowService<Arc<InMemoryTokenLedger>, Arc<ManualClock>>,
        tokens: Arc<InMemoryTokenLedger>,
        clock: Arc<ManualClock>,
        bus: Arc<InMemoryEventBus>,
    }

    fn ledger(escrow: Address, token: Address, holder: Address) -> Ledger {
        let tokens = Arc::new(InMemoryTokenLedger::new(escrow));
        tokens.mint(token, holder, 1000);
        tokens.approve(token, holder, 1000);

        let clock = Arc::new(ManualClock::new(T0));
        let bus = Arc::new(InMemoryEventBus::new());
        let service = EscrowService::new(tokens.clone(), clock.clone(), bus.clone());

        Ledger {
            service,
            tokens,
            clock,
            bus,
        }
    }

    /// Ledger 1 holds party A's asset X; ledger 2 holds party B's asset Y.
    fn two_ledgers() -> (Ledger, Ledger) {
        (
            ledger(ESCROW_1, ASSET_X, PARTY_A),
            ledger(ESCROW_2, ASSET_Y, PARTY_B),
        )
    }

    // =============================================================================
    // HAPPY PATH: CLAIM PROPAGATES THE SECRET
    // =============================================================================

    #[tokio::test]
    async fn test_full_swap_via_secret_reveal() {
        let (ledger1, ledger2) = two_ledgers();

        // Party A generates the secret and keeps it private for now.
        let secret = generate_random_secret();
        let secret_hash = create_hash_lock(secret.as_bytes());

        // Leg 1: A locks asset X for B on ledger 1, deadline T+5h.
        let id1 = ledger1
            .service
            .create_proposal(PARTY_A, PARTY_B, secret_hash, T0 + 5 * 3600, ASSET_X, 500)
            .await
            .unwrap();

        // Leg 2: B observes the lockup and mirrors it on ledger 2 with the
        // same hash and a shorter deadline, T+3h.
        let lockup = ledger1.bus.history()[0].clone();
        let mirrored_hash = match lockup {
            EscrowEvent::Lockup { secret_hash, .. } => secret_hash,
            other => panic!("expected Lockup event, got {other:?}"),
        };
        let id2 = ledger2
            .service
            .create_proposal(PARTY_B, PARTY_A, mirrored_hash, T0 + 3 * 3600, ASSET_Y, 20)
            .await
            .unwrap();

        // B's relayer watches ledger 2 for the secret reveal.
        let mut watcher = ledger2
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Claim]));

        // A claims leg 2, receiving asset Y and publishing the secret.
        ledger2
            .service
            .withdraw(PARTY_A, id2, secret.expose())
            .await
            .unwrap();

        let revealed: Secret = match timeout(Duration::from_millis(100), watcher.recv())
            .await
            .expect("timeout waiting for claim event")
            .expect("claim event")
        {
            EscrowEvent::Claim { secret, .. } => secret,
            other => panic!("expected Claim event, got {other:?}"),
        };

        // B uses the revealed secret on ledger 1, before T+5h.
        ledger1.clock.set_time(T0 + 4 * 3600);
        ledger1
            .service
            .withdraw(PARTY_B, id1, revealed)
            .await
            .unwrap();

        // Both parties hold the counter-asset.
        assert_eq!(ledger2.tokens.balance_of(ASSET_Y, PARTY_A), 20);
        assert_eq!(ledger1.tokens.balance_of(ASSET_X, PARTY_B), 500);
    }

    #[tokio::test]
    async fn test_secret_discoverable_via_read_accessor() {
        // The pull-based alternative to event watching: a relayer that
        // polls `get_agreement` sees the same revealed secret.
        let (ledger1, ledger2) = two_ledgers();

        let secret = generate_random_secret();
        let secret_hash = create_hash_lock(secret.as_bytes());

        let id1 = ledger1
            .service
            .create_proposal(PARTY_A, PARTY_B, secret_hash, T0 + 5 * 3600, ASSET_X, 500)
            .await
            .unwrap();
        let id2 = ledger2
            .service
            .create_proposal(PARTY_B, PARTY_A, secret_hash, T0 + 3 * 3600, ASSET_Y, 20)
            .await
            .unwrap();

        ledger2
            .service
            .withdraw(PARTY_A, id2, secret.expose())
            .await
            .unwrap();

        let revealed = ledger2
            .service
            .get_agreement(&id2)
            .await
            .unwrap()
            .revealed_secret
            .expect("claimed record exposes the secret");

        assert!(ledger1
            .service
            .withdraw(PARTY_B, id1, revealed)
            .await
            .is_ok());
    }

    // =============================================================================
    // ABANDONED SWAP: BOTH SIDES RECOVER
    // =============================================================================

    #[tokio::test]
    async fn test_abandoned_swap_both_parties_refund() {
        let (ledger1, ledger2) = two_ledgers();

        let secret = generate_random_secret();
        let secret_hash = create_hash_lock(secret.as_bytes());

        let id1 = ledger1
            .service
            .create_proposal(PARTY_A, PARTY_B, secret_hash, T0 + 5 * 3600, ASSET_X, 500)
            .await
            .unwrap();
        let id2 = ledger2
            .service
            .create_proposal(PARTY_B, PARTY_A, secret_hash, T0 + 3 * 3600, ASSET_Y, 20)
            .await
            .unwrap();

        // A never claims. B's window opens first.
        ledger2.clock.set_time(T0 + 3 * 3600);
        ledger2.service.refund(PARTY_B, id2).await.unwrap();

        ledger1.clock.set_time(T0 + 5 * 3600);
        ledger1.service.refund(PARTY_A, id1).await.unwrap();

        // Both parties retain their original asset.
        assert_eq!(ledger1.tokens.balance_of(ASSET_X, PARTY_A), 1000);
        assert_eq!(ledger2.tokens.balance_of(ASSET_Y, PARTY_B), 1000);
        assert_eq!(ledger1.tokens.balance_of(ASSET_X, ESCROW_1), 0);
        assert_eq!(ledger2.tokens.balance_of(ASSET_Y, ESCROW_2), 0);
    }

    // =============================================================================
    // DEADLINE PLANNING
    // =============================================================================

    #[tokio::test]
    async fn test_coordinator_plans_valid_deadlines() {
        let (ledger1, ledger2) = two_ledgers();
        let config = SwapConfig::default();

        let (initiator_deadline, responder_deadline) = plan_swap_deadlines(T0, &config);
        validate_swap_deadlines(initiator_deadline, responder_deadline, &config)
            .expect("planned deadlines must satisfy the ordering invariant");

        let secret = generate_random_secret();
        let secret_hash = create_hash_lock(secret.as_bytes());

        // The planned deadlines are directly usable for both legs.
        let id1 = ledger1
            .service
            .create_proposal(PARTY_A, PARTY_B, secret_hash, initiator_deadline, ASSET_X, 1)
            .await
            .unwrap();
        let id2 = ledger2
            .service
            .create_proposal(PARTY_B, PARTY_A, secret_hash, responder_deadline, ASSET_Y, 1)
            .await
            .unwrap();
        assert_ne!(id1, id2);
    }

    #[tokio::test]
    async fn test_inverted_deadlines_flagged_before_lockup() {
        // The core would happily create both legs with unsafe deadlines;
        // the planning helper is what catches the inversion beforehand.
        let config = SwapConfig::default();
        let result = validate_swap_deadlines(T0 + 3 * 3600, T0 + 5 * 3600, &config);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_relayer_can_watch_claims_as_a_stream() {
        // Same reveal flow, consumed through the stream combinator surface
        // a long-running relayer would use.
        use futures::StreamExt;

        let (_, ledger2) = two_ledgers();

        let secret = generate_random_secret();
        let secret_hash = create_hash_lock(secret.as_bytes());
        let id2 = ledger2
            .service
            .create_proposal(PARTY_B, PARTY_A, secret_hash, T0 + 3 * 3600, ASSET_Y, 20)
            .await
            .unwrap();

        let mut claims = ledger2
            .bus
            .event_stream(EventFilter::topics(vec![EventTopic::Claim]));

        ledger2
            .service
            .withdraw(PARTY_A, id2, secret.expose())
            .await
            .unwrap();

        let event = timeout(Duration::from_millis(100), claims.next())
            .await
            .expect("timeout waiting for claim event")
            .expect("claim event");
        assert_eq!(
            event,
            EscrowEvent::Claim {
                id: id2,
                secret: secret.expose()
            }
        );
    }

    // =============================================================================
    // EVENT LOG AS AUDIT TRAIL
    // =============================================================================

    #[tokio::test]
    async fn test_event_history_tells_the_whole_story() {
        let (ledger1, ledger2) = two_ledgers();

        let secret = generate_random_secret();
        let secret_hash = create_hash_lock(secret.as_bytes());

        let id1 = ledger1
            .service
            .create_proposal(PARTY_A, PARTY_B, secret_hash, T0 + 5 * 3600, ASSET_X, 500)
            .await
            .unwrap();
        let id2 = ledger2
            .service
            .create_proposal(PARTY_B, PARTY_A, secret_hash, T0 + 3 * 3600, ASSET_Y, 20)
            .await
            .unwrap();

        ledger2
            .service
            .withdraw(PARTY_A, id2, secret.expose())
            .await
            .unwrap();
        ledger1
            .service
            .withdraw(PARTY_B, id1, secret.expose())
            .await
            .unwrap();

        let history1 = ledger1.bus.history();
        let history2 = ledger2.bus.history();

        assert!(matches!(history1[0], EscrowEvent::Lockup { .. }));
        assert!(matches!(history1[1], EscrowEvent::Claim { .. }));
        assert!(matches!(history2[0], EscrowEvent::Lockup { .. }));
        assert!(matches!(history2[1], EscrowEvent::Claim { .. }));

        // Each leg's claim carries the same secret.
        let (s1, s2) = match (&history1[1], &history2[1]) {
            (EscrowEvent::Claim { secret: s1, .. }, EscrowEvent::Claim { secret: s2, .. }) => {
                (*s1, *s2)
            }
            other => panic!("expected two Claim events, got {other:?}"),
        };
        assert_eq!(s1, s2);
    }
}
