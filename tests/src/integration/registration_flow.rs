//! # Registration → Ledger → Consent
//!
//! Donor registration (3) writes through the ledger adapter into the ledger
//! store (4), then asks for consent over the bus.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ll_02_consent_flow::{ConsentApi, ConsentSimulator};
    use ll_03_donor_registration::{
        LedgerStoreAdapter, RegistrationApi, RegistrationError, RegistrationForm,
        RegistrationSimulator, SubmitState,
    };
    use ll_04_ledger_store::{seed_records, LedgerApi, LedgerStore, RecordStatus};
    use ll_runtime::wiring::route_event;
    use rand::rngs::mock::StepRng;
    use shared_bus::{ConsentSource, EventFilter, InMemoryEventBus, LifeLinkEvent};
    use shared_types::{FixedTimeSource, InstantScheduler};

    /// Every `gen_bool` succeeds.
    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every `gen_bool` fails.
    fn never() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    struct World {
        bus: Arc<InMemoryEventBus>,
        scheduler: Arc<InstantScheduler>,
        ledger: Arc<LedgerStore>,
        registration: RegistrationSimulator<StepRng, Arc<InstantScheduler>, Arc<FixedTimeSource>>,
        clock: Arc<FixedTimeSource>,
    }

    fn world(rng: StepRng) -> World {
        let bus = Arc::new(InMemoryEventBus::new());
        let scheduler = Arc::new(InstantScheduler::new());
        let ledger = Arc::new(LedgerStore::new());
        let clock = Arc::new(FixedTimeSource::new(1_700_000_000_000));
        let port: Arc<dyn LedgerApi> = ledger.clone();
        World {
            registration: RegistrationSimulator::new(
                rng,
                scheduler.clone(),
                clock.clone(),
                Arc::new(LedgerStoreAdapter::new(port)),
                bus.clone(),
            ),
            bus,
            scheduler,
            ledger,
            clock,
        }
    }

    fn form(name: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.into(),
            age: "42".into(),
            blood_group: "A-".into(),
            organs: vec!["Heart".into(), "Cornea".into()],
            city: "Seattle".into(),
        }
    }

    #[tokio::test]
    async fn test_ledger_grows_newest_first() {
        let w = world(always());
        w.registration.connect_wallet().await;

        for name in ["Ana", "Bo", "Cy"] {
            let record = w.registration.submit(form(name)).await.unwrap();
            assert_eq!(record.status, RecordStatus::Validated);
            assert_eq!(record.donor.name, name);
            w.clock.advance(1_000);
        }

        let records = w.ledger.records();
        assert_eq!(records.len(), 2 + 3);
        let names: Vec<&str> = records[..3].iter().map(|r| r.donor.name.as_str()).collect();
        assert_eq!(names, ["Cy", "Bo", "Ana"]);
        assert!(records[0].created_at > records[1].created_at);
        assert!(records[1].created_at > records[2].created_at);

        // Seed records stay at the tail, in their original order.
        let seeds = seed_records();
        assert_eq!(records[3..], seeds[..]);
    }

    #[tokio::test]
    async fn test_timings_follow_the_fixed_delays() {
        let w = world(always());
        w.registration.connect_wallet().await;
        w.registration.connect_wallet().await;
        w.registration.submit(form("Dee")).await.unwrap();

        assert_eq!(
            w.scheduler.requested(),
            vec![
                Duration::from_millis(1000),
                Duration::from_millis(1500),
                Duration::from_millis(2000),
            ]
        );
    }

    #[tokio::test]
    async fn test_accepted_registration_opens_consent() {
        let w = world(always());
        let consent = ConsentSimulator::new(always(), w.scheduler.clone(), w.bus.clone());
        let mut events = w.bus.subscribe(EventFilter::all());

        w.registration.connect_wallet().await;
        let record = w.registration.submit(form("Eve")).await.unwrap();

        let published = events.drain();
        assert_eq!(published.len(), 4, "{published:?}");
        assert!(matches!(published[0], LifeLinkEvent::WalletConnected { .. }));
        assert!(matches!(
            published[1],
            LifeLinkEvent::RegistrationAccepted { .. }
        ));
        assert!(matches!(published[2], LifeLinkEvent::RecordValidated { .. }));

        for event in &published {
            route_event(&consent, event);
        }
        assert_eq!(
            consent.request(),
            Some(ConsentSource::Registration {
                record_id: record.id
            })
        );
    }

    #[tokio::test]
    async fn test_empty_field_never_reaches_ledger() {
        let w = world(always());
        w.registration.connect_wallet().await;
        let mut events = w.bus.subscribe(EventFilter::all());

        let clears: [fn(&mut RegistrationForm); 5] = [
            |f: &mut RegistrationForm| f.name.clear(),
            |f: &mut RegistrationForm| f.age.clear(),
            |f: &mut RegistrationForm| f.blood_group.clear(),
            |f: &mut RegistrationForm| f.organs.clear(),
            |f: &mut RegistrationForm| f.city.clear(),
        ];
        for clear in clears {
            let mut bad = form("Fay");
            clear(&mut bad);
            let err = w.registration.submit(bad).await.unwrap_err();
            assert!(matches!(err, RegistrationError::MissingField(_)), "{err}");
        }

        assert_eq!(w.ledger.len(), 2);
        assert!(!events
            .drain()
            .iter()
            .any(|e| matches!(e, LifeLinkEvent::ConsentRequested(_))));
    }

    #[tokio::test]
    async fn test_forced_validation_failure_leaves_ledger_alone() {
        let w = world(never());
        w.registration.connect_wallet().await;
        let mut events = w.bus.subscribe(EventFilter::all());

        let err = w.registration.submit(form("Gus")).await.unwrap_err();
        assert_eq!(err, RegistrationError::ContractRejected);
        assert_eq!(w.registration.status().submit_state, SubmitState::Error);
        assert_eq!(w.ledger.len(), 2);

        let published = events.drain();
        assert_eq!(published.len(), 1);
        assert!(matches!(
            published[0],
            LifeLinkEvent::RegistrationRejected { .. }
        ));

        assert_eq!(w.registration.reset(), SubmitState::Idle);
    }
}
