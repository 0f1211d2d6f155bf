//! # Registration Simulator
//!
//! Implements [`RegistrationApi`] on top of a [`DonorLedger`], an injected
//! random source and an injected [`Scheduler`].
//!
//! Once a record is in the ledger, its validation runs on a spawned task.
//! Dropping the `submit` future after that point still leaves the record
//! validated and the consent request published.

use async_trait::async_trait;
use ll_04_ledger_store::{
    DonorDetails, LedgerRecord, RecordStatus, RECORD_ID_HEX_LEN, TX_HASH_HEX_LEN,
};
use parking_lot::Mutex;
use rand::{Rng, RngCore};
use shared_bus::{ConsentSource, EventPublisher, LifeLinkEvent};
use shared_types::{random_hex, Scheduler, SimulationTimings, TimeSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn, Instrument};

use crate::domain::{RegistrationError, RegistrationForm, RegistrationStatus, SubmitState};
use crate::ports::inbound::RegistrationApi;
use crate::ports::outbound::DonorLedger;

/// Address every simulated wallet connection yields.
pub const PLACEHOLDER_WALLET: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

/// Probability that the simulated contract accepts a registration.
pub const DEFAULT_VALIDATION_PROBABILITY: f64 = 0.9;

#[derive(Debug, Default)]
struct PageState {
    wallet: Option<String>,
    submit: SubmitState,
    in_flight: bool,
}

/// Clears the in-flight flag however the submission ends, including when
/// the caller drops the future.
struct InFlightGuard<'a> {
    state: &'a Mutex<PageState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().in_flight = false;
    }
}

pub struct RegistrationSimulator<R, S, T>
where
    R: RngCore + Send,
    S: Scheduler + 'static,
    T: TimeSource,
{
    state: Mutex<PageState>,
    rng: Mutex<R>,
    scheduler: Arc<S>,
    time_source: T,
    wallet_delay: Duration,
    validation_delay: Duration,
    consent_delay: Duration,
    validation_probability: f64,
    ledger: Arc<dyn DonorLedger>,
    publisher: Arc<dyn EventPublisher>,
}

impl<R, S, T> RegistrationSimulator<R, S, T>
where
    R: RngCore + Send,
    S: Scheduler + 'static,
    T: TimeSource,
{
    pub fn new(
        rng: R,
        scheduler: S,
        time_source: T,
        ledger: Arc<dyn DonorLedger>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        let timings = SimulationTimings::default();
        Self {
            state: Mutex::new(PageState::default()),
            rng: Mutex::new(rng),
            scheduler: Arc::new(scheduler),
            time_source,
            wallet_delay: timings.wallet_connect,
            validation_delay: timings.registration_validation,
            consent_delay: timings.consent_prompt,
            validation_probability: DEFAULT_VALIDATION_PROBABILITY,
            ledger,
            publisher,
        }
    }

    pub fn with_timings(mut self, timings: &SimulationTimings) -> Self {
        self.wallet_delay = timings.wallet_connect;
        self.validation_delay = timings.registration_validation;
        self.consent_delay = timings.consent_prompt;
        self
    }

    pub fn with_validation_probability(mut self, probability: f64) -> Self {
        self.validation_probability = probability.clamp(0.0, 1.0);
        self
    }

    fn reject(&self, error: RegistrationError) -> RegistrationError {
        ll_telemetry::REGISTRATIONS
            .with_label_values(&[error.outcome()])
            .inc();
        error
    }

    fn fabricate_record(&self, donor: DonorDetails, wallet: String) -> LedgerRecord {
        let mut rng = self.rng.lock();
        LedgerRecord {
            id: random_hex(&mut *rng, RECORD_ID_HEX_LEN),
            created_at: self.time_source.now(),
            donor,
            wallet_address: wallet,
            tx_hash: random_hex(&mut *rng, TX_HASH_HEX_LEN),
            status: RecordStatus::Pending,
            match_description: None,
        }
    }
}

/// Announce an accepted record, then validate it after `delay` and ask for
/// consent.
async fn validate_after_delay<S: Scheduler>(
    scheduler: Arc<S>,
    delay: Duration,
    ledger: Arc<dyn DonorLedger>,
    publisher: Arc<dyn EventPublisher>,
    record_id: String,
    tx_hash: String,
) -> Result<LedgerRecord, RegistrationError> {
    publisher
        .publish(LifeLinkEvent::RegistrationAccepted {
            record_id: record_id.clone(),
            tx_hash,
        })
        .await;

    ll_telemetry::observe_delay("consent_prompt", delay);
    scheduler.delay(delay).await;

    let validated = ledger.mark_validated(&record_id)?;
    debug!(record = %record_id, "Record validated, requesting consent");

    publisher
        .publish(LifeLinkEvent::RecordValidated {
            record_id: record_id.clone(),
        })
        .await;
    publisher
        .publish(LifeLinkEvent::ConsentRequested(ConsentSource::Registration {
            record_id,
        }))
        .await;

    Ok(validated)
}

#[async_trait]
impl<R, S, T> RegistrationApi for RegistrationSimulator<R, S, T>
where
    R: RngCore + Send,
    S: Scheduler + 'static,
    T: TimeSource,
{
    async fn connect_wallet(&self) -> String {
        let existing = self.state.lock().wallet.clone();
        if let Some(address) = existing {
            return address;
        }

        ll_telemetry::observe_delay("wallet_connect", self.wallet_delay);
        self.scheduler.delay(self.wallet_delay).await;

        let address = PLACEHOLDER_WALLET.to_string();
        self.state.lock().wallet = Some(address.clone());
        ll_telemetry::WALLET_CONNECTIONS.inc();
        info!(wallet = %address, "Wallet connected");

        self.publisher
            .publish(LifeLinkEvent::WalletConnected {
                address: address.clone(),
            })
            .await;
        address
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    async fn submit(&self, form: RegistrationForm) -> Result<LedgerRecord, RegistrationError> {
        let (donor, wallet) = {
            let mut state = self.state.lock();
            let wallet = state
                .wallet
                .clone()
                .ok_or(RegistrationError::WalletNotConnected)
                .map_err(|e| self.reject(e))?;
            let donor = form.validate().map_err(|e| self.reject(e))?;
            if state.in_flight {
                return Err(self.reject(RegistrationError::SubmissionInFlight));
            }
            state.in_flight = true;
            (donor, wallet)
        };
        let _guard = InFlightGuard { state: &self.state };

        ll_telemetry::observe_delay("registration_validation", self.validation_delay);
        self.scheduler.delay(self.validation_delay).await;

        let accepted = self.rng.lock().gen_bool(self.validation_probability);
        if !accepted {
            self.state.lock().submit = SubmitState::Error;
            warn!("Simulated contract validation rejected the registration");
            let error = self.reject(RegistrationError::ContractRejected);
            self.publisher
                .publish(LifeLinkEvent::RegistrationRejected {
                    reason: error.to_string(),
                })
                .await;
            return Err(error);
        }

        let record = self.fabricate_record(donor, wallet);
        let record_id = record.id.clone();
        let tx_hash = record.tx_hash.clone();
        self.ledger.record_pending(record);
        self.state.lock().submit = SubmitState::Success;
        ll_telemetry::REGISTRATIONS
            .with_label_values(&["accepted"])
            .inc();
        info!(record = %record_id, "Registration accepted");

        // No await between appending the record and handing it off.
        let validation = tokio::spawn(
            validate_after_delay(
                self.scheduler.clone(),
                self.consent_delay,
                self.ledger.clone(),
                self.publisher.clone(),
                record_id,
                tx_hash,
            )
            .in_current_span(),
        );

        validation
            .await
            .map_err(|_| RegistrationError::ValidationInterrupted)?
    }

    fn reset(&self) -> SubmitState {
        let mut state = self.state.lock();
        state.submit = SubmitState::Idle;
        state.submit
    }

    fn status(&self) -> RegistrationStatus {
        let state = self.state.lock();
        RegistrationStatus {
            wallet_address: state.wallet.clone(),
            submit_state: state.submit,
            submitting: state.in_flight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LedgerStoreAdapter;
    use ll_04_ledger_store::{LedgerApi, LedgerStore};
    use rand::rngs::mock::StepRng;
    use shared_bus::{EventFilter, InMemoryEventBus};
    use shared_types::{FixedTimeSource, InstantScheduler, TokioScheduler};

    struct Harness {
        simulator: RegistrationSimulator<StepRng, Arc<InstantScheduler>, FixedTimeSource>,
        scheduler: Arc<InstantScheduler>,
        store: Arc<LedgerStore>,
        bus: Arc<InMemoryEventBus>,
    }

    fn harness(rng: StepRng) -> Harness {
        let scheduler = Arc::new(InstantScheduler::new());
        let store = Arc::new(LedgerStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let simulator = RegistrationSimulator::new(
            rng,
            scheduler.clone(),
            FixedTimeSource::new(1_700_000_000_000),
            Arc::new(LedgerStoreAdapter::new(store.clone())),
            bus.clone(),
        );
        Harness {
            simulator,
            scheduler,
            store,
            bus,
        }
    }

    fn accepting() -> StepRng {
        StepRng::new(0, 0)
    }

    fn rejecting() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            name: "Jane Doe".into(),
            age: "30".into(),
            blood_group: "A+".into(),
            organs: vec!["Kidney".into()],
            city: "Boston".into(),
        }
    }

    #[tokio::test]
    async fn test_connect_wallet_is_idempotent() {
        let h = harness(accepting());

        assert_eq!(h.simulator.connect_wallet().await, PLACEHOLDER_WALLET);
        assert_eq!(h.simulator.connect_wallet().await, PLACEHOLDER_WALLET);
        assert_eq!(h.scheduler.requested(), vec![Duration::from_millis(1000)]);
        assert!(h.simulator.status().wallet_connected());
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let h = harness(accepting());
        h.simulator.connect_wallet().await;
        let mut sub = h.bus.subscribe(EventFilter::all());

        let record = h.simulator.submit(complete_form()).await.unwrap();

        assert_eq!(record.status, RecordStatus::Validated);
        assert_eq!(record.id.len(), RECORD_ID_HEX_LEN);
        assert_eq!(record.tx_hash.len(), TX_HASH_HEX_LEN);
        assert_eq!(record.wallet_address, PLACEHOLDER_WALLET);
        assert_eq!(record.created_at, 1_700_000_000_000);

        let records = h.store.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], record);

        assert_eq!(h.simulator.status().submit_state, SubmitState::Success);
        assert!(!h.simulator.status().submitting);
        assert_eq!(
            h.scheduler.requested(),
            vec![
                Duration::from_millis(1000),
                Duration::from_millis(1500),
                Duration::from_millis(2000)
            ]
        );

        let events = sub.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], LifeLinkEvent::RegistrationAccepted { .. }));
        assert_eq!(
            events[1],
            LifeLinkEvent::RecordValidated {
                record_id: record.id.clone()
            }
        );
        assert_eq!(
            events[2],
            LifeLinkEvent::ConsentRequested(ConsentSource::Registration {
                record_id: record.id
            })
        );
    }

    #[tokio::test]
    async fn test_wallet_checked_before_fields() {
        let h = harness(accepting());
        assert_eq!(
            h.simulator.submit(RegistrationForm::default()).await,
            Err(RegistrationError::WalletNotConnected)
        );
    }

    #[tokio::test]
    async fn test_missing_field_has_no_side_effects() {
        let h = harness(accepting());
        h.simulator.connect_wallet().await;
        let mut sub = h.bus.subscribe(EventFilter::all());

        let mut form = complete_form();
        form.city.clear();

        assert_eq!(
            h.simulator.submit(form).await,
            Err(RegistrationError::MissingField("city"))
        );
        assert_eq!(h.store.len(), 2);
        assert_eq!(h.simulator.status().submit_state, SubmitState::Idle);
        assert!(sub.drain().is_empty());
        assert_eq!(h.scheduler.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_contract_rejection_leaves_ledger_untouched() {
        let h = harness(rejecting());
        h.simulator.connect_wallet().await;
        let mut sub = h.bus.subscribe(EventFilter::all());

        assert_eq!(
            h.simulator.submit(complete_form()).await,
            Err(RegistrationError::ContractRejected)
        );
        assert_eq!(h.store.len(), 2);
        assert_eq!(h.simulator.status().submit_state, SubmitState::Error);
        assert!(matches!(
            sub.drain().as_slice(),
            [LifeLinkEvent::RegistrationRejected { .. }]
        ));

        assert_eq!(h.simulator.reset(), SubmitState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submission_while_in_flight() {
        let store = Arc::new(LedgerStore::new());
        let simulator = Arc::new(RegistrationSimulator::new(
            accepting(),
            TokioScheduler,
            FixedTimeSource::new(0),
            Arc::new(LedgerStoreAdapter::new(store.clone())),
            Arc::new(InMemoryEventBus::new()),
        ));
        simulator.connect_wallet().await;

        let first = tokio::spawn({
            let simulator = simulator.clone();
            async move { simulator.submit(complete_form()).await }
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(simulator.status().submitting);
        assert_eq!(
            simulator.submit(complete_form()).await,
            Err(RegistrationError::SubmissionInFlight)
        );

        assert!(first.await.unwrap().is_ok());
        assert!(!simulator.status().submitting);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_completes_after_caller_drops_submission() {
        let store = Arc::new(LedgerStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let simulator = Arc::new(RegistrationSimulator::new(
            accepting(),
            TokioScheduler,
            FixedTimeSource::new(0),
            Arc::new(LedgerStoreAdapter::new(store.clone())),
            bus.clone(),
        ));
        simulator.connect_wallet().await;

        let submission = tokio::spawn({
            let simulator = simulator.clone();
            async move { simulator.submit(complete_form()).await }
        });

        // Accepted after 1500 ms; validation is still 2000 ms away.
        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(store.records()[0].status, RecordStatus::Pending);

        submission.abort();
        assert!(submission.await.unwrap_err().is_cancelled());
        assert!(!simulator.status().submitting);

        tokio::time::sleep(Duration::from_secs(30)).await;
        let record = store.records()[0].clone();
        assert_eq!(record.status, RecordStatus::Validated);
        assert_eq!(simulator.status().submit_state, SubmitState::Success);
        assert!(sub
            .drain()
            .contains(&LifeLinkEvent::ConsentRequested(ConsentSource::Registration {
                record_id: record.id
            })));
    }
}
