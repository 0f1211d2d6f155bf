//! # Consent Simulator
//!
//! Drives [`ConsentStage`] through the simulated contract call. Waiting goes
//! through the injected [`Scheduler`]; a `watch` channel carries dismissals
//! so a pending approval stops waiting as soon as the dialog closes.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::{Rng, RngCore};
use shared_bus::{ConsentSource, EventPublisher, LifeLinkEvent};
use shared_types::{Scheduler, SimulationTimings};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::domain::{ConsentError, ConsentEvent, ConsentOutcome, ConsentStage};
use crate::ports::inbound::ConsentApi;

/// Probability that a simulated consent recording succeeds.
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.8;

#[derive(Debug, Default)]
struct DialogState {
    stage: ConsentStage,
    /// Bumped on every approve and dismiss; a pending approval only writes
    /// back if the counter still matches the value it started with.
    attempt: u64,
    request: Option<ConsentSource>,
}

/// Closes the dialog if an approval is abandoned mid-flight.
///
/// When the `approve` future is dropped while its attempt is still current
/// and the dialog is processing or showing success, the dialog returns to
/// `Initial` instead of staying stuck.
struct ApprovalGuard<'a> {
    state: &'a Mutex<DialogState>,
    attempt: u64,
}

impl Drop for ApprovalGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.attempt == self.attempt && state.stage.is_in_flight() {
            state.stage = ConsentStage::Initial;
            state.attempt += 1;
            debug!("Abandoned consent approval reset the dialog");
        }
    }
}

pub struct ConsentSimulator<R, S>
where
    R: RngCore + Send,
    S: Scheduler,
{
    state: Mutex<DialogState>,
    rng: Mutex<R>,
    scheduler: S,
    processing_delay: Duration,
    display_delay: Duration,
    success_probability: f64,
    dismissals: watch::Sender<u64>,
    publisher: Arc<dyn EventPublisher>,
}

impl<R, S> ConsentSimulator<R, S>
where
    R: RngCore + Send,
    S: Scheduler,
{
    pub fn new(rng: R, scheduler: S, publisher: Arc<dyn EventPublisher>) -> Self {
        let timings = SimulationTimings::default();
        let (dismissals, _) = watch::channel(0);
        Self {
            state: Mutex::new(DialogState::default()),
            rng: Mutex::new(rng),
            scheduler,
            processing_delay: timings.consent_processing,
            display_delay: timings.consent_success_display,
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
            dismissals,
            publisher,
        }
    }

    /// Take the processing and success display delays from `timings`.
    pub fn with_timings(mut self, timings: &SimulationTimings) -> Self {
        self.processing_delay = timings.consent_processing;
        self.display_delay = timings.consent_success_display;
        self
    }

    pub fn with_success_probability(mut self, probability: f64) -> Self {
        self.success_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Wait for `delay` unless the dialog is dismissed first.
    ///
    /// Returns `false` when dismissed.
    async fn wait_or_dismissed(&self, delay: Duration, dismissed: &mut watch::Receiver<u64>) -> bool {
        tokio::select! {
            biased;
            _ = dismissed.changed() => false,
            _ = self.scheduler.delay(delay) => true,
        }
    }

    /// Apply `event` only if `attempt` is still the current attempt.
    fn advance_attempt(&self, attempt: u64, event: ConsentEvent) -> Option<ConsentStage> {
        let mut state = self.state.lock();
        if state.attempt != attempt {
            return None;
        }
        let next = state.stage.transition(event).ok()?;
        state.stage = next;
        Some(next)
    }

    fn finish(&self, outcome: ConsentOutcome) -> ConsentOutcome {
        ll_telemetry::CONSENT_ATTEMPTS
            .with_label_values(&[outcome.as_str()])
            .inc();
        outcome
    }
}

#[async_trait]
impl<R, S> ConsentApi for ConsentSimulator<R, S>
where
    R: RngCore + Send,
    S: Scheduler,
{
    fn open(&self, source: ConsentSource) -> Result<(), ConsentError> {
        let mut state = self.state.lock();
        state.stage = state.stage.transition(ConsentEvent::Open)?;
        debug!(source = ?source, "Consent dialog opened");
        state.request = Some(source);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn approve(&self) -> Result<ConsentOutcome, ConsentError> {
        let mut dismissed = self.dismissals.subscribe();
        let attempt = {
            let mut state = self.state.lock();
            state.stage = state.stage.transition(ConsentEvent::Approve)?;
            state.attempt += 1;
            state.attempt
        };
        let _guard = ApprovalGuard {
            state: &self.state,
            attempt,
        };

        ll_telemetry::observe_delay("consent_processing", self.processing_delay);
        if !self
            .wait_or_dismissed(self.processing_delay, &mut dismissed)
            .await
        {
            return Ok(self.finish(ConsentOutcome::Cancelled));
        }

        // Draw under the state lock so a concurrent dismiss cannot slip in
        // between the check and the write.
        let approved = {
            let mut state = self.state.lock();
            if state.attempt != attempt || state.stage != ConsentStage::Processing {
                None
            } else {
                let approved = self.rng.lock().gen_bool(self.success_probability);
                let event = if approved {
                    ConsentEvent::ProcessingSucceeded
                } else {
                    ConsentEvent::ProcessingFailed
                };
                state.stage = state.stage.transition(event)?;
                Some(approved)
            }
        };

        let Some(approved) = approved else {
            return Ok(self.finish(ConsentOutcome::Cancelled));
        };

        self.publisher
            .publish(LifeLinkEvent::ConsentRecorded { approved })
            .await;

        if !approved {
            warn!("Simulated consent recording failed");
            return Ok(self.finish(ConsentOutcome::Rejected));
        }

        info!("Consent recorded");
        ll_telemetry::observe_delay("consent_display", self.display_delay);
        if !self
            .wait_or_dismissed(self.display_delay, &mut dismissed)
            .await
        {
            return Ok(self.finish(ConsentOutcome::Cancelled));
        }

        match self.advance_attempt(attempt, ConsentEvent::DisplayElapsed) {
            Some(_) => Ok(self.finish(ConsentOutcome::Approved)),
            None => Ok(self.finish(ConsentOutcome::Cancelled)),
        }
    }

    fn retry(&self) -> Result<ConsentStage, ConsentError> {
        let mut state = self.state.lock();
        state.stage = state.stage.transition(ConsentEvent::Retry)?;
        Ok(state.stage)
    }

    async fn dismiss(&self) -> bool {
        let was_in_flight = {
            let mut state = self.state.lock();
            let in_flight = state.stage.is_in_flight();
            // Dismiss is accepted from every stage.
            state.stage = state
                .stage
                .transition(ConsentEvent::Dismiss)
                .unwrap_or_default();
            state.attempt += 1;
            state.request = None;
            in_flight
        };

        if was_in_flight {
            self.dismissals.send_modify(|n| *n += 1);
            debug!("In-flight consent approval dismissed");
            self.publisher.publish(LifeLinkEvent::ConsentDismissed).await;
        }

        was_in_flight
    }

    fn stage(&self) -> ConsentStage {
        self.state.lock().stage
    }

    fn request(&self) -> Option<ConsentSource> {
        self.state.lock().request.clone()
    }
}
