//! # Event Routing
//!
//! One task subscribes to every bus event. Each event is logged as the
//! audit trail; consent requests additionally open the consent dialog.
//!
//! ```text
//! Registration(3) ──ConsentRequested{Registration}──┐
//!                                                   ├──→ Consent(2).open()
//! MatchSearch(1) ──ConsentRequested{MatchRequest}───┘
//! ```

use std::sync::Arc;

use ll_02_consent_flow::ConsentApi;
use shared_bus::{EventFilter, InMemoryEventBus, LifeLinkEvent, Subscription};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the router did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    Logged,
    ConsentOpened,
    ConsentBusy,
}

/// Handle a single event.
pub fn route_event(consent: &dyn ConsentApi, event: &LifeLinkEvent) -> RouteAction {
    info!(
        topic = ?event.topic(),
        source = event.source_subsystem(),
        ?event,
        "Event"
    );

    match event {
        LifeLinkEvent::ConsentRequested(source) => match consent.open(source.clone()) {
            Ok(()) => {
                debug!(?source, "Consent dialog opened");
                RouteAction::ConsentOpened
            }
            Err(e) => {
                warn!(error = %e, ?source, "Consent dialog busy, request dropped");
                RouteAction::ConsentBusy
            }
        },
        _ => RouteAction::Logged,
    }
}

async fn run(
    mut subscription: Subscription,
    consent: Arc<dyn ConsentApi>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            event = subscription.recv() => match event {
                Some(event) => {
                    route_event(consent.as_ref(), &event);
                }
                None => break,
            },
        }
    }
    debug!("Event router stopped");
}

/// Subscribe to `bus` and route events until `shutdown` flips.
pub fn spawn_event_router(
    bus: &InMemoryEventBus,
    consent: Arc<dyn ConsentApi>,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let subscription = bus.subscribe(EventFilter::all());
    debug!(subscribers = bus.subscriber_count(), "Event router subscribed");
    tokio::spawn(run(subscription, consent, shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_02_consent_flow::{ConsentSimulator, ConsentStage};
    use rand::rngs::mock::StepRng;
    use shared_bus::{ConsentSource, EventPublisher, NoopPublisher};
    use shared_types::InstantScheduler;
    use std::time::Duration;

    fn consent() -> Arc<ConsentSimulator<StepRng, InstantScheduler>> {
        Arc::new(ConsentSimulator::new(
            StepRng::new(0, 0),
            InstantScheduler::new(),
            Arc::new(NoopPublisher),
        ))
    }

    #[test]
    fn test_consent_request_opens_dialog() {
        let consent = consent();
        let source = ConsentSource::Registration {
            record_id: "1a2b".into(),
        };
        let action = route_event(
            consent.as_ref(),
            &LifeLinkEvent::ConsentRequested(source.clone()),
        );
        assert_eq!(action, RouteAction::ConsentOpened);
        assert_eq!(consent.request(), Some(source));
        assert_eq!(consent.stage(), ConsentStage::Initial);
    }

    #[test]
    fn test_other_events_are_logged_only() {
        let consent = consent();
        let action = route_event(consent.as_ref(), &LifeLinkEvent::ThemeChanged { dark: true });
        assert_eq!(action, RouteAction::Logged);
        assert_eq!(consent.request(), None);
    }

    #[tokio::test]
    async fn test_router_task_follows_bus_and_stops() {
        let bus = InMemoryEventBus::new();
        let consent = consent();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_event_router(&bus, consent.clone(), shutdown_rx);

        bus.publish(LifeLinkEvent::ConsentRequested(ConsentSource::MatchRequest {
            candidate_id: "donor-1-0".into(),
        }))
        .await;

        for _ in 0..100 {
            if consent.request().is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(matches!(
            consent.request(),
            Some(ConsentSource::MatchRequest { .. })
        ));

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
