//! # Event Publisher
//!
//! Simulators only see [`EventPublisher`]; the runtime owns the concrete
//! [`InMemoryEventBus`] and hands out subscriptions from it.

use crate::events::{EventFilter, LifeLinkEvent};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, trace};

#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish `event`, returning how many subscriptions were listening.
    async fn publish(&self, event: LifeLinkEvent) -> usize;
}

/// Broadcast bus shared by every flow in the process.
///
/// Each subscription buffers up to [`DEFAULT_CHANNEL_CAPACITY`] events; a
/// slower reader skips ahead rather than blocking publishers.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<LifeLinkEvent>,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(DEFAULT_CHANNEL_CAPACITY);
        Self { sender }
    }

    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, "New subscription created");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Live subscriptions, whatever their filter.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: LifeLinkEvent) -> usize {
        let topic = event.topic();
        let source = event.source_subsystem();

        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(?topic, source, receivers, "Event published");
                receivers
            }
            // Nobody is listening; flows publish unconditionally.
            Err(_) => {
                trace!(?topic, source, "Event dropped (no receivers)");
                0
            }
        }
    }
}

/// Publisher that discards everything, for simulators built without a bus.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

#[async_trait]
impl EventPublisher for NoopPublisher {
    async fn publish(&self, _event: LifeLinkEvent) -> usize {
        0
    }
}
