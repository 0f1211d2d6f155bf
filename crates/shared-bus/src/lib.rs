//! # Shared Bus - Event Bus for Inter-Subsystem Communication
//!
//! Simulated flows finish after a delay; they report late outcomes (record
//! validated, consent dialog requested, consent recorded) by publishing on
//! this bus instead of calling back into the caller.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Registration │                    │ API / Runtime│
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

pub use events::{subsystem_ids, ConsentSource, EventFilter, EventTopic, LifeLinkEvent};
pub use publisher::{EventPublisher, InMemoryEventBus, NoopPublisher};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(DEFAULT_CHANNEL_CAPACITY, 1000);
    }
}
