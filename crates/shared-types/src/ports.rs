//! # Outbound Ports
//!
//! Time abstractions every simulator depends on. Production wiring uses the
//! tokio timer and the system clock; tests substitute [`InstantScheduler`]
//! and [`FixedTimeSource`] so flows run without real waiting.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::entities::Timestamp;

/// Deferred continuation after a fixed delay.
///
/// Every "network" or "contract" call in LifeLink is a delay followed by a
/// random draw; the delay half lives behind this trait.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Resolve after `duration` has elapsed on this scheduler's clock.
    async fn delay(&self, duration: Duration);
}

#[async_trait]
impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    async fn delay(&self, duration: Duration) {
        (**self).delay(duration).await
    }
}

/// Scheduler backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Scheduler that resolves immediately and records what was requested.
#[derive(Debug, Default)]
pub struct InstantScheduler {
    requested: Mutex<Vec<Duration>>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in call order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }

    /// Sum of every requested delay (the simulated elapsed time).
    pub fn elapsed(&self) -> Duration {
        self.requested.lock().iter().sum()
    }
}

#[async_trait]
impl Scheduler for InstantScheduler {
    async fn delay(&self, duration: Duration) {
        self.requested.lock().push(duration);
        tokio::task::yield_now().await;
    }
}

/// Wall-clock source for record timestamps.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Manually driven time source.
#[derive(Debug, Default)]
pub struct FixedTimeSource {
    time: AtomicU64,
}

impl FixedTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}
