//! Timed dashboard notice.

use serde::{Deserialize, Serialize};
use shared_types::SimulationTimings;
use std::time::Duration;

pub const NEW_DONOR_NOTICE: &str = "New donor registered: Sarah Johnson (Los Angeles)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminNotice {
    pub message: String,
}

/// When the notice is on screen, relative to the dashboard mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminNoticeSchedule {
    pub delay: Duration,
    pub duration: Duration,
    pub message: String,
}

impl Default for AdminNoticeSchedule {
    fn default() -> Self {
        Self::from_timings(&SimulationTimings::default())
    }
}

impl AdminNoticeSchedule {
    pub fn from_timings(timings: &SimulationTimings) -> Self {
        Self {
            delay: timings.admin_notice_delay,
            duration: timings.admin_notice_duration,
            message: NEW_DONOR_NOTICE.to_string(),
        }
    }

    /// Shown from `delay` (inclusive) until `delay + duration` (exclusive).
    pub fn visible_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay && elapsed < self.delay.saturating_add(self.duration)
    }

    pub fn notice_at(&self, elapsed: Duration) -> Option<AdminNotice> {
        self.visible_at(elapsed).then(|| AdminNotice {
            message: self.message.clone(),
        })
    }
}
