//! # Admin Dashboard Service
//!
//! Holds one generated dataset and the mount time used by the notice.

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::{Mutex, RwLock};
use rand::RngCore;
use shared_types::{TimeSource, Timestamp};
use std::time::Duration;
use tracing::info;

use crate::domain::{AdminCounts, AdminDataset, AdminNoticeSchedule};
use crate::ports::inbound::{AdminApi, AdminView};

struct Mounted {
    dataset: AdminDataset,
    at: Timestamp,
}

pub struct AdminDashboardService<R, T>
where
    R: RngCore + Send,
    T: TimeSource,
{
    mounted: RwLock<Mounted>,
    rng: Mutex<R>,
    time_source: T,
    schedule: AdminNoticeSchedule,
}

fn date_of(timestamp: Timestamp) -> NaiveDate {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

impl<R, T> AdminDashboardService<R, T>
where
    R: RngCore + Send,
    T: TimeSource,
{
    /// Generate the initial dataset, dated by `time_source`.
    pub fn new(mut rng: R, time_source: T) -> Self {
        let at = time_source.now();
        let dataset = AdminDataset::generate(&mut rng, date_of(at));
        Self {
            mounted: RwLock::new(Mounted { dataset, at }),
            rng: Mutex::new(rng),
            time_source,
            schedule: AdminNoticeSchedule::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: AdminNoticeSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Unfiltered dataset.
    pub fn dataset(&self) -> AdminDataset {
        self.mounted.read().dataset.clone()
    }

    fn elapsed(&self, mounted_at: Timestamp) -> Duration {
        Duration::from_millis(self.time_source.now().saturating_sub(mounted_at))
    }
}

impl<R, T> AdminApi for AdminDashboardService<R, T>
where
    R: RngCore + Send,
    T: TimeSource,
{
    fn view(&self, term: &str) -> AdminView {
        let mounted = self.mounted.read();
        let dataset = mounted.dataset.filter(term);
        AdminView {
            term: term.to_string(),
            counts: dataset.counts(),
            dataset,
            notice: self.schedule.notice_at(self.elapsed(mounted.at)),
        }
    }

    fn regenerate(&self) -> AdminCounts {
        let at = self.time_source.now();
        let dataset = AdminDataset::generate(&mut *self.rng.lock(), date_of(at));
        let counts = dataset.counts();
        *self.mounted.write() = Mounted { dataset, at };
        info!(?counts, "Admin dataset regenerated");
        counts
    }
}
