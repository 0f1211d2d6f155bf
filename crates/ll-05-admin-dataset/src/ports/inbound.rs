//! # Inbound Ports - Admin Dashboard API

use serde::{Deserialize, Serialize};

use crate::domain::{AdminCounts, AdminDataset, AdminNotice};

/// What the dashboard renders for one search term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    pub term: String,
    #[serde(flatten)]
    pub dataset: AdminDataset,
    /// Counts after filtering.
    pub counts: AdminCounts,
    pub notice: Option<AdminNotice>,
}

pub trait AdminApi: Send + Sync {
    /// Filtered tables plus the notice, if currently visible.
    fn view(&self, term: &str) -> AdminView;

    /// Throw the dataset away and generate a new one (a fresh mount).
    fn regenerate(&self) -> AdminCounts;
}
