//! In-memory ledger, newest record first.

use parking_lot::RwLock;
use std::collections::VecDeque;
use tracing::{debug, info};

use crate::domain::{seed_records, LedgerError, LedgerRecord, RecordStatus};
use crate::ports::inbound::LedgerApi;

/// The mock ledger.
///
/// Share it behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct LedgerStore {
    records: RwLock<VecDeque<LedgerRecord>>,
}

impl LedgerStore {
    /// Ledger initialized with the two seed records.
    pub fn new() -> Self {
        let store = Self {
            records: RwLock::new(seed_records().into()),
        };
        store.publish_size();
        store
    }

    /// Ledger without seed records.
    pub fn empty() -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Validated → matched with a human-readable description.
    pub fn mark_matched(
        &self,
        id: &str,
        description: impl Into<String>,
    ) -> Result<LedgerRecord, LedgerError> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| LedgerError::RecordNotFound(id.to_string()))?;

        Self::check_transition(record, RecordStatus::Matched)?;
        record.status = RecordStatus::Matched;
        record.match_description = Some(description.into());

        info!(record_id = %id, "Ledger record matched");
        Ok(record.clone())
    }

    fn check_transition(record: &LedgerRecord, next: RecordStatus) -> Result<(), LedgerError> {
        if record.status.can_advance_to(next) {
            Ok(())
        } else {
            Err(LedgerError::InvalidTransition {
                id: record.id.clone(),
                from: record.status,
                to: next,
            })
        }
    }

    fn publish_size(&self) {
        ll_telemetry::LEDGER_RECORDS.set(self.len() as f64);
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerApi for LedgerStore {
    fn append(&self, record: LedgerRecord) {
        debug!(record_id = %record.id, status = %record.status, "Appending ledger record");
        self.records.write().push_front(record);
        self.publish_size();
    }

    fn records(&self) -> Vec<LedgerRecord> {
        self.records.read().iter().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<LedgerRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    fn advance_status(&self, id: &str, next: RecordStatus) -> Result<LedgerRecord, LedgerError> {
        if next == RecordStatus::Matched {
            // Matched records need a description.
            return self.mark_matched(id, "Matched");
        }

        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| LedgerError::RecordNotFound(id.to_string()))?;

        Self::check_transition(record, next)?;
        record.status = next;

        info!(record_id = %id, status = %next, "Ledger record advanced");
        Ok(record.clone())
    }
}
