//! Inbound (Driving) port for the Ledger Store.

use crate::domain::{LedgerError, LedgerRecord, RecordStatus};

/// Operations other subsystems may perform on the ledger.
pub trait LedgerApi: Send + Sync {
    /// Insert a record at the head (newest first).
    fn append(&self, record: LedgerRecord);

    /// Full list, newest first.
    fn records(&self) -> Vec<LedgerRecord>;

    /// Newest record with this id.
    fn get(&self, id: &str) -> Option<LedgerRecord>;

    /// Move a record one step forward in its lifecycle.
    fn advance_status(&self, id: &str, next: RecordStatus) -> Result<LedgerRecord, LedgerError>;
}
