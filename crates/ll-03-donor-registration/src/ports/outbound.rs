//! # Outbound Ports (Driven Ports)
//!
//! Where accepted registrations are recorded.

use ll_04_ledger_store::{LedgerError, LedgerRecord};

/// Ledger as seen by the registration flow.
pub trait DonorLedger: Send + Sync {
    /// Record a freshly accepted (pending) registration.
    fn record_pending(&self, record: LedgerRecord);

    /// Flip a pending record to validated.
    fn mark_validated(&self, id: &str) -> Result<LedgerRecord, LedgerError>;
}
