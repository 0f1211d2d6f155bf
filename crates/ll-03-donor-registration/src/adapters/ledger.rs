//! Adapter from [`DonorLedger`] onto the ledger store's [`LedgerApi`].

use ll_04_ledger_store::{LedgerApi, LedgerError, LedgerRecord, RecordStatus};
use std::sync::Arc;
use tracing::debug;

use crate::ports::outbound::DonorLedger;

pub struct LedgerStoreAdapter {
    ledger: Arc<dyn LedgerApi>,
}

impl LedgerStoreAdapter {
    pub fn new(ledger: Arc<dyn LedgerApi>) -> Self {
        Self { ledger }
    }
}

impl DonorLedger for LedgerStoreAdapter {
    fn record_pending(&self, record: LedgerRecord) {
        debug!(id = %record.id, "Appending pending registration");
        self.ledger.append(record);
    }

    fn mark_validated(&self, id: &str) -> Result<LedgerRecord, LedgerError> {
        self.ledger.advance_status(id, RecordStatus::Validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_04_ledger_store::{DonorDetails, LedgerStore};
    use shared_types::{BloodGroup, Organ};

    fn pending(id: &str) -> LedgerRecord {
        LedgerRecord {
            id: id.into(),
            created_at: 0,
            donor: DonorDetails {
                name: "Jane Doe".into(),
                age: 30,
                blood_group: BloodGroup::BNegative,
                organs: vec![Organ::Liver],
                city: "Austin".into(),
            },
            wallet_address: "0x0".into(),
            tx_hash: "0".repeat(64),
            status: RecordStatus::Pending,
            match_description: None,
        }
    }

    #[test]
    fn test_pending_then_validated() {
        let store = Arc::new(LedgerStore::new());
        let adapter = LedgerStoreAdapter::new(store.clone());

        adapter.record_pending(pending("beef"));
        assert_eq!(store.len(), 3);

        let record = adapter.mark_validated("beef").unwrap();
        assert_eq!(record.status, RecordStatus::Validated);
        assert_eq!(store.get("beef").unwrap().status, RecordStatus::Validated);
    }

    #[test]
    fn test_validate_unknown_record() {
        let adapter = LedgerStoreAdapter::new(Arc::new(LedgerStore::empty()));
        assert_eq!(
            adapter.mark_validated("0000"),
            Err(LedgerError::RecordNotFound("0000".into()))
        );
    }
}
