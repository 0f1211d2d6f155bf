//! # Adapters Layer - Donor Registration

mod ledger;

pub use ledger::LedgerStoreAdapter;
