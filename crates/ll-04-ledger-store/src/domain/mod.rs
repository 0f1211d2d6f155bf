//! # Domain Layer - Ledger Store
//!
//! - `entities`: LedgerRecord, DonorDetails, RecordStatus
//! - `errors`: LedgerError
//! - `seed`: the two fixed example records

pub mod entities;
pub mod errors;
pub mod seed;

pub use entities::*;
pub use errors::*;
pub use seed::seed_records;
