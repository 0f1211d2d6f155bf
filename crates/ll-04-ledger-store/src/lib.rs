//! # Mock Ledger Store Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Holds the fabricated "blockchain" records shown on the registration page.
//! Nothing is persisted; the store lives as long as the process.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Newest record first | `store.rs` - `append()` pushes to the front |
//! | INVARIANT-2 | Exactly two seed records at startup | `domain/seed.rs` |
//! | INVARIANT-3 | Status only moves forward one step | `domain/entities.rs` - `RecordStatus::can_advance_to()` |
//!
//! ## Status Lifecycle
//!
//! ```text
//! [PENDING] ──(registration delay)──→ [VALIDATED] ──(manual/seed only)──→ [MATCHED]
//! ```

pub mod domain;
pub mod ports;
pub mod store;

pub use domain::*;
pub use ports::inbound::LedgerApi;
pub use store::LedgerStore;
