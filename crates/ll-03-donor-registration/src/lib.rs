//! # Donor Registration Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Simulates a donor connecting a wallet and registering on chain. A
//! successful submission lands in the mock ledger as `pending`, is flipped to
//! `validated` after a short delay, and then asks for consent.
//!
//! ## Flow
//!
//! ```text
//! connect_wallet ──(1000ms)──→ wallet set
//!
//! submit(form)
//!   │ wallet? ── no ──→ WalletNotConnected
//!   │ fields? ── no ──→ MissingField / InvalidAge / AgeOutOfRange / UnknownValue
//!   │ (1500ms)
//!   │ contract check (90%) ── fail ──→ state Error, ContractRejected
//!   ↓
//! ledger.append(pending) → state Success
//!   │ spawned: RegistrationAccepted, (2000ms)
//!   ↓
//! ledger: validated → RecordValidated → ConsentRequested
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Invalid forms never reach the ledger or the bus | `service.rs` - `submit()` |
//! | INVARIANT-2 | Rejected submissions never reach the ledger | `service.rs` - `submit()` |
//! | INVARIANT-3 | One submission in flight at a time | `service.rs` - `InFlightGuard` |
//! | INVARIANT-4 | Age within 18-80 | `domain/form.rs` - `validate()` |
//! | INVARIANT-5 | An appended record is validated even if the caller goes away | `service.rs` - `validate_after_delay()` |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::LedgerStoreAdapter;
pub use domain::*;
pub use ports::inbound::RegistrationApi;
pub use ports::outbound::DonorLedger;
pub use service::{RegistrationSimulator, DEFAULT_VALIDATION_PROBABILITY, PLACEHOLDER_WALLET};
