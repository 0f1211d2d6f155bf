//! # Consent Flow Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Simulates recording a donor's consent on chain: a processing delay, then
//! a random outcome (80% success). Shown as a dialog after a registration is
//! validated or a recipient requests a match.
//!
//! ## State Machine
//!
//! ```text
//!                 approve
//!   [Initial] ─────────────→ [Processing]
//!      ↑  ↑                    │       │
//!      │  │      succeeded     │       │  failed
//!      │  │   ┌────────────────┘       └──────────┐
//!      │  │   ↓                                   ↓
//!      │  [Success]                            [Error]
//!      │     │ display elapsed                    │
//!      │     └──→ [Initial]          retry        │
//!      └──────────────────────────────────────────┘
//!
//!   dismiss: any stage → [Initial], cancelling an in-flight approval
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Approve only from Initial | `domain/stage.rs` - `transition()` |
//! | INVARIANT-2 | Retry only from Error | `domain/stage.rs` - `transition()` |
//! | INVARIANT-3 | A dismissed attempt never writes state | `service.rs` - attempt counter |
//! | INVARIANT-4 | No random draw after cancellation | `service.rs` - `approve()` |
//! | INVARIANT-5 | An abandoned approval returns the dialog to Initial | `service.rs` - `ApprovalGuard` |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::inbound::ConsentApi;
pub use service::{ConsentSimulator, DEFAULT_SUCCESS_PROBABILITY};
