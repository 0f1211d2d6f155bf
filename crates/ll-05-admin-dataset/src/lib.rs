//! # Admin Dataset Subsystem
//!
//! **Subsystem ID:** 5
//!
//! ## Purpose
//!
//! Backs the admin dashboard: 20 donors, 15 recipients and 10 matches, all
//! random, generated once per mount and filtered by a free-text term.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Ids `D1001..D1020`, `R2001..R2015`, `M3001..M3010` | `domain/dataset.rs` |
//! | INVARIANT-2 | Donors list 1-3 distinct organs | `domain/dataset.rs` - `draw_organs()` |
//! | INVARIANT-3 | Match organ equals its recipient's organ needed | `domain/dataset.rs` |
//! | INVARIANT-4 | Dates lie within 30/20/10 days of generation | `domain/dataset.rs` |
//!
//! Match rows pair a random donor with a random recipient; blood group and
//! organ compatibility between the two is not checked.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::inbound::{AdminApi, AdminView};
pub use service::AdminDashboardService;
