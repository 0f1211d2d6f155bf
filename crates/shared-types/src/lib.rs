//! # Shared Types Crate
//!
//! Domain vocabulary and ports shared by all LifeLink subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: blood groups, organs and the fixed city lists
//!   are defined once here and echoed verbatim by every generator.
//! - **Injected Time**: no subsystem calls `tokio::time::sleep` or reads the
//!   system clock directly. Waiting goes through [`Scheduler`], wall-clock
//!   reads go through [`TimeSource`].
//! - **Injected Randomness**: generators and simulators take an
//!   `R: rand::RngCore` so outcomes are reproducible under a seed.

pub mod entities;
pub mod errors;
pub mod hex_id;
pub mod ports;
pub mod timings;

pub use entities::*;
pub use errors::*;
pub use hex_id::{random_hex, truncate_middle};
pub use ports::*;
pub use timings::SimulationTimings;
