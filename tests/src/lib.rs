//! # LifeLink Test Suite
//!
//! Cross-subsystem scenarios. Unit tests live next to the code in each crate.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Flows that span several subsystems over the bus
//! │   ├── search_flow.rs
//! │   ├── registration_flow.rs
//! │   └── runtime_wiring.rs
//! └── benches/           # Generator throughput (criterion)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ll-tests
//! cargo test -p ll-tests integration::registration_flow
//! cargo bench -p ll-tests
//! ```

pub mod integration;
