//! # Recipient Match Search Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Answers a recipient's search (organ, blood group, optional city) with a
//! fabricated list of donor candidates after a simulated API delay.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | 1 to 5 candidates per batch | `domain/generator.rs` - `generate_candidates()` |
//! | INVARIANT-2 | Organ and blood group echo the query | `domain/generator.rs` |
//! | INVARIANT-3 | Match percentage inside the tier band | `domain/entities.rs` - `Compatibility::band()` |
//! | INVARIANT-4 | Candidate ids unique per generator | `domain/generator.rs` - batch counter |
//!
//! ## Module Structure
//!
//! ```text
//! domain/entities.rs  - MatchCandidate, Compatibility, SearchForm, SearchQuery
//! domain/generator.rs - MockMatchGenerator
//! domain/errors.rs    - SearchError
//! ports/inbound.rs    - MatchSearchApi
//! service.rs          - MatchSearchService (delay + generate + publish)
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::inbound::MatchSearchApi;
pub use service::MatchSearchService;
