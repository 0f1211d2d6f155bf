//! # Domain Layer - Match Search
//!
//! Pure candidate generation; no timing and no I/O.

pub mod entities;
pub mod errors;
pub mod generator;

pub use entities::*;
pub use errors::*;
pub use generator::*;
