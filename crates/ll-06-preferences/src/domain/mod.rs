//! # Domain Layer - Preferences

pub mod errors;
pub mod theme;

pub use errors::*;
pub use theme::*;
