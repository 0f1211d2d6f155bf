//! # Domain Layer - Donor Registration

pub mod errors;
pub mod form;
pub mod state;

pub use errors::*;
pub use form::*;
pub use state::*;
