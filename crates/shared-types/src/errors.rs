//! # Error Types
//!
//! Errors shared across subsystems.

use thiserror::Error;

/// A form value did not name a known blood group or organ.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("unknown blood group: {0:?}")]
    UnknownBloodGroup(String),

    #[error("unknown organ: {0:?}")]
    UnknownOrgan(String),
}
