//! Match search error types.

use shared_types::VocabularyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Organ and blood group are required.
    #[error("please select {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    UnknownValue(#[from] VocabularyError),

    /// Match requested for an id not in the latest batch.
    #[error("candidate not found: {0}")]
    CandidateNotFound(String),
}
