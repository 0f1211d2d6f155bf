//! Consent flow error types.

use thiserror::Error;

use super::stage::{ConsentEvent, ConsentStage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsentError {
    /// The event is not accepted in the current stage.
    #[error("Invalid consent transition: {event} while {from}")]
    InvalidTransition {
        /// Current stage
        from: ConsentStage,
        /// Rejected event
        event: ConsentEvent,
    },
}
