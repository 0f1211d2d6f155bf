//! Ledger store error types.

use thiserror::Error;

use super::entities::RecordStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No record carries this id.
    #[error("ledger record not found: {0}")]
    RecordNotFound(String),

    /// Status change that skips or reverses a step.
    #[error("record {id}: cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: RecordStatus,
        to: RecordStatus,
    },
}
