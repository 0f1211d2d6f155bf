//! Registration error types.

use ll_04_ledger_store::LedgerError;
use shared_types::VocabularyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    /// A required form field is empty.
    #[error("Please fill in all required fields: {0} is missing")]
    MissingField(&'static str),

    #[error("Age must be a whole number, got {0:?}")]
    InvalidAge(String),

    #[error("Age must be between {min} and {max}, got {age}")]
    AgeOutOfRange { age: u32, min: u8, max: u8 },

    #[error(transparent)]
    UnknownValue(#[from] VocabularyError),

    #[error("A registration is already being processed")]
    SubmissionInFlight,

    /// The simulated contract validation failed.
    #[error("Smart contract validation failed")]
    ContractRejected,

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The background validation task ended without a result.
    #[error("Record validation was interrupted")]
    ValidationInterrupted,
}

impl RegistrationError {
    /// Metric label for the outcome this error represents.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::ContractRejected => "rejected",
            Self::SubmissionInFlight | Self::Ledger(_) | Self::ValidationInterrupted => "error",
            _ => "invalid",
        }
    }
}
