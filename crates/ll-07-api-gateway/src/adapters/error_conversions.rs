//! Subsystem error → [`ApiError`] mapping.

use axum::http::StatusCode;
use ll_01_match_search::SearchError;
use ll_02_consent_flow::ConsentError;
use ll_03_donor_registration::RegistrationError;
use ll_04_ledger_store::LedgerError;
use ll_06_preferences::PreferenceError;
use ll_telemetry::TelemetryError;

use crate::domain::error::ApiError;

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::CandidateNotFound(_) => ApiError::not_found(e.to_string()),
            SearchError::MissingField(_) | SearchError::UnknownValue(_) => {
                ApiError::validation(e.to_string())
            }
        }
    }
}

impl From<ConsentError> for ApiError {
    fn from(e: ConsentError) -> Self {
        ApiError::conflict("invalid_transition", e.to_string())
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::RecordNotFound(_) => ApiError::not_found(e.to_string()),
            LedgerError::InvalidTransition { .. } => {
                ApiError::conflict("invalid_transition", e.to_string())
            }
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::WalletNotConnected => {
                ApiError::conflict("wallet_not_connected", e.to_string())
            }
            RegistrationError::SubmissionInFlight => {
                ApiError::conflict("submission_in_flight", e.to_string())
            }
            RegistrationError::ContractRejected => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "contract_rejected",
                e.to_string(),
            ),
            RegistrationError::Ledger(inner) => inner.into(),
            RegistrationError::ValidationInterrupted => {
                ApiError::internal("validation_interrupted", e.to_string())
            }
            RegistrationError::MissingField(_)
            | RegistrationError::InvalidAge(_)
            | RegistrationError::AgeOutOfRange { .. }
            | RegistrationError::UnknownValue(_) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<PreferenceError> for ApiError {
    fn from(e: PreferenceError) -> Self {
        ApiError::internal("preference_storage", e.to_string())
    }
}

impl From<TelemetryError> for ApiError {
    fn from(e: TelemetryError) -> Self {
        ApiError::internal("metrics_unavailable", e.to_string())
    }
}
