//! # Inbound Ports - Registration API

use async_trait::async_trait;
use ll_04_ledger_store::LedgerRecord;

use crate::domain::{RegistrationError, RegistrationForm, RegistrationStatus, SubmitState};

/// Primary API for the donor registration page.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Connect the placeholder wallet and return its address.
    ///
    /// Connecting again returns the same address without waiting.
    async fn connect_wallet(&self) -> String;

    /// Validate and register a donor.
    ///
    /// Resolves once the record has been validated and consent requested.
    async fn submit(&self, form: RegistrationForm) -> Result<LedgerRecord, RegistrationError>;

    /// Return to the empty form after success or failure.
    fn reset(&self) -> SubmitState;

    fn status(&self) -> RegistrationStatus;
}
