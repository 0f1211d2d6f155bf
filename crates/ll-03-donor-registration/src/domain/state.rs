//! Registration page state.

use serde::{Deserialize, Serialize};

/// Outcome of the last submission as shown by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    #[default]
    Idle,
    Success,
    Error,
}

/// Snapshot of the registration page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    /// Full wallet address once connected.
    pub wallet_address: Option<String>,
    pub submit_state: SubmitState,
    /// A submission is between validation and consent prompt.
    pub submitting: bool,
}

impl RegistrationStatus {
    pub fn wallet_connected(&self) -> bool {
        self.wallet_address.is_some()
    }
}
