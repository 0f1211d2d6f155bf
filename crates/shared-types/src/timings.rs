//! Fixed delays of every simulated asynchronous stage.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// All simulated waits in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationTimings {
    /// Recipient search "API call".
    pub search: Duration,
    /// MetaMask connection prompt.
    pub wallet_connect: Duration,
    /// Smart-contract validation of a registration.
    pub registration_validation: Duration,
    /// Gap between registration success and the consent prompt.
    pub consent_prompt: Duration,
    /// On-chain consent recording.
    pub consent_processing: Duration,
    /// How long the consent success state stays on screen.
    pub consent_success_display: Duration,
    /// Admin notice appears this long after the dashboard mounts.
    pub admin_notice_delay: Duration,
    /// Admin notice stays visible this long.
    pub admin_notice_duration: Duration,
}

impl Default for SimulationTimings {
    fn default() -> Self {
        Self {
            search: Duration::from_millis(2000),
            wallet_connect: Duration::from_millis(1000),
            registration_validation: Duration::from_millis(1500),
            consent_prompt: Duration::from_millis(2000),
            consent_processing: Duration::from_millis(3000),
            consent_success_display: Duration::from_millis(2000),
            admin_notice_delay: Duration::from_millis(3000),
            admin_notice_duration: Duration::from_millis(5000),
        }
    }
}

impl SimulationTimings {
    /// Every delay multiplied by `factor` (e.g. `0.0` for instant demos).
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |d: Duration| d.mul_f64(factor.max(0.0));
        Self {
            search: scale(self.search),
            wallet_connect: scale(self.wallet_connect),
            registration_validation: scale(self.registration_validation),
            consent_prompt: scale(self.consent_prompt),
            consent_processing: scale(self.consent_processing),
            consent_success_display: scale(self.consent_success_display),
            admin_notice_delay: scale(self.admin_notice_delay),
            admin_notice_duration: scale(self.admin_notice_duration),
        }
    }
}
