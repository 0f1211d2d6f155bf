//! # Inbound Ports - Theme API

use async_trait::async_trait;

use crate::domain::{PreferenceError, ThemePreference};

#[async_trait]
pub trait ThemeApi: Send + Sync {
    fn current(&self) -> ThemePreference;

    /// Flip light/dark and persist the result.
    async fn toggle(&self) -> Result<ThemePreference, PreferenceError>;
}
