//! # Outbound Ports (Driven Ports)

use crate::domain::{PreferenceError, ThemePreference};

/// Where the theme choice survives restarts.
pub trait PreferenceStore: Send + Sync {
    /// Stored theme, `None` if nothing was saved yet.
    fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError>;

    fn save_theme(&self, theme: ThemePreference) -> Result<(), PreferenceError>;
}
