//! In-memory preference store.

use parking_lot::RwLock;

use crate::domain::{PreferenceError, ThemePreference};
use crate::ports::outbound::PreferenceStore;

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    theme: RwLock<Option<ThemePreference>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            theme: RwLock::new(Some(theme)),
        }
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        Ok(*self.theme.read())
    }

    fn save_theme(&self, theme: ThemePreference) -> Result<(), PreferenceError> {
        *self.theme.write() = Some(theme);
        Ok(())
    }
}
