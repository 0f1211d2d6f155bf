//! JSON file preference store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{PreferenceError, StoredPreferences, ThemePreference};
use crate::ports::outbound::PreferenceStore;

/// File name inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store at `<data_dir>/preferences.json`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::at(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: StoredPreferences =
            serde_json::from_str(&raw).map_err(|source| PreferenceError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(stored.theme)
    }

    fn save_theme(&self, theme: ThemePreference) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let stored = StoredPreferences { theme: Some(theme) };
        let body = serde_json::to_vec(&stored).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        // Write then rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), %theme, "Theme saved");
        Ok(())
    }
}
