//! # Theme Service
//!
//! [`PreferenceStore`] is synchronous. Start-up calls it directly; toggles
//! run the write on the blocking pool, one at a time.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_bus::{EventPublisher, LifeLinkEvent};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{PreferenceError, ThemePreference};
use crate::ports::inbound::ThemeApi;
use crate::ports::outbound::PreferenceStore;

pub struct ThemeService {
    current: Mutex<ThemePreference>,
    /// Held across a toggle's write so the file and `current` agree.
    toggling: tokio::sync::Mutex<()>,
    store: Arc<dyn PreferenceStore>,
    publisher: Arc<dyn EventPublisher>,
}

impl ThemeService {
    /// Resolve the start-up theme and write it back to `store`.
    ///
    /// A stored value wins over `system_prefers_dark`. Storage failures are
    /// logged and never prevent start-up.
    pub fn init(
        store: Arc<dyn PreferenceStore>,
        publisher: Arc<dyn EventPublisher>,
        system_prefers_dark: bool,
    ) -> Self {
        let system = ThemePreference::from_dark(system_prefers_dark);
        let theme = match store.load_theme() {
            Ok(Some(stored)) => stored,
            Ok(None) => system,
            Err(e) => {
                warn!(error = %e, "Stored theme unreadable, using system preference");
                system
            }
        };

        if let Err(e) = store.save_theme(theme) {
            warn!(error = %e, "Failed to persist resolved theme");
        }
        info!(%theme, "Theme resolved");

        Self {
            current: Mutex::new(theme),
            toggling: tokio::sync::Mutex::new(()),
            store,
            publisher,
        }
    }
}

#[async_trait]
impl ThemeApi for ThemeService {
    fn current(&self) -> ThemePreference {
        *self.current.lock()
    }

    async fn toggle(&self) -> Result<ThemePreference, PreferenceError> {
        let _toggling = self.toggling.lock().await;
        let next = self.current().toggled();

        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.save_theme(next))
            .await
            .map_err(|e| PreferenceError::WriteAborted(e.to_string()))??;
        *self.current.lock() = next;

        self.publisher
            .publish(LifeLinkEvent::ThemeChanged {
                dark: next.is_dark(),
            })
            .await;
        Ok(next)
    }
}
