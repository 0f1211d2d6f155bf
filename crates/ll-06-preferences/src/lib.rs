//! # Preferences Subsystem
//!
//! **Subsystem ID:** 6
//!
//! Light/dark theme, resolved once at start-up and persisted on every change.
//!
//! ## Resolution Order
//!
//! ```text
//! stored value ──present──→ use it
//!      │ absent or unreadable
//!      ↓
//! system preference ──→ use it
//!
//! the resolved value is written back immediately
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FilePreferenceStore, InMemoryPreferenceStore, PREFERENCES_FILE};
pub use domain::*;
pub use ports::inbound::ThemeApi;
pub use ports::outbound::PreferenceStore;
pub use service::ThemeService;
