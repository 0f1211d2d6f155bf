//! # Adapters Layer - Preferences

mod file;
mod memory;

pub use file::{FilePreferenceStore, PREFERENCES_FILE};
pub use memory::InMemoryPreferenceStore;
