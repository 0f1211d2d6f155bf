//! # LifeLink Events
//!
//! Every event that flows through the shared bus. Simulators publish these
//! to tell their callers about outcomes that arrive after a delay (for
//! example "present the consent dialog now").

use serde::{Deserialize, Serialize};
use shared_types::{BloodGroup, Organ};

/// Subsystem identifiers used as event sources.
pub mod subsystem_ids {
    pub const MATCH_SEARCH: u8 = 1;
    pub const CONSENT_FLOW: u8 = 2;
    pub const DONOR_REGISTRATION: u8 = 3;
    pub const LEDGER_STORE: u8 = 4;
    pub const ADMIN_DATASET: u8 = 5;
    pub const PREFERENCES: u8 = 6;
}

/// What asked for the consent dialog to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConsentSource {
    /// A donor registration finished validation.
    #[serde(rename_all = "camelCase")]
    Registration { record_id: String },
    /// A recipient pressed "Request Match" on a search result.
    #[serde(rename_all = "camelCase")]
    MatchRequest { candidate_id: String },
}

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LifeLinkEvent {
    // =========================================================================
    // SUBSYSTEM 1: MATCH SEARCH
    // =========================================================================
    /// A recipient search produced a new batch of candidates.
    SearchCompleted {
        organ: Organ,
        blood_group: BloodGroup,
        candidates: usize,
    },

    // =========================================================================
    // SUBSYSTEM 2: CONSENT FLOW
    // =========================================================================
    /// The consent dialog should be presented.
    ConsentRequested(ConsentSource),

    /// The simulated contract call finished.
    ConsentRecorded { approved: bool },

    /// The dialog was closed while a consent call was in flight.
    ConsentDismissed,

    // =========================================================================
    // SUBSYSTEM 3: DONOR REGISTRATION
    // =========================================================================
    /// The placeholder wallet finished connecting.
    WalletConnected { address: String },

    /// Validation passed and a pending record was written.
    RegistrationAccepted { record_id: String, tx_hash: String },

    /// The simulated contract check rejected the registration.
    RegistrationRejected { reason: String },

    // =========================================================================
    // SUBSYSTEM 4: LEDGER STORE
    // =========================================================================
    /// A pending record advanced to validated.
    RecordValidated { record_id: String },

    // =========================================================================
    // SUBSYSTEM 6: PREFERENCES
    // =========================================================================
    /// The theme flag was toggled.
    ThemeChanged { dark: bool },
}

impl LifeLinkEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::SearchCompleted { .. } => EventTopic::Search,
            Self::ConsentRequested(_) | Self::ConsentRecorded { .. } | Self::ConsentDismissed => {
                EventTopic::Consent
            }
            Self::WalletConnected { .. }
            | Self::RegistrationAccepted { .. }
            | Self::RegistrationRejected { .. } => EventTopic::Registration,
            Self::RecordValidated { .. } => EventTopic::Ledger,
            Self::ThemeChanged { .. } => EventTopic::Preferences,
        }
    }

    /// Get the subsystem that publishes this event.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self {
            Self::SearchCompleted { .. } => subsystem_ids::MATCH_SEARCH,
            Self::ConsentRequested(ConsentSource::MatchRequest { .. }) => {
                subsystem_ids::MATCH_SEARCH
            }
            Self::ConsentRequested(ConsentSource::Registration { .. }) => {
                subsystem_ids::DONOR_REGISTRATION
            }
            Self::ConsentRecorded { .. } | Self::ConsentDismissed => subsystem_ids::CONSENT_FLOW,
            // The registration flow flips the record and announces it.
            Self::WalletConnected { .. }
            | Self::RegistrationAccepted { .. }
            | Self::RegistrationRejected { .. }
            | Self::RecordValidated { .. } => subsystem_ids::DONOR_REGISTRATION,
            Self::ThemeChanged { .. } => subsystem_ids::PREFERENCES,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    Search,
    Consent,
    Registration,
    Ledger,
    Preferences,
    /// Matches every topic.
    All,
}

/// Filter for event subscriptions.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to subscribe to (empty means all).
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Subscribe to all events.
    #[must_use]
    pub fn all() -> Self {
        Self {
            topics: vec![EventTopic::All],
        }
    }

    /// Subscribe to specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &LifeLinkEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
