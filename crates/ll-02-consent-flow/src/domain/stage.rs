//! Consent dialog stages and the pure transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ConsentError;

/// Stage of the consent dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStage {
    /// Waiting for the donor to approve.
    #[default]
    Initial,
    /// Simulated contract call in flight.
    Processing,
    /// Consent recorded; shown briefly before closing.
    Success,
    /// Contract call failed; retry available.
    Error,
}

impl ConsentStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// An approval is running (processing or success display).
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Processing | Self::Success)
    }

    /// Apply `event`, returning the next stage.
    pub fn transition(self, event: ConsentEvent) -> Result<ConsentStage, ConsentError> {
        use ConsentEvent::*;
        use ConsentStage::*;

        match (self, event) {
            (Initial, Approve) => Ok(Processing),
            (Processing, ProcessingSucceeded) => Ok(Success),
            (Processing, ProcessingFailed) => Ok(Error),
            (Success, DisplayElapsed) => Ok(Initial),
            (Error, Retry) => Ok(Initial),
            (Initial | Error, Open) => Ok(Initial),
            (_, Dismiss) => Ok(Initial),
            (from, event) => Err(ConsentError::InvalidTransition { from, event }),
        }
    }
}

impl fmt::Display for ConsentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the consent state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentEvent {
    /// A new consent request opens the dialog.
    Open,
    /// "Approve & Sign".
    Approve,
    ProcessingSucceeded,
    ProcessingFailed,
    /// Success display delay elapsed.
    DisplayElapsed,
    /// "Try Again".
    Retry,
    /// Dialog closed.
    Dismiss,
}

impl fmt::Display for ConsentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Approve => "approve",
            Self::ProcessingSucceeded => "processing succeeded",
            Self::ProcessingFailed => "processing failed",
            Self::DisplayElapsed => "display elapsed",
            Self::Retry => "retry",
            Self::Dismiss => "dismiss",
        };
        f.write_str(name)
    }
}

/// Result of one `approve()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentOutcome {
    /// Consent recorded; the dialog should close.
    Approved,
    /// Simulated contract failure; dialog shows the error stage.
    Rejected,
    /// The dialog was dismissed before the attempt finished.
    Cancelled,
}

impl ConsentOutcome {
    /// Metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}
