//! # Inbound Ports - Consent API

use async_trait::async_trait;
use shared_bus::ConsentSource;

use crate::domain::{ConsentError, ConsentOutcome, ConsentStage};

/// Primary API for the consent dialog.
#[async_trait]
pub trait ConsentApi: Send + Sync {
    /// Present the dialog for a new request.
    ///
    /// Rejected while an approval is in flight.
    fn open(&self, source: ConsentSource) -> Result<(), ConsentError>;

    /// Run one simulated consent recording.
    async fn approve(&self) -> Result<ConsentOutcome, ConsentError>;

    /// Return from the error stage to the initial stage.
    fn retry(&self) -> Result<ConsentStage, ConsentError>;

    /// Close the dialog. Returns `true` if an in-flight approval was cancelled.
    async fn dismiss(&self) -> bool;

    fn stage(&self) -> ConsentStage;

    /// The request the dialog was last opened for.
    fn request(&self) -> Option<ConsentSource>;
}
