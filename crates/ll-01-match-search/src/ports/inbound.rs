//! # Inbound Ports - Match Search API

use async_trait::async_trait;

use crate::domain::{MatchCandidate, SearchError, SearchForm};

/// Primary API for recipient searches.
#[async_trait]
pub trait MatchSearchApi: Send + Sync {
    /// Validate the form, wait out the simulated lookup and return a batch.
    ///
    /// The batch replaces the previously stored one.
    async fn search(&self, form: SearchForm) -> Result<Vec<MatchCandidate>, SearchError>;

    /// Most recent batch, empty before the first search.
    fn latest(&self) -> Vec<MatchCandidate>;

    /// Ask for consent to match with a candidate from the latest batch.
    async fn request_match(&self, candidate_id: &str) -> Result<MatchCandidate, SearchError>;
}
