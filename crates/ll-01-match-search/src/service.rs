//! # Match Search Service
//!
//! Implements [`MatchSearchApi`]: validate, wait, generate, remember, publish.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use rand::RngCore;
use shared_bus::{ConsentSource, EventPublisher, LifeLinkEvent};
use shared_types::{Scheduler, TimeSource, SEARCH_CITIES};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::{MatchCandidate, MockMatchGenerator, SearchError, SearchForm, SearchQuery};
use crate::ports::inbound::MatchSearchApi;

/// Default simulated lookup time.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(2000);

pub struct MatchSearchService<R, S, T>
where
    R: RngCore + Send,
    S: Scheduler,
    T: TimeSource,
{
    generator: MockMatchGenerator<T>,
    cities: Vec<String>,
    rng: Mutex<R>,
    scheduler: S,
    delay: Duration,
    latest: RwLock<Vec<MatchCandidate>>,
    publisher: Arc<dyn EventPublisher>,
}

impl<R, S, T> MatchSearchService<R, S, T>
where
    R: RngCore + Send,
    S: Scheduler,
    T: TimeSource,
{
    pub fn new(rng: R, scheduler: S, time_source: T, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            generator: MockMatchGenerator::new(time_source),
            cities: SEARCH_CITIES.iter().map(|c| c.to_string()).collect(),
            rng: Mutex::new(rng),
            scheduler,
            delay: DEFAULT_SEARCH_DELAY,
            latest: RwLock::new(Vec::new()),
            publisher,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the city list used when a search has no city filter.
    pub fn with_cities<I, C>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl<R, S, T> MatchSearchApi for MatchSearchService<R, S, T>
where
    R: RngCore + Send,
    S: Scheduler,
    T: TimeSource,
{
    #[instrument(skip(self, form), fields(organ = %form.organ, blood_group = %form.blood_group))]
    async fn search(&self, form: SearchForm) -> Result<Vec<MatchCandidate>, SearchError> {
        let query = SearchQuery::try_from(&form)?;

        ll_telemetry::SEARCH_REQUESTS.inc();
        ll_telemetry::observe_delay("search", self.delay);
        self.scheduler.delay(self.delay).await;

        let candidates = {
            let mut rng = self.rng.lock();
            self.generator.generate(&query, &self.cities, &mut *rng)
        };

        *self.latest.write() = candidates.clone();
        ll_telemetry::SEARCH_CANDIDATES.inc_by(candidates.len() as f64);

        info!(count = candidates.len(), "Search completed");
        self.publisher
            .publish(LifeLinkEvent::SearchCompleted {
                organ: query.organ,
                blood_group: query.blood_group,
                candidates: candidates.len(),
            })
            .await;

        Ok(candidates)
    }

    fn latest(&self) -> Vec<MatchCandidate> {
        self.latest.read().clone()
    }

    async fn request_match(&self, candidate_id: &str) -> Result<MatchCandidate, SearchError> {
        let candidate = self
            .latest
            .read()
            .iter()
            .find(|c| c.id == candidate_id)
            .cloned()
            .ok_or_else(|| SearchError::CandidateNotFound(candidate_id.to_string()))?;

        debug!(candidate = %candidate.id, "Match requested");
        self.publisher
            .publish(LifeLinkEvent::ConsentRequested(ConsentSource::MatchRequest {
                candidate_id: candidate.id.clone(),
            }))
            .await;

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_bus::{EventFilter, InMemoryEventBus};
    use shared_types::{FixedTimeSource, InstantScheduler};

    type TestService = MatchSearchService<StdRng, Arc<InstantScheduler>, FixedTimeSource>;

    fn service(bus: Arc<InMemoryEventBus>) -> (TestService, Arc<InstantScheduler>) {
        let scheduler = Arc::new(InstantScheduler::new());
        let service = MatchSearchService::new(
            StdRng::seed_from_u64(1),
            scheduler.clone(),
            FixedTimeSource::new(1_000),
            bus,
        );
        (service, scheduler)
    }

    fn kidney_form() -> SearchForm {
        SearchForm {
            organ: "Kidney".into(),
            blood_group: "O+".into(),
            city: String::new(),
        }
    }

    #[tokio::test]
    async fn test_search_waits_then_stores_batch() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let (service, scheduler) = service(bus.clone());

        assert!(service.latest().is_empty());
        let batch = service.search(kidney_form()).await.unwrap();

        assert_eq!(scheduler.requested(), vec![DEFAULT_SEARCH_DELAY]);
        assert_eq!(service.latest(), batch);
        match sub.try_recv().unwrap() {
            Some(LifeLinkEvent::SearchCompleted { candidates, .. }) => {
                assert_eq!(candidates, batch.len())
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_does_not_wait() {
        let (service, scheduler) = service(Arc::new(InMemoryEventBus::new()));
        let form = SearchForm {
            organ: String::new(),
            ..kidney_form()
        };

        assert_eq!(
            service.search(form).await,
            Err(SearchError::MissingField("organ"))
        );
        assert!(scheduler.requested().is_empty());
    }

    #[tokio::test]
    async fn test_new_search_replaces_latest() {
        let (service, _) = service(Arc::new(InMemoryEventBus::new()));
        let first = service.search(kidney_form()).await.unwrap();
        let second = service.search(kidney_form()).await.unwrap();

        assert_eq!(service.latest(), second);
        assert!(first.iter().all(|c| !second.iter().any(|s| s.id == c.id)));
    }

    #[tokio::test]
    async fn test_request_match_publishes_consent_request() {
        let bus = Arc::new(InMemoryEventBus::new());
        let (service, _) = service(bus.clone());
        let batch = service.search(kidney_form()).await.unwrap();
        let mut sub = bus.subscribe(EventFilter::all());

        let chosen = service.request_match(&batch[0].id).await.unwrap();
        assert_eq!(chosen, batch[0]);
        assert_eq!(
            sub.try_recv().unwrap(),
            Some(LifeLinkEvent::ConsentRequested(ConsentSource::MatchRequest {
                candidate_id: batch[0].id.clone()
            }))
        );
    }

    #[tokio::test]
    async fn test_request_match_unknown_candidate() {
        let (service, _) = service(Arc::new(InMemoryEventBus::new()));
        assert_eq!(
            service.request_match("donor-0-0").await,
            Err(SearchError::CandidateNotFound("donor-0-0".into()))
        );
    }

    #[tokio::test]
    async fn test_custom_city_list() {
        let (service, _) = service(Arc::new(InMemoryEventBus::new()));
        let service = service.with_cities(["Boston"]);
        let batch = service.search(kidney_form()).await.unwrap();
        assert!(batch.iter().all(|c| c.city == "Boston"));
    }
}
