//! # Search → Match Request → Consent
//!
//! Match search (1) publishes `ConsentRequested{MatchRequest}`; the runtime
//! router opens the consent dialog (2); approving it records consent.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ll_01_match_search::{Compatibility, MatchSearchApi, MatchSearchService, SearchForm};
    use ll_02_consent_flow::{ConsentApi, ConsentOutcome, ConsentSimulator, ConsentStage};
    use ll_runtime::wiring::{route_event, RouteAction};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_bus::{ConsentSource, EventFilter, InMemoryEventBus, LifeLinkEvent};
    use shared_types::{FixedTimeSource, InstantScheduler, SEARCH_CITIES};

    // =========================================================================
    // FIXTURES
    // =========================================================================

    struct World {
        bus: Arc<InMemoryEventBus>,
        scheduler: Arc<InstantScheduler>,
        search: MatchSearchService<StdRng, Arc<InstantScheduler>, FixedTimeSource>,
        consent: ConsentSimulator<StepRng, Arc<InstantScheduler>>,
    }

    fn world(seed: u64) -> World {
        let bus = Arc::new(InMemoryEventBus::new());
        let scheduler = Arc::new(InstantScheduler::new());
        World {
            search: MatchSearchService::new(
                StdRng::seed_from_u64(seed),
                scheduler.clone(),
                FixedTimeSource::new(1_700_000_000_000),
                bus.clone(),
            ),
            // StepRng(0, 0) makes every gen_bool succeed.
            consent: ConsentSimulator::new(StepRng::new(0, 0), scheduler.clone(), bus.clone()),
            scheduler,
            bus,
        }
    }

    fn kidney_o_positive() -> SearchForm {
        SearchForm {
            organ: "Kidney".into(),
            blood_group: "O+".into(),
            city: String::new(),
        }
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[tokio::test]
    async fn test_kidney_o_positive_any_city() {
        for seed in 0..50 {
            let w = world(seed);
            let batch = w.search.search(kidney_o_positive()).await.unwrap();

            assert!((1..=5).contains(&batch.len()), "seed {seed}: {}", batch.len());
            for candidate in &batch {
                assert_eq!(candidate.organ.as_str(), "Kidney");
                assert_eq!(candidate.blood_group.as_str(), "O+");
                assert!(SEARCH_CITIES.contains(&candidate.city.as_str()));
                assert!(candidate
                    .compatibility
                    .band()
                    .contains(&candidate.match_percentage));
            }
            assert_eq!(w.scheduler.elapsed(), Duration::from_millis(2000));
        }
    }

    #[tokio::test]
    async fn test_city_filter_pins_every_candidate() {
        let w = world(3);
        let batch = w
            .search
            .search(SearchForm {
                city: "Chicago".into(),
                ..kidney_o_positive()
            })
            .await
            .unwrap();
        assert!(batch.iter().all(|c| c.city == "Chicago"));
    }

    #[tokio::test]
    async fn test_tiers_cover_every_band_over_many_searches() {
        let w = world(11);
        let mut seen = Vec::new();
        for _ in 0..40 {
            for candidate in w.search.search(kidney_o_positive()).await.unwrap() {
                if !seen.contains(&candidate.compatibility) {
                    seen.push(candidate.compatibility);
                }
            }
        }
        for tier in Compatibility::ALL {
            assert!(seen.contains(&tier), "{tier:?} never generated");
        }
    }

    #[tokio::test]
    async fn test_match_request_opens_consent_and_records_it() {
        let w = world(5);
        let mut events = w.bus.subscribe(EventFilter::all());

        let batch = w.search.search(kidney_o_positive()).await.unwrap();
        let chosen = batch[0].clone();
        w.search.request_match(&chosen.id).await.unwrap();

        let published = events.drain();
        assert!(matches!(
            published[0],
            LifeLinkEvent::SearchCompleted { .. }
        ));
        let request = published
            .iter()
            .find(|e| matches!(e, LifeLinkEvent::ConsentRequested(_)))
            .expect("consent requested");
        assert_eq!(
            request,
            &LifeLinkEvent::ConsentRequested(ConsentSource::MatchRequest {
                candidate_id: chosen.id.clone()
            })
        );

        assert_eq!(route_event(&w.consent, request), RouteAction::ConsentOpened);
        assert_eq!(w.consent.approve().await.unwrap(), ConsentOutcome::Approved);
        assert_eq!(w.consent.stage(), ConsentStage::Initial);

        let after = events.drain();
        assert!(after.contains(&LifeLinkEvent::ConsentRecorded { approved: true }));
    }

    #[tokio::test]
    async fn test_invalid_search_publishes_nothing() {
        let w = world(1);
        let mut events = w.bus.subscribe(EventFilter::all());
        let err = w
            .search
            .search(SearchForm {
                blood_group: "Z+".into(),
                ..kidney_o_positive()
            })
            .await;
        assert!(err.is_err());
        assert!(events.drain().is_empty());
        assert!(w.search.latest().is_empty());
        assert!(w.scheduler.requested().is_empty());
    }
}
