//! # Runtime Wiring
//!
//! The full container with real tokio timers under paused time.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ll_02_consent_flow::{ConsentApi, ConsentOutcome, ConsentStage};
    use ll_03_donor_registration::{RegistrationApi, RegistrationForm};
    use ll_04_ledger_store::LedgerApi;
    use ll_runtime::wiring::spawn_event_router;
    use ll_runtime::{AppContainer, RuntimeConfig};
    use shared_bus::ConsentSource;
    use tempfile::tempdir;
    use tokio::sync::watch;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Hana Ito".into(),
            age: "29".into(),
            blood_group: "B+".into(),
            organs: vec!["Kidney".into()],
            city: "Denver".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_registration_reaches_consent_dialog() {
        let dir = tempdir().unwrap();
        let container = AppContainer::new(RuntimeConfig {
            data_dir: dir.path().to_path_buf(),
            rng_seed: Some(2024),
            ..RuntimeConfig::default()
        });
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let router = spawn_event_router(&container.bus, container.consent.clone(), shutdown_rx);

        container.registration.connect_wallet().await;

        // Seeded runs can still hit the 10% rejection; retry until accepted.
        let mut record = None;
        for _ in 0..10 {
            if let Ok(accepted) = container.registration.submit(form()).await {
                record = Some(accepted);
                break;
            }
        }
        let record = record.expect("a registration was accepted");
        assert!(container.ledger.get(&record.id).is_some());

        for _ in 0..100 {
            if container.consent.request().is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(
            container.consent.request(),
            Some(ConsentSource::Registration {
                record_id: record.id.clone()
            })
        );

        let outcome = container.consent.approve().await.unwrap();
        match outcome {
            ConsentOutcome::Approved => {
                assert_eq!(container.consent.stage(), ConsentStage::Initial)
            }
            ConsentOutcome::Rejected => {
                assert_eq!(container.consent.stage(), ConsentStage::Error)
            }
            ConsentOutcome::Cancelled => panic!("nothing dismissed the dialog"),
        }

        shutdown_tx.send(true).unwrap();
        router.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_timing_scale_shortens_simulated_waits() {
        let dir = tempdir().unwrap();
        let container = AppContainer::new(RuntimeConfig {
            data_dir: dir.path().to_path_buf(),
            timing_scale: 0.1,
            ..RuntimeConfig::default()
        });

        let started = tokio::time::Instant::now();
        container.registration.connect_wallet().await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(100), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1000), "{elapsed:?}");
    }
}
