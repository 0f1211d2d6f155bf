//! # Application Container
//!
//! Builds every subsystem once and hands them out as shared ports.
//!
//! ## Initialization Order
//!
//! 1. Event bus
//! 2. Ledger store (seeded with the demo records)
//! 3. Theme preferences (file store under `data_dir`)
//! 4. Flow simulators (search, consent, registration)
//! 5. Admin dataset

pub mod config;

use std::sync::Arc;

use ll_01_match_search::MatchSearchService;
use ll_02_consent_flow::ConsentSimulator;
use ll_03_donor_registration::{LedgerStoreAdapter, RegistrationSimulator};
use ll_04_ledger_store::{LedgerApi, LedgerStore};
use ll_05_admin_dataset::{AdminDashboardService, AdminNoticeSchedule};
use ll_06_preferences::{FilePreferenceStore, ThemeApi, ThemeService};
use ll_07_api_gateway::{AppState, SiteInfo};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_bus::{EventPublisher, InMemoryEventBus};
use shared_types::{SystemTimeSource, TokioScheduler};
use tracing::info;

pub use config::{ConfigError, RuntimeConfig};

type Search = MatchSearchService<StdRng, TokioScheduler, SystemTimeSource>;
type Consent = ConsentSimulator<StdRng, TokioScheduler>;
type Registration = RegistrationSimulator<StdRng, TokioScheduler, SystemTimeSource>;
type Admin = AdminDashboardService<StdRng, SystemTimeSource>;

/// Hands out one RNG per simulator so seeded runs stay independent of
/// construction order in other subsystems.
struct RngFactory {
    seed: Option<u64>,
}

impl RngFactory {
    fn for_stream(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Every initialized subsystem.
pub struct AppContainer {
    pub config: RuntimeConfig,
    pub bus: Arc<InMemoryEventBus>,
    pub ledger: Arc<LedgerStore>,
    pub search: Arc<Search>,
    pub consent: Arc<Consent>,
    pub registration: Arc<Registration>,
    pub admin: Arc<Admin>,
    pub theme: Arc<ThemeService>,
}

impl AppContainer {
    pub fn new(config: RuntimeConfig) -> Self {
        let timings = config.timings();
        let rngs = RngFactory {
            seed: config.rng_seed,
        };

        let bus = Arc::new(InMemoryEventBus::new());
        let publisher: Arc<dyn EventPublisher> = bus.clone();

        let ledger = Arc::new(LedgerStore::new());
        let ledger_port: Arc<dyn LedgerApi> = ledger.clone();

        let theme = Arc::new(ThemeService::init(
            Arc::new(FilePreferenceStore::in_dir(&config.data_dir)),
            publisher.clone(),
            config.system_prefers_dark,
        ));

        let search = Arc::new(
            MatchSearchService::new(
                rngs.for_stream(1),
                TokioScheduler,
                SystemTimeSource,
                publisher.clone(),
            )
            .with_delay(timings.search),
        );

        let consent = Arc::new(
            ConsentSimulator::new(rngs.for_stream(2), TokioScheduler, publisher.clone())
                .with_timings(&timings),
        );

        let registration = Arc::new(
            RegistrationSimulator::new(
                rngs.for_stream(3),
                TokioScheduler,
                SystemTimeSource,
                Arc::new(LedgerStoreAdapter::new(ledger_port)),
                publisher,
            )
            .with_timings(&timings),
        );

        let admin = Arc::new(
            AdminDashboardService::new(rngs.for_stream(5), SystemTimeSource)
                .with_schedule(AdminNoticeSchedule::from_timings(&timings)),
        );

        info!(
            seeded = config.rng_seed.is_some(),
            timing_scale = config.timing_scale,
            ledger_records = ledger.len(),
            theme = %theme.current(),
            "Subsystems initialized"
        );

        Self {
            config,
            bus,
            ledger,
            search,
            consent,
            registration,
            admin,
            theme,
        }
    }

    /// Ports handed to the REST gateway.
    pub fn app_state(&self) -> AppState {
        AppState {
            search: self.search.clone(),
            consent: self.consent.clone(),
            registration: self.registration.clone(),
            ledger: self.ledger.clone(),
            admin: self.admin.clone(),
            theme: self.theme.clone(),
            site: Arc::new(SiteInfo::default()),
        }
    }
}
