//! Route table and shared handler state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Router};
use ll_01_match_search::MatchSearchApi;
use ll_02_consent_flow::ConsentApi;
use ll_03_donor_registration::RegistrationApi;
use ll_04_ledger_store::LedgerApi;
use ll_05_admin_dataset::AdminApi;
use ll_06_preferences::ThemeApi;
use tower_http::trace::TraceLayer;

use crate::domain::config::CorsConfig;
use crate::domain::site::SiteInfo;
use crate::handlers;
use crate::middleware::{create_cors_layer, track_requests};

/// Inbound ports of every subsystem the gateway fronts.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn MatchSearchApi>,
    pub consent: Arc<dyn ConsentApi>,
    pub registration: Arc<dyn RegistrationApi>,
    pub ledger: Arc<dyn LedgerApi>,
    pub admin: Arc<dyn AdminApi>,
    pub theme: Arc<dyn ThemeApi>,
    pub site: Arc<SiteInfo>,
}

/// Build the full router with CORS, tracing and request metrics applied.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    let api = Router::new()
        .route("/site", get(handlers::site))
        // Match search
        .route("/search", post(handlers::search))
        .route("/search/latest", get(handlers::latest_matches))
        .route("/search/:id/request", post(handlers::request_match))
        // Registration
        .route("/wallet/connect", post(handlers::connect_wallet))
        .route(
            "/registrations",
            get(handlers::registration_status).post(handlers::submit_registration),
        )
        .route("/registrations/reset", post(handlers::reset_registration))
        // Ledger
        .route("/ledger", get(handlers::ledger))
        .route("/ledger/:id", get(handlers::ledger_record))
        // Consent dialog
        .route("/consent", get(handlers::consent))
        .route("/consent/approve", post(handlers::approve_consent))
        .route("/consent/retry", post(handlers::retry_consent))
        .route("/consent/dismiss", post(handlers::dismiss_consent))
        // Admin
        .route("/admin", get(handlers::admin_view))
        .route("/admin/regenerate", post(handlers::regenerate_admin))
        // Preferences
        .route("/theme", get(handlers::theme))
        .route("/theme/toggle", post(handlers::toggle_theme));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .nest("/api", api)
        // Applied innermost-first: CORS is outermost, then tracing, then
        // request tracking (same order as a ServiceBuilder stack).
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(cors))
        .with_state(state)
}
