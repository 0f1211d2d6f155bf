//! Route handlers. Each one forwards to a single subsystem port.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use ll_01_match_search::{MatchCandidate, SearchForm};
use ll_03_donor_registration::{RegistrationForm, RegistrationStatus};
use ll_05_admin_dataset::{AdminCounts, AdminView};
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::truncate_middle;
use tracing::debug;

use crate::domain::error::ApiError;
use crate::domain::site::SiteInfo;
use crate::domain::views::{
    ConsentApproveView, ConsentDismissView, ConsentView, LedgerRecordView, SubmitStateView,
    ThemeView, WalletView,
};
use crate::router::AppState;

type ApiResult<T> = Result<T, ApiError>;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "lifelink",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn metrics() -> ApiResult<impl IntoResponse> {
    let body = ll_telemetry::encode_metrics()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}

pub async fn site(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(state.site.as_ref().clone())
}

// ---------------------------------------------------------------------------
// Match search
// ---------------------------------------------------------------------------

pub async fn search(
    State(state): State<AppState>,
    Json(form): Json<SearchForm>,
) -> ApiResult<Json<Vec<MatchCandidate>>> {
    Ok(Json(state.search.search(form).await?))
}

pub async fn latest_matches(State(state): State<AppState>) -> Json<Vec<MatchCandidate>> {
    Json(state.search.latest())
}

pub async fn request_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<MatchCandidate>)> {
    let candidate = state.search.request_match(&id).await?;
    Ok((StatusCode::ACCEPTED, Json(candidate)))
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

pub async fn connect_wallet(State(state): State<AppState>) -> Json<WalletView> {
    let address = state.registration.connect_wallet().await;
    Json(WalletView {
        display: truncate_middle(&address, 6, 4),
        address,
    })
}

pub async fn registration_status(State(state): State<AppState>) -> Json<RegistrationStatus> {
    Json(state.registration.status())
}

pub async fn submit_registration(
    State(state): State<AppState>,
    Json(form): Json<RegistrationForm>,
) -> ApiResult<(StatusCode, Json<LedgerRecordView>)> {
    let record = state.registration.submit(form).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn reset_registration(State(state): State<AppState>) -> Json<SubmitStateView> {
    Json(SubmitStateView {
        submit_state: state.registration.reset(),
    })
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

pub async fn ledger(State(state): State<AppState>) -> Json<Vec<LedgerRecordView>> {
    Json(
        state
            .ledger
            .records()
            .into_iter()
            .map(LedgerRecordView::from)
            .collect(),
    )
}

pub async fn ledger_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LedgerRecordView>> {
    state
        .ledger
        .get(&id)
        .map(|r| Json(r.into()))
        .ok_or_else(|| ApiError::not_found(format!("ledger record not found: {id}")))
}

// ---------------------------------------------------------------------------
// Consent dialog
// ---------------------------------------------------------------------------

pub async fn consent(State(state): State<AppState>) -> Json<ConsentView> {
    Json(ConsentView {
        stage: state.consent.stage(),
        request: state.consent.request(),
    })
}

pub async fn approve_consent(State(state): State<AppState>) -> ApiResult<Json<ConsentApproveView>> {
    let outcome = state.consent.approve().await?;
    debug!(outcome = outcome.as_str(), "Consent approval finished");
    Ok(Json(ConsentApproveView {
        outcome,
        stage: state.consent.stage(),
    }))
}

pub async fn retry_consent(State(state): State<AppState>) -> ApiResult<Json<ConsentView>> {
    let stage = state.consent.retry()?;
    Ok(Json(ConsentView {
        stage,
        request: state.consent.request(),
    }))
}

pub async fn dismiss_consent(State(state): State<AppState>) -> Json<ConsentDismissView> {
    let cancelled = state.consent.dismiss().await;
    Json(ConsentDismissView {
        cancelled,
        stage: state.consent.stage(),
    })
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn admin_view(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Json<AdminView> {
    Json(state.admin.view(&query.q))
}

pub async fn regenerate_admin(State(state): State<AppState>) -> Json<AdminCounts> {
    Json(state.admin.regenerate())
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

pub async fn theme(State(state): State<AppState>) -> Json<ThemeView> {
    Json(state.theme.current().into())
}

pub async fn toggle_theme(State(state): State<AppState>) -> ApiResult<Json<ThemeView>> {
    Ok(Json(state.theme.toggle().await?.into()))
}
