//! Per-route request counter.

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use ll_telemetry::API_REQUESTS;

/// Label used when no route matched.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Count the request against its route template, not the raw path.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let response = next.run(request).await;
    ll_telemetry::metric_inc!(API_REQUESTS, &[route.as_str()]);
    response
}
