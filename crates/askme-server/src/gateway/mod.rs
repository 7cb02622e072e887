//! HTTP gateway (Axum) for FAQ queries.
//!
//! This module is primarily used by the `askme` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use askme::TermWeighting;

pub use handler::query_handler;
pub use state::HandlerState;

/// Response header naming the band a query was routed to.
pub const ASKME_ROUTE_HEADER: &str = "x-askme-route";
pub const ROUTE_INVALID_REQUEST: &str = "invalid_request";

pub const ASKME_STATUS_HEADER: &str = "x-askme-status";
pub const ASKME_STATUS_HEALTHY: &str = "healthy";
pub const ASKME_STATUS_READY: &str = "ready";

pub fn create_router_with_state(state: HandlerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/query", post(query_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin when `origins` is empty, otherwise exactly the listed ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub entries: usize,
    pub fingerprint: String,
    pub vectorizer: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        ASKME_STATUS_HEADER,
        HeaderValue::from_static(ASKME_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// The index is built before the listener binds, so a serving process is always ready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let index = state.router.index();

    let mut headers = HeaderMap::new();
    headers.insert(
        ASKME_STATUS_HEADER,
        HeaderValue::from_static(ASKME_STATUS_READY),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            entries: index.len(),
            fingerprint: index.fingerprint().to_string(),
            vectorizer: index.model().name(),
        }),
    )
        .into_response()
}
