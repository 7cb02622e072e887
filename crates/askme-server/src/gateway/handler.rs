use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, warn};

use super::ASKME_ROUTE_HEADER;
use super::error::GatewayError;
use super::state::HandlerState;

/// Pulls a non-empty string `q` out of a JSON request body.
///
/// Anything else (no body, malformed JSON, a non-object, `q` missing, `q` not a string, `q`
/// empty) is the same client error.
pub fn query_from_body(body: &[u8]) -> Result<String, GatewayError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| GatewayError::EmptyQuery)?;

    match value.get("q").and_then(Value::as_str) {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => Err(GatewayError::EmptyQuery),
    }
}

#[tracing::instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn query_handler(State(state): State<HandlerState>, body: Bytes) -> Response {
    match answer_query(&state, &body) {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "Rejected query");
            err.into_response()
        }
    }
}

fn answer_query(state: &HandlerState, body: &[u8]) -> Result<Response, GatewayError> {
    let query = query_from_body(body)?;
    let response = state.router.route(&query)?;

    debug!(decision = %response.decision, "Answered query");

    let mut headers = HeaderMap::new();
    headers.insert(
        ASKME_ROUTE_HEADER,
        HeaderValue::from_static(response.decision.label()),
    );

    Ok((StatusCode::OK, headers, Json(response)).into_response())
}
