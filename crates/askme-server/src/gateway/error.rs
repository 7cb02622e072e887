use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use askme::ScoringError;

use super::{ASKME_ROUTE_HEADER, ROUTE_INVALID_REQUEST};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body missing, not JSON, or `q` absent, empty or not a string.
    #[error("query vazia")]
    EmptyQuery,

    #[error("scoring failed: {0}")]
    ScoringFailed(ScoringError),
}

impl From<ScoringError> for GatewayError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::EmptyQuery => GatewayError::EmptyQuery,
            other => GatewayError::ScoringFailed(other),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, route_status) = match &self {
            GatewayError::EmptyQuery => (StatusCode::BAD_REQUEST, ROUTE_INVALID_REQUEST),
            GatewayError::ScoringFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "scoring_error"),
        };

        let mut headers = HeaderMap::new();
        headers.insert(ASKME_ROUTE_HEADER, HeaderValue::from_static(route_status));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
