use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub enum StubError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("An internal error occurred")]
    Internal(String),
}

impl StubError {
    pub(crate) fn malformed_body(value: serde_json::Error) -> Self {
        warn!("Rejecting request body: {}", value);
        StubError::MalformedBody(format!("{}", value))
    }

    pub(crate) fn internal(value: impl std::fmt::Display) -> Self {
        error!("{}", value);
        StubError::Internal(format!("{}", value))
    }
}

impl From<std::io::Error> for StubError {
    fn from(value: std::io::Error) -> Self {
        StubError::internal(value)
    }
}

impl From<SetGlobalDefaultError> for StubError {
    fn from(value: SetGlobalDefaultError) -> Self {
        StubError::internal(value)
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            StubError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            StubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
