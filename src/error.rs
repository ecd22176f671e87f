// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing user input. Recovered locally, user re-prompted.
    #[error("{0}")]
    BadRequest(String),

    /// The generative API failed (network, quota, malformed response).
    /// Surfaced to the user, not retried.
    #[error("{0}")]
    Upstream(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(msg) => {
                tracing::warn!(error = %msg, "generative API request failed");
                StatusCode::BAD_GATEWAY
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
