use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request-terminal failures. Validation and not-found map to client errors;
/// provider and storage failures are logged and masked as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    #[error("provider call failed")]
    Provider(anyhow::Error),

    #[error("storage failure")]
    Storage(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            ApiError::Provider(cause) => {
                tracing::error!(error = %cause, "provider call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error")
            }
            ApiError::Storage(cause) => {
                tracing::error!(error = %cause, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error")
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
