use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tessera_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input failed validation. `errors` holds the itemized
    /// per-field messages, or a single fallback message when the raw input
    /// could not be deserialized at all.
    #[error("Bad Request")]
    Validation { errors: Vec<String> },

    /// A resource was not found, with the exact response message.
    #[error("{0}")]
    NotFound(String),

    /// A domain-level error from `tessera_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// A validation failure carrying a single fallback message.
    pub fn validation_fallback(message: &str) -> Self {
        AppError::Validation {
            errors: vec![message.to_string()],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Bad Request", "errors": errors }),
            ),

            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, json!({ "message": message }))
            }

            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": "Bad Request", "errors": [msg] }),
                ),
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        json!({ "message": format!("{entity} not found") }),
                    )
                }
                // Persistence details were logged by the service layer; the
                // caller only sees a generic failure.
                CoreError::Persistence { op, .. } => {
                    tracing::error!(op = %op, "persistence failure reached the HTTP layer");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "message": "Internal Server Error" }),
                    )
                }
            },
        };

        (status, axum::Json(body)).into_response()
    }
}
