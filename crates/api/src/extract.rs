//! Validated request extractors.
//!
//! Each request part (query string, JSON body, path parameters) gets a
//! wrapper extractor that deserializes the raw input and runs the DTO's
//! `validator` rules before the handler sees it. The parsed value is handed
//! to the handler as its own argument; nothing is written back into other
//! request slots.
//!
//! Failure shape matches the API contract: when the DTO's schema rules are
//! violated, `errors` lists the per-field messages; when the raw input
//! cannot even be deserialized, `errors` is the DTO's single fallback
//! message (e.g. "Invalid event id params").

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// The category message reported when a DTO cannot be deserialized at all.
pub trait FallbackMessage {
    const FALLBACK: &'static str;
}

/// Query-string DTO, deserialized and validated.
pub struct ValidatedQuery<T>(pub T);

/// JSON-body DTO, deserialized and validated.
pub struct ValidatedJson<T>(pub T);

/// Path-parameter DTO, deserialized and validated.
pub struct ValidatedParams<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + FallbackMessage + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation_fallback(T::FALLBACK))?;
        check(&value)?;
        Ok(ValidatedQuery(value))
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FallbackMessage + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::validation_fallback(T::FALLBACK))?;
        check(&value)?;
        Ok(ValidatedJson(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedParams<T>
where
    T: DeserializeOwned + Validate + FallbackMessage + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation_fallback(T::FALLBACK))?;
        check(&value)?;
        Ok(ValidatedParams(value))
    }
}

fn check<T: Validate>(value: &T) -> Result<(), AppError> {
    value.validate().map_err(|errors| AppError::Validation {
        errors: collect_messages(&errors),
    })
}

/// Flatten `validator` field errors into sorted human-readable messages.
fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    // Field error maps have no stable iteration order.
    messages.sort();
    messages
}
