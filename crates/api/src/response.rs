//! Shared response envelope for API handlers.
//!
//! Successful responses use a `{ "message": ..., "data": ... }` envelope.
//! Use [`MessageResponse`] instead of ad-hoc `serde_json::json!` maps to
//! get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ..., "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
