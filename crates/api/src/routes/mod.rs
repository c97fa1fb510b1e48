pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /events                      GET list, POST create
/// /events/{eventId}            PUT update, DELETE delete
/// /events/{eventId}/tickets    GET list tickets
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/events", events::router())
}
