//! Route definitions for the events resource.
//!
//! ```text
//! GET    /                     -> list_events
//! POST   /                     -> create_event
//! GET    /{eventId}/tickets    -> list_event_tickets
//! PUT    /{eventId}            -> update_event
//! DELETE /{eventId}            -> delete_event
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/{eventId}/tickets", get(events::list_event_tickets))
        .route(
            "/{eventId}",
            put(events::update_event).delete(events::delete_event),
        )
}
