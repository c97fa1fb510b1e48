use crate::services::{EventsService, TicketsService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Event orchestration over the configured repository.
    pub events: EventsService,
    /// Read-only ticket lookups.
    pub tickets: TicketsService,
    /// Label for the active storage backend, reported by the health check.
    pub store: &'static str,
}
