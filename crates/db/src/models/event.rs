//! Event entity model and its write DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tessera_core::types::Timestamp;

/// A row from the `events` table.
///
/// Optional fields are omitted from JSON when absent, so a minimal event
/// serializes as `{"eventId": "...", "name": "..."}`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(rename = "startsAt", skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
}

/// Fields for inserting a new event. The id is generated by the repository.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub name: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<Timestamp>,
}

/// Partial update for an existing event. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<Timestamp>,
}
