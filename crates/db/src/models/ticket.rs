//! Ticket entity model. Tickets are read-only from this service.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tickets` table. Each ticket belongs to exactly one event.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "ticketId")]
    pub ticket_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(rename = "priceCents")]
    pub price_cents: i64,
}
