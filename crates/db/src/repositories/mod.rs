//! Repository layer.
//!
//! The service layer talks to storage through the object-safe
//! [`EventRepository`] and [`TicketRepository`] traits. Two backends are
//! provided: PostgreSQL for production and an in-memory store used by the
//! test harness and as a fallback when no database is configured.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::RepoError;
use crate::models::{CreateEvent, Event, Ticket, UpdateEvent};

pub use memory::{InMemoryEventRepository, InMemoryTicketRepository};
pub use postgres::{PgEventRepository, PgTicketRepository};

/// Storage contract for events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events, in storage order.
    async fn list(&self) -> Result<Vec<Event>, RepoError>;

    /// Insert a new event, generating its id.
    async fn create(&self, input: CreateEvent) -> Result<Event, RepoError>;

    /// Apply a partial update. Fails with [`RepoError::NotFound`] when the
    /// event does not exist.
    async fn update(&self, event_id: &str, changes: UpdateEvent) -> Result<Event, RepoError>;

    /// Remove an event. Deleting an unknown id is not an error.
    async fn delete(&self, event_id: &str) -> Result<(), RepoError>;
}

/// Storage contract for tickets (read-only from this service).
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// All tickets belonging to the given event.
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Ticket>, RepoError>;
}
