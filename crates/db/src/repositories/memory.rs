//! In-memory repository backends.
//!
//! Used by the integration-test harness and as a fallback store when no
//! `DATABASE_URL` is configured. Insertion order is preserved so listings
//! behave like the PostgreSQL backend's `ORDER BY created_at`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::RepoError;
use crate::models::{CreateEvent, Event, Ticket, UpdateEvent};
use crate::repositories::{EventRepository, TicketRepository};

/// Event storage held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, RepoError> {
        Ok(self.events.read().await.clone())
    }

    async fn create(&self, input: CreateEvent) -> Result<Event, RepoError> {
        let event = Event {
            event_id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            venue: input.venue,
            starts_at: input.starts_at,
        };
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn update(&self, event_id: &str, changes: UpdateEvent) -> Result<Event, RepoError> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.event_id == event_id)
            .ok_or_else(|| RepoError::NotFound {
                entity: "Event",
                id: event_id.to_string(),
            })?;

        if let Some(name) = changes.name {
            event.name = name;
        }
        if let Some(description) = changes.description {
            event.description = Some(description);
        }
        if let Some(venue) = changes.venue {
            event.venue = Some(venue);
        }
        if let Some(starts_at) = changes.starts_at {
            event.starts_at = Some(starts_at);
        }
        Ok(event.clone())
    }

    async fn delete(&self, event_id: &str) -> Result<(), RepoError> {
        // Deleting an unknown id succeeds, matching the PostgreSQL backend.
        self.events.write().await.retain(|e| e.event_id != event_id);
        Ok(())
    }
}

/// Ticket storage held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<Vec<Ticket>>,
}

impl InMemoryTicketRepository {
    /// A store pre-populated with the given tickets.
    pub fn seeded(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: RwLock::new(tickets),
        }
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Ticket>, RepoError> {
        Ok(self
            .tickets
            .read()
            .await
            .iter()
            .filter(|t| t.event_id == event_id)
            .cloned()
            .collect())
    }
}
