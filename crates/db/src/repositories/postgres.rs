//! PostgreSQL repository backends for the `events` and `tickets` tables.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepoError;
use crate::models::{CreateEvent, Event, Ticket, UpdateEvent};
use crate::repositories::{EventRepository, TicketRepository};
use crate::DbPool;

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "event_id, name, description, venue, starts_at";

/// Column list for `tickets` queries.
const TICKET_COLUMNS: &str = "ticket_id, event_id, seat, price_cents";

/// Event storage backed by PostgreSQL.
#[derive(Clone)]
pub struct PgEventRepository {
    pool: DbPool,
}

impl PgEventRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self) -> Result<Vec<Event>, RepoError> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at");
        let events = sqlx::query_as::<_, Event>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn create(&self, input: CreateEvent) -> Result<Event, RepoError> {
        let event_id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO events (event_id, name, description, venue, starts_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(&event_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.venue)
            .bind(input.starts_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(event)
    }

    async fn update(&self, event_id: &str, changes: UpdateEvent) -> Result<Event, RepoError> {
        // COALESCE keeps columns untouched when the corresponding field is
        // absent from the update payload.
        let query = format!(
            "UPDATE events SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                venue = COALESCE($4, venue), \
                starts_at = COALESCE($5, starts_at) \
             WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(&changes.venue)
            .bind(changes.starts_at)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(|| RepoError::NotFound {
            entity: "Event",
            id: event_id.to_string(),
        })
    }

    async fn delete(&self, event_id: &str) -> Result<(), RepoError> {
        // Deleting an unknown id succeeds; the row count is not checked.
        sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Ticket storage backed by PostgreSQL.
#[derive(Clone)]
pub struct PgTicketRepository {
    pool: DbPool,
}

impl PgTicketRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Ticket>, RepoError> {
        let query =
            format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE event_id = $1 ORDER BY ticket_id");
        let tickets = sqlx::query_as::<_, Ticket>(&query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(tickets)
    }
}
