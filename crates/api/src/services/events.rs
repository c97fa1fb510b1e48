//! Event orchestration over an [`EventRepository`].
//!
//! Repository failures are logged here and wrapped in tagged
//! [`CoreError`] variants that keep the original cause attached, so the
//! HTTP layer can map "missing event" and "storage failure" differently.

use std::sync::Arc;

use tessera_core::error::CoreError;
use tessera_db::models::{CreateEvent, Event, UpdateEvent};
use tessera_db::repositories::EventRepository;
use tessera_db::RepoError;

/// Event CRUD pass-through with error translation.
#[derive(Clone)]
pub struct EventsService {
    repo: Arc<dyn EventRepository>,
}

impl EventsService {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// All events. Search parameters are accepted by the route but never
    /// applied here.
    pub async fn get_events(&self) -> Result<Vec<Event>, CoreError> {
        self.repo.list().await.map_err(|err| {
            tracing::error!(error = %err, "could not list events");
            CoreError::persistence("list events", err)
        })
    }

    pub async fn create_event(&self, input: CreateEvent) -> Result<Event, CoreError> {
        self.repo.create(input).await.map_err(|err| {
            tracing::error!(error = %err, "could not create event");
            CoreError::persistence("create event", err)
        })
    }

    /// Apply a partial update. A missing event surfaces as
    /// [`CoreError::NotFound`] rather than a generic failure.
    pub async fn update_event_by_id(
        &self,
        event_id: &str,
        changes: UpdateEvent,
    ) -> Result<Event, CoreError> {
        self.repo
            .update(event_id, changes)
            .await
            .map_err(|err| match err {
                RepoError::NotFound { entity, id } => CoreError::NotFound { entity, id },
                other => {
                    tracing::error!(error = %other, event_id, "could not update event");
                    CoreError::persistence("update event", other)
                }
            })
    }

    /// Delete by id. No existence check is performed; deleting an unknown
    /// id succeeds.
    pub async fn delete_event_by_id(&self, event_id: &str) -> Result<(), CoreError> {
        self.repo.delete(event_id).await.map_err(|err| {
            tracing::error!(error = %err, event_id, "could not delete event");
            CoreError::persistence("delete event", err)
        })
    }
}
