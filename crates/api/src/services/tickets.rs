//! Read-only ticket lookups over a [`TicketRepository`].

use std::sync::Arc;

use tessera_core::error::CoreError;
use tessera_db::models::Ticket;
use tessera_db::repositories::TicketRepository;

#[derive(Clone)]
pub struct TicketsService {
    repo: Arc<dyn TicketRepository>,
}

impl TicketsService {
    pub fn new(repo: Arc<dyn TicketRepository>) -> Self {
        Self { repo }
    }

    /// Tickets for the given event. An empty collection is a normal result;
    /// the handler decides whether that maps to a 404.
    pub async fn get_tickets_by_event_id(&self, event_id: &str) -> Result<Vec<Ticket>, CoreError> {
        self.repo.list_by_event(event_id).await.map_err(|err| {
            tracing::error!(error = %err, event_id, "could not list tickets");
            CoreError::persistence("list tickets", err)
        })
    }
}
