//! Entity models.
//!
//! Plain row structs deriving `FromRow` for the PostgreSQL backend; the
//! in-memory backend stores them directly. Field names serialize in the
//! camelCase wire format the API contract uses.

pub mod event;
pub mod ticket;

pub use event::{CreateEvent, Event, UpdateEvent};
pub use ticket::Ticket;
