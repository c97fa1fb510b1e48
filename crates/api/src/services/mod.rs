//! Service layer: orchestrates repository calls and translates repository
//! failures into the tagged [`tessera_core::error::CoreError`] variants.

pub mod events;
pub mod tickets;

pub use events::EventsService;
pub use tickets::TicketsService;
