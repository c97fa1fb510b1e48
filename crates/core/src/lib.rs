//! Domain-level building blocks shared by the db and api crates:
//! the error taxonomy, common type aliases, and the event-id format rule.

pub mod error;
pub mod ids;
pub mod types;
