//! Tessera API server library.
//!
//! Exposes the building blocks (config, state, error handling, extractors,
//! services, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
