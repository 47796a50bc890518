//! pagekit HTTP integration.
//!
//! Exposes the axum pagination layer, its downstream extractors, HTTP error
//! mapping and the demo router so integration tests and the binary
//! entrypoint share the same building blocks.

pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
