//! Movielog API
//!
//! Axum HTTP service exposing CRUD over movie records, with image binaries
//! offloaded to the storage backend. Exposed as a library so integration
//! tests can assemble the router with test doubles.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
