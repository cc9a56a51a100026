//! Database repositories for the data access layer
//!
//! Repositories are responsible for a specific domain entity and provide CRUD
//! operations. The `MovieStore` trait fronts the Postgres repository so the
//! HTTP layer can be exercised against a test double.

pub mod movies;

pub use movies::{MovieRepository, MovieStore};
