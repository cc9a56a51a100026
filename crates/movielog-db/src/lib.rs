//! Movielog Database Library
//!
//! This crate provides the movie record store: the `MovieStore` trait and its
//! Postgres implementation.

pub mod db;

pub use db::{MovieRepository, MovieStore};
