//! Domain models

pub mod movie;

pub use movie::{Movie, MovieResponse, MovieUpdate, NewMovie};
