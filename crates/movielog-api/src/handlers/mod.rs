//! Request handlers (HTTP boundary)

pub mod health;
pub mod movie_create;
pub mod movie_delete;
pub mod movie_get;
pub mod movie_list;
pub mod movie_update;
