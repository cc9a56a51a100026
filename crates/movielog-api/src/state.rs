//! Application state.
//!
//! Dependencies (record store, storage backend) are explicitly constructed in
//! `setup` and injected here, so tests can substitute doubles for either.

use movielog_core::Config;
use movielog_db::MovieStore;
use movielog_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub movies: Arc<dyn MovieStore>,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, movies: Arc<dyn MovieStore>, storage: Arc<dyn Storage>) -> Self {
        Self {
            config,
            movies,
            storage,
        }
    }
}
