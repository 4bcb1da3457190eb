// Application state module
// Holds the configuration and the process-wide customer store

use std::sync::Arc;

use super::types::Config;
use crate::store::CustomerStore;

/// Application state shared by every connection
pub struct AppState {
    pub config: Config,
    pub store: Arc<CustomerStore>,
}

impl AppState {
    pub fn new(config: Config, store: CustomerStore) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }
}
