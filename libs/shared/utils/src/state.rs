use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::{ClinicStore, SupabaseClient};

/// Shared by every handler. Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn ClinicStore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(SupabaseClient::new(&config));
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn ClinicStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
