use std::sync::Arc;

use infra::SharedStore;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: SharedStore, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
