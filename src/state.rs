// src/state.rs
use std::sync::Arc;

use crate::services::gemini::TextGenerator;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub metrics: MetricsManager,
    pub admin_key: Option<String>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, admin_key: Option<String>) -> Self {
        Self {
            generator,
            metrics: MetricsManager::new(),
            admin_key,
        }
    }
}
