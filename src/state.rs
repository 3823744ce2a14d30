use crate::config::AppConfig;
use crate::models::LogStore;
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;

/// Handle to the one log store, shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub data: Arc<Mutex<LogStore>>,
}

impl AppState {
    pub fn new(config: AppConfig, data: LogStore) -> Self {
        Self {
            config: Arc::new(config),
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.config.data_path
    }
}
