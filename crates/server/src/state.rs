//! Application state shared across handlers.

use gamedex_core::config::AppConfig;
use gamedex_store::RecordStore;
use std::sync::Arc;

/// Shared application state.
///
/// One record store per process, shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record store gateway.
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
