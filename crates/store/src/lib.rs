//! Record store gateway for gamedex.
//!
//! This crate owns every document-store operation:
//! - The collection-scoped [`RecordStore`] gateway and its MongoDB and
//!   in-memory implementations
//! - Typed game access and lookup normalization ([`repos`])
//! - Stored document shapes ([`models`])

pub mod error;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repos;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{GAMES_COLLECTION, GameRow, LookupKind};
pub use mongo::MongoStore;
pub use repos::{GameRepo, LookupRepo};
pub use store::{Filter, RecordStore};

use gamedex_core::config::{StoreConfig, StoreKind};
use std::sync::Arc;

/// Create a record store from configuration.
///
/// Missing or blank mongo settings fail with [`StoreError::Config`].
pub async fn from_config(config: &StoreConfig) -> StoreResult<Arc<dyn RecordStore>> {
    config
        .validate()
        .map_err(|e| StoreError::Config(e.to_string()))?;

    match config.kind {
        StoreKind::Mongo => {
            let connection_string = config.connection_string.as_deref().unwrap_or_default();
            let database_name = config.database_name.as_deref().unwrap_or_default();
            let store = MongoStore::connect(connection_string, database_name).await?;
            Ok(Arc::new(store) as Arc<dyn RecordStore>)
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory record store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn RecordStore>)
        }
    }
}
