//! Configuration types shared across crates.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Record store backend.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// MongoDB document database.
    #[default]
    Mongo,
    /// Process-local store. Contents are lost on exit.
    Memory,
}

/// Record store configuration.
///
/// For the mongo backend both `connection_string` and `database_name` are
/// required; the server refuses to start without them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend kind (default: mongo).
    #[serde(default)]
    pub kind: StoreKind,
    /// MongoDB connection string (e.g., "mongodb://localhost:27017").
    #[serde(default)]
    pub connection_string: Option<String>,
    /// Database holding the games and lookup collections.
    #[serde(default)]
    pub database_name: Option<String>,
}

impl StoreConfig {
    /// MongoDB configuration.
    pub fn mongo(connection_string: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            kind: StoreKind::Mongo,
            connection_string: Some(connection_string.into()),
            database_name: Some(database_name.into()),
        }
    }

    /// In-memory configuration.
    pub fn memory() -> Self {
        Self {
            kind: StoreKind::Memory,
            connection_string: None,
            database_name: None,
        }
    }

    /// Reject missing or blank mongo settings.
    pub fn validate(&self) -> crate::Result<()> {
        if self.kind == StoreKind::Memory {
            return Ok(());
        }
        if is_blank(self.connection_string.as_deref()) {
            return Err(Error::Config(
                "store.connection_string is not set".to_string(),
            ));
        }
        if is_blank(self.database_name.as_deref()) {
            return Err(Error::Config("store.database_name is not set".to_string()));
        }
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Record store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Create a test configuration backed by the in-memory store.
    ///
    /// **For testing only.**
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::memory(),
        }
    }
}
