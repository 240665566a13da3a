//! Record store error types.

use thiserror::Error;

/// Record store operation errors.
///
/// A missing record is never an error here; lookups return `Option`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] mongodb::error::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[from] bson::de::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
