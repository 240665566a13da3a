//! Shared handler helpers.

use crate::error::{ApiError, ApiResult};
use gamedex_core::RecordId;
use serde::de::DeserializeOwned;

/// Decode a JSON request body.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(bytes).map_err(|e| ApiError::BadRequest(format!("invalid JSON: {e}")))
}

/// Decode a record ID from a path segment.
pub fn parse_record_id(raw: &str) -> ApiResult<RecordId> {
    RecordId::parse(raw).map_err(|e| ApiError::BadRequest(format!("invalid ID format: {e}")))
}
