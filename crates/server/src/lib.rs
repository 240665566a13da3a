//! HTTP API server for the gamedex catalog.
//!
//! This crate provides the HTTP surface over the record store:
//! - Game create/read/update/delete endpoints
//! - Error-to-status mapping
//! - Request tracing and CORS

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod trace;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
