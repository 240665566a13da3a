//! Core domain types for the gamedex catalog service.
//!
//! This crate defines the data model shared by the store and the server:
//! - Record identifiers and their external string form
//! - Game records and request payloads
//! - Configuration types

pub mod config;
pub mod error;
pub mod game;
pub mod id;

pub use error::{Error, Result};
pub use game::{Game, GameDraft, GamePayload};
pub use id::RecordId;
