//! HTTP request handlers.

pub mod common;
pub mod games;
pub mod health;

pub use common::*;
pub use games::*;
pub use health::*;
