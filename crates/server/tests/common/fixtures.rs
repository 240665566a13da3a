//! Test fixtures for game payloads.

use serde_json::{Value, json};

/// A well-formed create payload.
#[allow(dead_code)]
pub fn game_payload(name: &str, genre: &str, release_year: i32, developer: &str) -> Value {
    json!({
        "name": name,
        "genre": genre,
        "releaseYear": release_year,
        "developer": developer,
    })
}

/// The payload used by most tests.
#[allow(dead_code)]
pub fn stray() -> Value {
    game_payload("Stray", "Adventure", 2022, "BlueTwelve Studio")
}

/// A syntactically valid record ID that no store has issued.
#[allow(dead_code)]
pub const UNKNOWN_ID: &str = "0123456789abcdef01234567";
