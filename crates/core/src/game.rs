//! Game records and request payloads.

use crate::error::Error;
use crate::id::RecordId;
use serde::{Deserialize, Serialize};

/// A stored game record as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: RecordId,
    pub name: String,
    pub genre: String,
    pub release_year: i32,
    pub developer: String,
}

impl Game {
    /// Attach an identifier to a draft.
    pub fn from_draft(id: RecordId, draft: GameDraft) -> Self {
        Self {
            id,
            name: draft.name,
            genre: draft.genre,
            release_year: draft.release_year,
            developer: draft.developer,
        }
    }
}

/// Game fields without an identifier, as accepted on create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub genre: String,
    pub release_year: i32,
    pub developer: String,
}

/// Request body for `POST /game` and `PUT /game`.
///
/// `id` is ignored on create and required on update.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub genre: String,
    pub release_year: i32,
    pub developer: String,
}

impl GamePayload {
    /// Drop the client identifier, keeping only the fields.
    pub fn into_draft(self) -> GameDraft {
        GameDraft {
            name: self.name,
            genre: self.genre,
            release_year: self.release_year,
            developer: self.developer,
        }
    }

    /// Decode the identifier and build the full record (update path).
    pub fn into_game(self) -> crate::Result<Game> {
        let id = match self.id.as_deref() {
            Some(raw) => RecordId::parse(raw)?,
            None => return Err(Error::InvalidId("record id is required".to_string())),
        };
        Ok(Game::from_draft(id, self.into_draft()))
    }
}
