//! Stored document shapes.
//!
//! Field names match the documents already present in deployed databases:
//! game fields are PascalCase, lookup entries use `name` or `year`.

use crate::error::{StoreError, StoreResult};
use bson::oid::ObjectId;
use bson::{Bson, Document};
use gamedex_core::{Game, GameDraft, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection holding game records.
pub const GAMES_COLLECTION: &str = "Games";

/// Game record as stored in [`GAMES_COLLECTION`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRow {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub genre: String,
    pub release_year: i32,
    pub developer: String,
}

impl GameRow {
    /// Row for a new record. The identifier is left to the store.
    pub fn from_draft(draft: &GameDraft) -> Self {
        Self {
            id: None,
            name: draft.name.clone(),
            genre: draft.genre.clone(),
            release_year: draft.release_year,
            developer: draft.developer.clone(),
        }
    }

    pub fn from_game(game: &Game) -> Self {
        Self {
            id: Some(*game.id.as_object_id()),
            name: game.name.clone(),
            genre: game.genre.clone(),
            release_year: game.release_year,
            developer: game.developer.clone(),
        }
    }

    pub fn into_game(self) -> StoreResult<Game> {
        let id = self
            .id
            .ok_or_else(|| StoreError::Internal(format!("stored game '{}' has no _id", self.name)))?;
        Ok(Game {
            id: RecordId::from(id),
            name: self.name,
            genre: self.genre,
            release_year: self.release_year,
            developer: self.developer,
        })
    }

    pub fn to_document(&self) -> StoreResult<Document> {
        Ok(bson::to_document(self)?)
    }

    pub fn from_document(doc: Document) -> StoreResult<Self> {
        Ok(bson::from_document(doc)?)
    }
}

/// One of the four auxiliary value collections filled on insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Name,
    Genre,
    ReleaseYear,
    Developer,
}

impl LookupKind {
    /// All kinds, in the order they are ensured on insert.
    pub const ALL: [LookupKind; 4] = [
        LookupKind::Name,
        LookupKind::Genre,
        LookupKind::ReleaseYear,
        LookupKind::Developer,
    ];

    /// Backing collection name.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Genre => "Genre",
            Self::ReleaseYear => "ReleaseYear",
            Self::Developer => "Developer",
        }
    }

    /// Field holding the value inside a lookup entry.
    pub fn field(self) -> &'static str {
        match self {
            Self::ReleaseYear => "year",
            Self::Name | Self::Genre | Self::Developer => "name",
        }
    }

    /// The value of this kind carried by a game.
    pub fn value_of(self, draft: &GameDraft) -> Bson {
        match self {
            Self::Name => Bson::String(draft.name.clone()),
            Self::Genre => Bson::String(draft.genre.clone()),
            Self::ReleaseYear => Bson::Int32(draft.release_year),
            Self::Developer => Bson::String(draft.developer.clone()),
        }
    }

    /// Single-field entry document for `value`.
    pub fn entry(self, value: Bson) -> Document {
        let mut doc = Document::new();
        doc.insert(self.field(), value);
        doc
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
