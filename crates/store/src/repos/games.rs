//! Game repository.

use crate::error::StoreResult;
use crate::models::{GAMES_COLLECTION, GameRow};
use crate::repos::lookups::LookupRepo;
use crate::store::{Filter, RecordStore};
use async_trait::async_trait;
use bson::Document;
use gamedex_core::{Game, GameDraft, RecordId};

/// Repository for game records.
#[async_trait]
pub trait GameRepo: Send + Sync {
    /// List every game, in store order.
    async fn list_games(&self) -> StoreResult<Vec<Game>>;

    /// Get a game by ID.
    async fn get_game(&self, id: RecordId) -> StoreResult<Option<Game>>;

    /// Get the first game whose name matches, ignoring case.
    async fn get_game_by_name(&self, name: &str) -> StoreResult<Option<Game>>;

    /// Ensure the game's lookup values exist, insert it, and return every
    /// game including the new one.
    async fn add_game(&self, draft: &GameDraft) -> StoreResult<Vec<Game>>;

    /// Replace an existing game. Returns `false` (and inserts nothing) if
    /// no game has that ID.
    async fn update_game(&self, game: &Game) -> StoreResult<bool>;

    /// Delete a game by ID. Returns `false` if it did not exist.
    async fn delete_game(&self, id: RecordId) -> StoreResult<bool>;
}

fn to_game(doc: Document) -> StoreResult<Game> {
    GameRow::from_document(doc)?.into_game()
}

#[async_trait]
impl<S: RecordStore + ?Sized> GameRepo for S {
    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        self.find_all(GAMES_COLLECTION)
            .await?
            .into_iter()
            .map(to_game)
            .collect()
    }

    async fn get_game(&self, id: RecordId) -> StoreResult<Option<Game>> {
        self.find_by_id(GAMES_COLLECTION, id)
            .await?
            .map(to_game)
            .transpose()
    }

    async fn get_game_by_name(&self, name: &str) -> StoreResult<Option<Game>> {
        let filter = Filter::eq_ignore_case("Name", name);
        self.find_one(GAMES_COLLECTION, &filter)
            .await?
            .map(to_game)
            .transpose()
    }

    async fn add_game(&self, draft: &GameDraft) -> StoreResult<Vec<Game>> {
        self.ensure_lookups(draft).await?;

        let doc = GameRow::from_draft(draft).to_document()?;
        let id = self.insert(GAMES_COLLECTION, doc).await?;
        tracing::info!(game_id = %id, name = %draft.name, "Game added");

        self.list_games().await
    }

    async fn update_game(&self, game: &Game) -> StoreResult<bool> {
        let doc = GameRow::from_game(game).to_document()?;
        self.replace(GAMES_COLLECTION, game.id, doc).await
    }

    async fn delete_game(&self, id: RecordId) -> StoreResult<bool> {
        self.delete(GAMES_COLLECTION, id).await
    }
}
