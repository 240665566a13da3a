//! Game endpoints.

use crate::error::{ApiError, ApiResult};
use crate::handlers::common::{parse_json, parse_record_id};
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use gamedex_core::{Game, GamePayload};
use gamedex_store::GameRepo;
use serde::Deserialize;

/// Body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Successfully deleted";

/// Query for `GET /game`.
#[derive(Debug, Deserialize)]
pub struct GameByNameQuery {
    pub name: Option<String>,
}

/// POST /game - Add a game.
///
/// Any `id` in the body is ignored. Responds with every game, including
/// the new one.
pub async fn create_game(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Vec<Game>>> {
    let payload: GamePayload = parse_json(&body)?;
    let games = state.store.add_game(&payload.into_draft()).await?;
    Ok(Json(games))
}

/// GET /games - List all games.
pub async fn list_games(State(state): State<AppState>) -> ApiResult<Json<Vec<Game>>> {
    Ok(Json(state.store.list_games().await?))
}

/// GET /game/{id} - Get a game by ID.
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Game>> {
    let id = parse_record_id(&id)?;

    let game = state
        .store
        .get_game(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("game with ID {id} not found")))?;

    Ok(Json(game))
}

/// GET /game?name= - Get a game by name, ignoring case.
pub async fn get_game_by_name(
    State(state): State<AppState>,
    query: Result<Query<GameByNameQuery>, QueryRejection>,
) -> ApiResult<Json<Game>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let name = query
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("game name is required".to_string()))?;

    let game = state
        .store
        .get_game_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("game with name '{name}' not found")))?;

    Ok(Json(game))
}

/// PUT /game - Replace an existing game.
///
/// The body must carry the ID of the game to replace.
pub async fn update_game(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Game>> {
    let payload: GamePayload = parse_json(&body)?;
    let game = payload
        .into_game()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if state.store.get_game(game.id).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "game with ID {} not found",
            game.id
        )));
    }

    // The game can vanish between the check and the replace.
    if !state.store.update_game(&game).await? {
        return Err(ApiError::NotFound(format!(
            "game with ID {} not found",
            game.id
        )));
    }
    tracing::info!(game_id = %game.id, "Game updated");

    Ok(Json(game))
}

/// DELETE /game/{id} - Delete a game.
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<&'static str>> {
    let id = parse_record_id(&id)?;

    if state.store.get_game(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("game with ID {id} not found")));
    }

    if !state.store.delete_game(id).await? {
        return Err(ApiError::NotFound(format!("game with ID {id} not found")));
    }
    tracing::info!(game_id = %id, "Game deleted");

    Ok(Json(DELETED_MESSAGE))
}
