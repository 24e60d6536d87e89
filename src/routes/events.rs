use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreateGameEventPayload, GameEventView};
use crate::services::events;

// GET /games/{game_id}/events - List a game's events
pub async fn get_game_events(
    State(pool): State<SqlitePool>,
    ApiPath(game_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<GameEventView>>> {
    let events = events::list_events(&pool, game_id).await?;
    Ok(Json(events))
}

// GET /games/{game_id}/events/{event_id} - Get a single event of a game
pub async fn get_game_event(
    State(pool): State<SqlitePool>,
    ApiPath((game_id, event_id)): ApiPath<(i64, i64)>,
) -> ApiResult<Json<GameEventView>> {
    let event = events::get_event(&pool, game_id, event_id).await?;
    Ok(Json(event))
}

// POST /games/{game_id}/events - Record an event
pub async fn create_game_event(
    State(pool): State<SqlitePool>,
    ApiPath(game_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CreateGameEventPayload>,
) -> ApiResult<(StatusCode, Json<GameEventView>)> {
    let event = events::create_event(&pool, game_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

// DELETE /games/{game_id}/events/{event_id} - Remove an event
pub async fn delete_game_event(
    State(pool): State<SqlitePool>,
    ApiPath((game_id, event_id)): ApiPath<(i64, i64)>,
) -> ApiResult<Json<GameEventView>> {
    let event = events::delete_event(&pool, game_id, event_id).await?;
    Ok(Json(event))
}
