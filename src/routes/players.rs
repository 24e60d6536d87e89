use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Player, PlayerPayload};
use crate::services::roster;

// GET /players - List all players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> ApiResult<Json<Vec<Player>>> {
    let players = roster::list_players(&pool).await?;
    Ok(Json(players))
}

// GET /players/{player_id} - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    ApiPath(player_id): ApiPath<i64>,
) -> ApiResult<Json<Player>> {
    let player = roster::get_player(&pool, player_id).await?;
    Ok(Json(player))
}

// POST /players - Create a player
pub async fn create_player(
    State(pool): State<SqlitePool>,
    ApiJson(payload): ApiJson<PlayerPayload>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let player = roster::create_player(&pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

// PUT /players/{player_id} - Replace every field of a player
pub async fn replace_player(
    State(pool): State<SqlitePool>,
    ApiPath(player_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<PlayerPayload>,
) -> ApiResult<Json<Player>> {
    let player = roster::replace_player(&pool, player_id, &payload).await?;
    Ok(Json(player))
}

// DELETE /players/{player_id} - Delete a player
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    ApiPath(player_id): ApiPath<i64>,
) -> ApiResult<Json<Player>> {
    let player = roster::delete_player(&pool, player_id).await?;
    Ok(Json(player))
}
