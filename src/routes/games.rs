use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::{CreateGamePayload, DeleteGameQuery, GameView};
use crate::services::games;

// GET /games - List all games with category, status and teams
pub async fn get_games(
    State(pool): State<SqlitePool>,
) -> ApiResult<Json<Vec<GameView>>> {
    let games = games::list_games(&pool).await?;
    Ok(Json(games))
}

// GET /games/{game_id} - Get a game together with its events
pub async fn get_game_by_id(
    State(pool): State<SqlitePool>,
    ApiPath(game_id): ApiPath<i64>,
) -> ApiResult<Json<GameView>> {
    let game = games::get_game(&pool, game_id).await?;
    Ok(Json(game))
}

// POST /games - Schedule a game between two teams
pub async fn create_game(
    State(pool): State<SqlitePool>,
    ApiJson(payload): ApiJson<CreateGamePayload>,
) -> ApiResult<(StatusCode, Json<GameView>)> {
    let game = games::create_game(&pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

// DELETE /games/{game_id}?cascade=true - Delete a game (and its events when cascading)
pub async fn delete_game(
    State(pool): State<SqlitePool>,
    ApiPath(game_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<DeleteGameQuery>,
) -> ApiResult<Json<GameView>> {
    let game = games::delete_game(&pool, game_id, params.cascade).await?;
    Ok(Json(game))
}
