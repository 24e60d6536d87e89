use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::error::ApiResult;
use crate::models::{Lookup, LookupTable};
use crate::services;

// GET /genders
pub async fn get_genders(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<Lookup>>> {
    Ok(Json(services::list_lookups(&pool, LookupTable::Gender).await?))
}

// GET /game-categories
pub async fn get_game_categories(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<Lookup>>> {
    Ok(Json(services::list_lookups(&pool, LookupTable::GameCategory).await?))
}

// GET /game-statuses
pub async fn get_game_statuses(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<Lookup>>> {
    Ok(Json(services::list_lookups(&pool, LookupTable::GameStatus).await?))
}

// GET /game-event-types
pub async fn get_game_event_types(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<Lookup>>> {
    Ok(Json(services::list_lookups(&pool, LookupTable::GameEventType).await?))
}
