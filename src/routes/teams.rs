use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Team, TeamPayload};
use crate::services::roster;

// GET /teams - List all teams
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> ApiResult<Json<Vec<Team>>> {
    let teams = roster::list_teams(&pool).await?;
    Ok(Json(teams))
}

// GET /teams/{team_id} - Get team by ID
pub async fn get_team_by_id(
    State(pool): State<SqlitePool>,
    ApiPath(team_id): ApiPath<i64>,
) -> ApiResult<Json<Team>> {
    let team = roster::get_team(&pool, team_id).await?;
    Ok(Json(team))
}

// POST /teams - Create a team
pub async fn create_team(
    State(pool): State<SqlitePool>,
    ApiJson(payload): ApiJson<TeamPayload>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let team = roster::create_team(&pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

// PUT /teams/{team_id} - Replace a team
pub async fn replace_team(
    State(pool): State<SqlitePool>,
    ApiPath(team_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<TeamPayload>,
) -> ApiResult<Json<Team>> {
    let team = roster::replace_team(&pool, team_id, &payload).await?;
    Ok(Json(team))
}

// DELETE /teams/{team_id} - Delete a team
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    ApiPath(team_id): ApiPath<i64>,
) -> ApiResult<Json<Team>> {
    let team = roster::delete_team(&pool, team_id).await?;
    Ok(Json(team))
}
