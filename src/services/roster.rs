//! Teams and players: plain CRUD with existence checks on every write.

use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{LookupTable, Player, PlayerPayload, Team, TeamPayload};
use super::{require_lookup, require_non_empty, require_team};

fn team_not_found(team_id: i64) -> ApiError {
    ApiError::NotFound(format!("Team with an id {team_id} was not found"))
}

fn player_not_found(player_id: i64) -> ApiError {
    ApiError::NotFound(format!("Player with an id {player_id} was not found"))
}

pub async fn list_teams(pool: &SqlitePool) -> ApiResult<Vec<Team>> {
    Ok(db::get_all_teams(pool).await?)
}

pub async fn get_team(pool: &SqlitePool, team_id: i64) -> ApiResult<Team> {
    db::get_team_by_id(pool, team_id)
        .await?
        .ok_or_else(|| team_not_found(team_id))
}

pub async fn create_team(pool: &SqlitePool, payload: &TeamPayload) -> ApiResult<Team> {
    require_non_empty("name", &payload.name)?;

    let team = db::insert_team(pool, payload).await?;
    tracing::info!(team_id = team.id, "Created team {}", team.name);
    Ok(team)
}

pub async fn replace_team(pool: &SqlitePool, team_id: i64, payload: &TeamPayload) -> ApiResult<Team> {
    require_non_empty("name", &payload.name)?;

    db::update_team(pool, team_id, payload)
        .await?
        .ok_or_else(|| team_not_found(team_id))
}

/// Fails with `Conflict` while players, games or events still reference the team.
pub async fn delete_team(pool: &SqlitePool, team_id: i64) -> ApiResult<Team> {
    let team = db::delete_team(pool, team_id)
        .await?
        .ok_or_else(|| team_not_found(team_id))?;
    tracing::info!(team_id, "Deleted team");
    Ok(team)
}

pub async fn list_players(pool: &SqlitePool) -> ApiResult<Vec<Player>> {
    Ok(db::get_all_players(pool).await?)
}

pub async fn get_player(pool: &SqlitePool, player_id: i64) -> ApiResult<Player> {
    db::get_player_by_id(pool, player_id)
        .await?
        .ok_or_else(|| player_not_found(player_id))
}

async fn validate_player(pool: &SqlitePool, payload: &PlayerPayload) -> ApiResult<()> {
    require_non_empty("firstName", &payload.first_name)?;
    require_non_empty("lastName", &payload.last_name)?;
    require_lookup(pool, LookupTable::Gender, payload.gender_id).await?;
    require_team(pool, payload.team_id).await
}

pub async fn create_player(pool: &SqlitePool, payload: &PlayerPayload) -> ApiResult<Player> {
    validate_player(pool, payload).await?;

    let player = db::insert_player(pool, payload).await?;
    tracing::info!(player_id = player.id, team_id = player.team_id, "Created player");
    Ok(player)
}

/// Moving a player to another team is refused while a recorded event would no
/// longer hold for the new team.
async fn check_team_change(pool: &SqlitePool, player: &Player, team_id: i64) -> ApiResult<()> {
    if player.team_id == team_id {
        return Ok(());
    }

    let attributions = db::get_player_attributions(pool, player.id).await?;
    if let Some(event) = attributions.iter().find(|a| !a.accepts_team(team_id)) {
        return Err(ApiError::Conflict(format!(
            "Player with an id {} is attributed in game event with an id {} of game with an id {}; \
             they cannot move to team with an id {}",
            player.id, event.event_id, event.game_id, team_id
        )));
    }

    Ok(())
}

pub async fn replace_player(pool: &SqlitePool, player_id: i64, payload: &PlayerPayload) -> ApiResult<Player> {
    validate_player(pool, payload).await?;

    let current = get_player(pool, player_id).await?;
    check_team_change(pool, &current, payload.team_id).await?;

    db::update_player(pool, player_id, payload)
        .await?
        .ok_or_else(|| player_not_found(player_id))
}

pub async fn delete_player(pool: &SqlitePool, player_id: i64) -> ApiResult<Player> {
    let player = db::delete_player(pool, player_id)
        .await?
        .ok_or_else(|| player_not_found(player_id))?;
    tracing::info!(player_id, "Deleted player");
    Ok(player)
}
