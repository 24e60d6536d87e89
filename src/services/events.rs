//! Game events. An event always belongs to an existing game and type; any team
//! or player it is attributed to must be taking part in that game.

use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateGameEventPayload, Game, GameEventView, LookupTable};
use super::games::game_not_found;
use super::require_lookup;

fn event_not_found(game_id: i64, event_id: i64) -> ApiError {
    ApiError::NotFound(format!(
        "Game event with an id {event_id} for game with an id {game_id} was not found"
    ))
}

async fn require_game(pool: &SqlitePool, game_id: i64) -> ApiResult<Game> {
    db::get_game_by_id(pool, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

async fn check_attribution(
    pool: &SqlitePool,
    game: &Game,
    payload: &CreateGameEventPayload,
) -> ApiResult<()> {
    if let Some(team_id) = payload.team_id {
        if !game.has_team(team_id) {
            return Err(ApiError::Validation(format!(
                "Team with an id {team_id} does not play in game with an id {}",
                game.id
            )));
        }
    }

    if let Some(player_id) = payload.player_id {
        let player = db::get_player_by_id(pool, player_id)
            .await?
            .ok_or_else(|| ApiError::Validation(format!("Player with an id {player_id} does not exist")))?;

        match payload.team_id {
            Some(team_id) if player.team_id != team_id => {
                return Err(ApiError::Validation(format!(
                    "Player with an id {player_id} does not play for team with an id {team_id}"
                )));
            }
            _ if !game.has_team(player.team_id) => {
                return Err(ApiError::Validation(format!(
                    "Player with an id {player_id} is not on a team playing in game with an id {}",
                    game.id
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

pub async fn list_events(pool: &SqlitePool, game_id: i64) -> ApiResult<Vec<GameEventView>> {
    require_game(pool, game_id).await?;

    let rows = db::get_events_for_game(pool, game_id).await?;
    Ok(rows.iter().map(|r| r.to_event_view()).collect())
}

pub async fn get_event(pool: &SqlitePool, game_id: i64, event_id: i64) -> ApiResult<GameEventView> {
    db::get_event_with_relations(pool, game_id, event_id)
        .await?
        .map(|row| row.to_event_view())
        .ok_or_else(|| event_not_found(game_id, event_id))
}

pub async fn create_event(
    pool: &SqlitePool,
    game_id: i64,
    payload: &CreateGameEventPayload,
) -> ApiResult<GameEventView> {
    let game = require_game(pool, game_id).await?;
    require_lookup(pool, LookupTable::GameEventType, payload.type_id).await?;
    check_attribution(pool, &game, payload).await?;

    let event = db::insert_event(pool, game_id, payload).await?;
    tracing::info!(game_id, event_id = event.id, type_id = event.type_id, "Created game event");

    get_event(pool, game_id, event.id).await
}

/// Returns the removed event with its relations as they were before deletion.
pub async fn delete_event(pool: &SqlitePool, game_id: i64, event_id: i64) -> ApiResult<GameEventView> {
    let event = get_event(pool, game_id, event_id).await?;

    db::delete_event(pool, game_id, event_id)
        .await?
        .ok_or_else(|| event_not_found(game_id, event_id))?;
    tracing::info!(game_id, event_id, "Deleted game event");

    Ok(event)
}
