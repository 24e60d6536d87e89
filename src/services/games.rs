//! Game aggregate: a game is tied to exactly two teams, one category and one
//! status, and owns its events.

use sqlx::sqlite::SqlitePool;
use crate::db::{self, GameDeletion, NewGame};
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateGamePayload, GameView, LookupTable};
use super::{require_lookup, require_non_empty, require_team};

pub(crate) fn game_not_found(game_id: i64) -> ApiError {
    ApiError::NotFound(format!("Game with an id {game_id} was not found"))
}

/// Resolve the two participating teams from either request form.
/// The result is ordered: the first entry fills the A slot.
pub fn resolve_team_pair(
    team_a_id: Option<i64>,
    team_b_id: Option<i64>,
    team_ids: Option<&[i64]>,
) -> ApiResult<(i64, i64)> {
    match (team_a_id, team_b_id, team_ids) {
        (Some(a), Some(b), None) => Ok((a, b)),
        (None, None, Some(&[a, b])) => Ok((a, b)),
        (None, None, Some(ids)) => Err(ApiError::Validation(format!(
            "A game requires exactly two teams, but {} were given",
            ids.len()
        ))),
        (None, None, None) => Err(ApiError::Validation(
            "A game requires two teams: provide \"teamAId\" and \"teamBId\" or \"teamIds\"".to_string(),
        )),
        (_, _, Some(_)) => Err(ApiError::Validation(
            "Provide either \"teamAId\" and \"teamBId\" or \"teamIds\", not both".to_string(),
        )),
        (Some(_), None, None) => Err(ApiError::Validation("\"teamBId\" is required".to_string())),
        (None, Some(_), None) => Err(ApiError::Validation("\"teamAId\" is required".to_string())),
    }
}

pub async fn list_games(pool: &SqlitePool) -> ApiResult<Vec<GameView>> {
    let rows = db::get_all_games(pool).await?;
    Ok(rows.iter().map(|r| r.to_game_view()).collect())
}

/// Single game with its category, status, teams and events attached.
pub async fn get_game(pool: &SqlitePool, game_id: i64) -> ApiResult<GameView> {
    let row = db::get_game_with_relations(pool, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))?;

    let events = db::get_events_for_game(pool, game_id).await?;

    let mut game = row.to_game_view();
    game.events = Some(events.iter().map(|e| e.to_event_view()).collect());
    Ok(game)
}

pub async fn create_game(pool: &SqlitePool, payload: &CreateGamePayload) -> ApiResult<GameView> {
    require_non_empty("location", &payload.location)?;
    let (team_a_id, team_b_id) = resolve_team_pair(
        payload.team_a_id,
        payload.team_b_id,
        payload.team_ids.as_deref(),
    )?;

    require_lookup(pool, LookupTable::GameCategory, payload.category_id).await?;
    require_lookup(pool, LookupTable::GameStatus, payload.status_id).await?;
    require_team(pool, team_a_id).await?;
    if team_b_id != team_a_id {
        require_team(pool, team_b_id).await?;
    }

    let game_id = db::insert_game(
        pool,
        &NewGame {
            planned_at: payload.planned_at,
            location: &payload.location,
            category_id: payload.category_id,
            status_id: payload.status_id,
            team_a_id,
            team_b_id,
        },
    )
    .await?;
    tracing::info!(game_id, team_a_id, team_b_id, "Created game");

    db::get_game_with_relations(pool, game_id)
        .await?
        .map(|row| row.to_game_view())
        .ok_or(ApiError::Database(sqlx::Error::RowNotFound))
}

/// Delete a game. A game that still has events is only removed when `cascade`
/// is set, in which case its events go with it.
pub async fn delete_game(pool: &SqlitePool, game_id: i64, cascade: bool) -> ApiResult<GameView> {
    let game = get_game(pool, game_id).await?;

    match db::delete_game(pool, game_id, cascade).await? {
        GameDeletion::Deleted { events_removed } => {
            tracing::info!(game_id, events_removed, "Deleted game");
            Ok(game)
        }
        GameDeletion::HasEvents(event_count) => Err(ApiError::Conflict(format!(
            "Game with an id {game_id} has {event_count} events; pass cascade=true to delete them together with the game"
        ))),
        GameDeletion::Missing => Err(game_not_found(game_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: ApiResult<(i64, i64)>) -> String {
        match result {
            Err(ApiError::Validation(message)) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn slot_pair_is_kept_in_order() {
        assert_eq!(resolve_team_pair(Some(4), Some(2), None).unwrap(), (4, 2));
    }

    #[test]
    fn team_list_of_two_fills_both_slots() {
        assert_eq!(resolve_team_pair(None, None, Some(&[7, 3][..])).unwrap(), (7, 3));
    }

    #[test]
    fn same_team_may_fill_both_slots() {
        assert_eq!(resolve_team_pair(Some(1), Some(1), None).unwrap(), (1, 1));
    }

    #[test]
    fn team_list_must_have_exactly_two_entries() {
        assert!(message(resolve_team_pair(None, None, Some(&[1][..]))).contains("1 were given"));
        assert!(message(resolve_team_pair(None, None, Some(&[1, 2, 3][..]))).contains("3 were given"));
        assert!(message(resolve_team_pair(None, None, Some(&[] as &[i64]))).contains("0 were given"));
    }

    #[test]
    fn forms_cannot_be_mixed() {
        assert!(message(resolve_team_pair(Some(1), None, Some(&[1, 2][..]))).contains("not both"));
    }

    #[test]
    fn missing_slot_is_named() {
        assert_eq!(message(resolve_team_pair(Some(1), None, None)), "\"teamBId\" is required");
        assert_eq!(message(resolve_team_pair(None, Some(1), None)), "\"teamAId\" is required");
    }
}
