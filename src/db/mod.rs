use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteExecutor, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use crate::models::*;

/// Open a pool for `database_url`, creating the file when missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new();
    if database_url.contains(":memory:") {
        // Each connection to an in-memory database gets its own empty database.
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options.connect_with(options).await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

// Lookup queries
pub async fn get_lookups(pool: &SqlitePool, table: LookupTable) -> Result<Vec<Lookup>, sqlx::Error> {
    let sql = format!("SELECT id, name FROM {} ORDER BY id", table.table_name());
    sqlx::query_as::<_, Lookup>(&sql)
        .fetch_all(pool)
        .await
}

pub async fn lookup_exists(pool: &SqlitePool, table: LookupTable, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", table.table_name());
    sqlx::query_scalar::<_, bool>(&sql)
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Insert a lookup row unless one with the same name already exists.
pub async fn insert_lookup_if_missing(
    pool: &SqlitePool,
    table: LookupTable,
    name: &str,
) -> Result<Option<Lookup>, sqlx::Error> {
    let sql = format!(
        "INSERT INTO {table} (name)
         SELECT ? WHERE NOT EXISTS (SELECT 1 FROM {table} WHERE name = ?)
         RETURNING id, name",
        table = table.table_name()
    );
    sqlx::query_as::<_, Lookup>(&sql)
        .bind(name)
        .bind(name)
        .fetch_optional(pool)
        .await
}

// Team queries
pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT id, name FROM teams ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT id, name FROM teams WHERE id = ?"#
    )
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_team_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT id, name FROM teams WHERE name = ? ORDER BY id LIMIT 1"#
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

pub async fn insert_team(pool: &SqlitePool, team: &TeamPayload) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"INSERT INTO teams (name) VALUES (?) RETURNING id, name"#
    )
    .bind(&team.name)
    .fetch_one(pool)
    .await
}

/// Returns `None` when no team has `team_id`.
pub async fn update_team(pool: &SqlitePool, team_id: i64, team: &TeamPayload) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"UPDATE teams SET name = ? WHERE id = ? RETURNING id, name"#
    )
    .bind(&team.name)
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

/// Plain `DELETE` so a foreign key violation surfaces as the statement's error.
pub async fn delete_team(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    let Some(team) = get_team_by_id(pool, team_id).await? else {
        return Ok(None);
    };

    let deleted = sqlx::query(r#"DELETE FROM teams WHERE id = ?"#)
        .bind(team_id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok((deleted > 0).then_some(team))
}

// Player queries
const PLAYER_COLUMNS: &str = "id, first_name, last_name, age, number, gender_id, team_id";

pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id");
    sqlx::query_as::<_, Player>(&sql)
        .fetch_all(pool)
        .await
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?");
    sqlx::query_as::<_, Player>(&sql)
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

pub async fn player_exists(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
    team_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(
               SELECT 1 FROM players
               WHERE first_name = ? AND last_name = ? AND team_id = ?
           )"#
    )
    .bind(first_name)
    .bind(last_name)
    .bind(team_id)
    .fetch_one(pool)
    .await
}

pub async fn insert_player(pool: &SqlitePool, player: &PlayerPayload) -> Result<Player, sqlx::Error> {
    let sql = format!(
        "INSERT INTO players (first_name, last_name, age, number, gender_id, team_id)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING {PLAYER_COLUMNS}"
    );
    sqlx::query_as::<_, Player>(&sql)
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.age)
        .bind(player.number)
        .bind(player.gender_id)
        .bind(player.team_id)
        .fetch_one(pool)
        .await
}

pub async fn update_player(
    pool: &SqlitePool,
    player_id: i64,
    player: &PlayerPayload,
) -> Result<Option<Player>, sqlx::Error> {
    let sql = format!(
        "UPDATE players
         SET first_name = ?, last_name = ?, age = ?, number = ?, gender_id = ?, team_id = ?
         WHERE id = ?
         RETURNING {PLAYER_COLUMNS}"
    );
    sqlx::query_as::<_, Player>(&sql)
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.age)
        .bind(player.number)
        .bind(player.gender_id)
        .bind(player.team_id)
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_player(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    let Some(player) = get_player_by_id(pool, player_id).await? else {
        return Ok(None);
    };

    let deleted = sqlx::query(r#"DELETE FROM players WHERE id = ?"#)
        .bind(player_id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok((deleted > 0).then_some(player))
}

// Game queries
const GAME_WITH_RELATIONS: &str = r#"
    SELECT
        g.id,
        g.planned_at,
        g.location,
        g.category_id,
        c.name AS category_name,
        g.status_id,
        s.name AS status_name,
        g.team_a_id,
        ta.name AS team_a_name,
        g.team_b_id,
        tb.name AS team_b_name
    FROM games g
    JOIN game_categories c ON c.id = g.category_id
    JOIN game_statuses s ON s.id = g.status_id
    JOIN teams ta ON ta.id = g.team_a_id
    JOIN teams tb ON tb.id = g.team_b_id"#;

pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<GameRow>, sqlx::Error> {
    let sql = format!("{GAME_WITH_RELATIONS} ORDER BY g.id");
    sqlx::query_as::<_, GameRow>(&sql)
        .fetch_all(pool)
        .await
}

pub async fn get_game_with_relations(pool: &SqlitePool, game_id: i64) -> Result<Option<GameRow>, sqlx::Error> {
    let sql = format!("{GAME_WITH_RELATIONS} WHERE g.id = ?");
    sqlx::query_as::<_, GameRow>(&sql)
        .bind(game_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_game_by_id(pool: &SqlitePool, game_id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT id, planned_at, location, category_id, status_id, team_a_id, team_b_id
           FROM games WHERE id = ?"#
    )
    .bind(game_id)
    .fetch_optional(pool)
    .await
}

pub struct NewGame<'a> {
    pub planned_at: chrono::DateTime<chrono::Utc>,
    pub location: &'a str,
    pub category_id: i64,
    pub status_id: i64,
    pub team_a_id: i64,
    pub team_b_id: i64,
}

pub async fn insert_game(pool: &SqlitePool, game: &NewGame<'_>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"INSERT INTO games (planned_at, location, category_id, status_id, team_a_id, team_b_id)
           VALUES (?, ?, ?, ?, ?, ?)
           RETURNING id"#
    )
    .bind(game.planned_at)
    .bind(game.location)
    .bind(game.category_id)
    .bind(game.status_id)
    .bind(game.team_a_id)
    .bind(game.team_b_id)
    .fetch_one(pool)
    .await
}

/// Outcome of [`delete_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameDeletion {
    Deleted { events_removed: u64 },
    /// Refused because the game still has events and no cascade was requested.
    HasEvents(i64),
    Missing,
}

/// Delete a game in one transaction. Events are only removed when `cascade` is set;
/// otherwise the game row alone is deleted and the events' foreign key guards it.
pub async fn delete_game(pool: &SqlitePool, game_id: i64, cascade: bool) -> Result<GameDeletion, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let events_removed = if cascade {
        sqlx::query(r#"DELETE FROM game_events WHERE game_id = ?"#)
            .bind(game_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
    } else {
        let events = count_events_for_game(&mut *tx, game_id).await?;
        if events > 0 {
            tx.rollback().await?;
            return Ok(GameDeletion::HasEvents(events));
        }
        0
    };

    let games = sqlx::query(r#"DELETE FROM games WHERE id = ?"#)
        .bind(game_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if games == 0 {
        tx.rollback().await?;
        return Ok(GameDeletion::Missing);
    }

    tx.commit().await?;
    Ok(GameDeletion::Deleted { events_removed })
}

// Game event queries
const EVENT_WITH_RELATIONS: &str = r#"
    SELECT
        e.id,
        e.game_id,
        e.type_id,
        et.name AS type_name,
        e.team_id,
        t.name AS team_name,
        e.player_id,
        p.first_name AS player_first_name,
        p.last_name AS player_last_name,
        p.age AS player_age,
        p.number AS player_number,
        p.gender_id AS player_gender_id,
        p.team_id AS player_team_id
    FROM game_events e
    JOIN game_event_types et ON et.id = e.type_id
    LEFT JOIN teams t ON t.id = e.team_id
    LEFT JOIN players p ON p.id = e.player_id"#;

pub async fn get_events_for_game(pool: &SqlitePool, game_id: i64) -> Result<Vec<GameEventRow>, sqlx::Error> {
    let sql = format!("{EVENT_WITH_RELATIONS} WHERE e.game_id = ? ORDER BY e.id");
    sqlx::query_as::<_, GameEventRow>(&sql)
        .bind(game_id)
        .fetch_all(pool)
        .await
}

pub async fn get_event_with_relations(
    pool: &SqlitePool,
    game_id: i64,
    event_id: i64,
) -> Result<Option<GameEventRow>, sqlx::Error> {
    let sql = format!("{EVENT_WITH_RELATIONS} WHERE e.game_id = ? AND e.id = ?");
    sqlx::query_as::<_, GameEventRow>(&sql)
        .bind(game_id)
        .bind(event_id)
        .fetch_optional(pool)
        .await
}

pub async fn count_events_for_game<'e, E>(executor: E, game_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM game_events WHERE game_id = ?"#
    )
    .bind(game_id)
    .fetch_one(executor)
    .await
}

/// Every event a player is attributed in, with the teams of the event's game.
pub async fn get_player_attributions(
    pool: &SqlitePool,
    player_id: i64,
) -> Result<Vec<PlayerAttribution>, sqlx::Error> {
    sqlx::query_as::<_, PlayerAttribution>(
        r#"SELECT
               e.id AS event_id,
               e.game_id,
               e.team_id,
               g.team_a_id,
               g.team_b_id
           FROM game_events e
           JOIN games g ON g.id = e.game_id
           WHERE e.player_id = ?
           ORDER BY e.id"#
    )
    .bind(player_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_event(
    pool: &SqlitePool,
    game_id: i64,
    event: &CreateGameEventPayload,
) -> Result<GameEvent, sqlx::Error> {
    sqlx::query_as::<_, GameEvent>(
        r#"INSERT INTO game_events (game_id, type_id, team_id, player_id)
           VALUES (?, ?, ?, ?)
           RETURNING id, game_id, type_id, team_id, player_id"#
    )
    .bind(game_id)
    .bind(event.type_id)
    .bind(event.team_id)
    .bind(event.player_id)
    .fetch_one(pool)
    .await
}

pub async fn delete_event(pool: &SqlitePool, game_id: i64, event_id: i64) -> Result<Option<GameEvent>, sqlx::Error> {
    sqlx::query_as::<_, GameEvent>(
        r#"DELETE FROM game_events WHERE game_id = ? AND id = ?
           RETURNING id, game_id, type_id, team_id, player_id"#
    )
    .bind(game_id)
    .bind(event_id)
    .fetch_optional(pool)
    .await
}
