//! Fixed reference data loaded once at provisioning time.
//! Every insert is skipped when a row with the same name is already present.

use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::models::{LookupTable, PlayerPayload, TeamPayload};

const GENDERS: &[&str] = &["Vīrietis", "Sieviete"];
const GAME_CATEGORIES: &[&str] = &["Vīriešiem", "Sievietēm"];
const GAME_STATUSES: &[&str] = &["Plānota", "Aktīva", "Pabeigta"];
const GAME_EVENT_TYPES: &[&str] = &["Punkts"];

const TEAMS: &[&str] = &["VK Liepāja"];

struct SeedPlayer {
    first_name: &'static str,
    last_name: &'static str,
    age: i64,
    number: i64,
    gender_id: i64,
    team_name: &'static str,
}

const PLAYERS: &[SeedPlayer] = &[SeedPlayer {
    first_name: "Jānis",
    last_name: "Bērziņš",
    age: 18,
    number: 1,
    gender_id: 1,
    team_name: "VK Liepāja",
}];

pub async fn seed_lookups(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let tables = [
        (LookupTable::Gender, GENDERS),
        (LookupTable::GameCategory, GAME_CATEGORIES),
        (LookupTable::GameStatus, GAME_STATUSES),
        (LookupTable::GameEventType, GAME_EVENT_TYPES),
    ];

    for (table, names) in tables {
        for name in names {
            if let Some(row) = db::insert_lookup_if_missing(pool, table, name).await? {
                tracing::info!("Seeded {} {:?}", table.table_name(), row);
            }
        }
    }

    Ok(())
}

pub async fn seed_roster(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for name in TEAMS {
        if db::get_team_by_name(pool, name).await?.is_none() {
            let team = db::insert_team(pool, &TeamPayload { name: name.to_string() }).await?;
            tracing::info!("Seeded team {:?}", team);
        }
    }

    for seed in PLAYERS {
        let Some(team) = db::get_team_by_name(pool, seed.team_name).await? else {
            tracing::warn!("Skipping player {} {}: team {} is missing", seed.first_name, seed.last_name, seed.team_name);
            continue;
        };

        if db::player_exists(pool, seed.first_name, seed.last_name, team.id).await? {
            continue;
        }

        let player = db::insert_player(
            pool,
            &PlayerPayload {
                first_name: seed.first_name.to_string(),
                last_name: seed.last_name.to_string(),
                age: seed.age,
                number: seed.number,
                gender_id: seed.gender_id,
                team_id: team.id,
            },
        )
        .await?;
        tracing::info!("Seeded player {:?}", player);
    }

    Ok(())
}

pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    seed_lookups(pool).await?;
    seed_roster(pool).await
}
