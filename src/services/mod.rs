//! Domain operations. Each takes the pool explicitly, enforces the league's
//! integrity rules, and only then delegates to `db`.

pub mod events;
pub mod games;
pub mod roster;

use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::LookupTable;

pub(crate) fn require_non_empty(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("\"{field}\" is not allowed to be empty")));
    }
    Ok(())
}

pub(crate) async fn require_lookup(pool: &SqlitePool, table: LookupTable, id: i64) -> ApiResult<()> {
    if !db::lookup_exists(pool, table, id).await? {
        return Err(ApiError::Validation(format!(
            "{} with an id {} does not exist",
            table.label(),
            id
        )));
    }
    Ok(())
}

pub(crate) async fn require_team(pool: &SqlitePool, team_id: i64) -> ApiResult<()> {
    if db::get_team_by_id(pool, team_id).await?.is_none() {
        return Err(ApiError::Validation(format!("Team with an id {team_id} does not exist")));
    }
    Ok(())
}

pub async fn list_lookups(pool: &SqlitePool, table: LookupTable) -> ApiResult<Vec<crate::models::Lookup>> {
    Ok(db::get_lookups(pool, table).await?)
}
