use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static reference tables. Each row is just `{id, name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    Gender,
    GameCategory,
    GameStatus,
    GameEventType,
}

impl LookupTable {
    pub fn table_name(self) -> &'static str {
        match self {
            LookupTable::Gender => "genders",
            LookupTable::GameCategory => "game_categories",
            LookupTable::GameStatus => "game_statuses",
            LookupTable::GameEventType => "game_event_types",
        }
    }

    /// Human readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            LookupTable::Gender => "Gender",
            LookupTable::GameCategory => "Game category",
            LookupTable::GameStatus => "Game status",
            LookupTable::GameEventType => "Game event type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lookup {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub number: i64,
    pub gender_id: i64,
    pub team_id: i64,
}

/// Bare game row without any relations attached.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub planned_at: DateTime<Utc>,
    pub location: String,
    pub category_id: i64,
    pub status_id: i64,
    pub team_a_id: i64,
    pub team_b_id: i64,
}

impl Game {
    pub fn has_team(&self, team_id: i64) -> bool {
        self.team_a_id == team_id || self.team_b_id == team_id
    }
}

/// Game row joined with its category, status and both teams.
#[derive(Debug, sqlx::FromRow)]
pub struct GameRow {
    pub id: i64,
    pub planned_at: DateTime<Utc>,
    pub location: String,
    pub category_id: i64,
    pub category_name: String,
    pub status_id: i64,
    pub status_name: String,
    pub team_a_id: i64,
    pub team_a_name: String,
    pub team_b_id: i64,
    pub team_b_name: String,
}

impl GameRow {
    /// Convert database row to API response format
    pub fn to_game_view(&self) -> GameView {
        GameView {
            id: self.id,
            planned_at: self.planned_at,
            location: self.location.clone(),
            category_id: self.category_id,
            status_id: self.status_id,
            team_a_id: self.team_a_id,
            team_b_id: self.team_b_id,
            category: Lookup {
                id: self.category_id,
                name: self.category_name.clone(),
            },
            status: Lookup {
                id: self.status_id,
                name: self.status_name.clone(),
            },
            team_a: Team {
                id: self.team_a_id,
                name: self.team_a_name.clone(),
            },
            team_b: Team {
                id: self.team_b_id,
                name: self.team_b_name.clone(),
            },
            events: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: i64,
    pub planned_at: DateTime<Utc>,
    pub location: String,
    pub category_id: i64,
    pub status_id: i64,
    pub team_a_id: i64,
    pub team_b_id: i64,
    pub category: Lookup,
    pub status: Lookup,
    pub team_a: Team,
    pub team_b: Team,
    /// Only attached when a single game is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<GameEventView>>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GameEvent {
    pub id: i64,
    pub game_id: i64,
    pub type_id: i64,
    pub team_id: Option<i64>,
    pub player_id: Option<i64>,
}

/// Game event row joined with its type and, when attributed, its team and player.
#[derive(Debug, sqlx::FromRow)]
pub struct GameEventRow {
    pub id: i64,
    pub game_id: i64,
    pub type_id: i64,
    pub type_name: String,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub player_id: Option<i64>,
    pub player_first_name: Option<String>,
    pub player_last_name: Option<String>,
    pub player_age: Option<i64>,
    pub player_number: Option<i64>,
    pub player_gender_id: Option<i64>,
    pub player_team_id: Option<i64>,
}

impl GameEventRow {
    pub fn to_event_view(&self) -> GameEventView {
        let team = match (self.team_id, &self.team_name) {
            (Some(id), Some(name)) => Some(Team { id, name: name.clone() }),
            _ => None,
        };

        let player = match (
            self.player_id,
            &self.player_first_name,
            &self.player_last_name,
            self.player_age,
            self.player_number,
            self.player_gender_id,
            self.player_team_id,
        ) {
            (
                Some(id),
                Some(first_name),
                Some(last_name),
                Some(age),
                Some(number),
                Some(gender_id),
                Some(team_id),
            ) => Some(Player {
                id,
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                age,
                number,
                gender_id,
                team_id,
            }),
            _ => None,
        };

        GameEventView {
            id: self.id,
            game_id: self.game_id,
            type_id: self.type_id,
            team_id: self.team_id,
            player_id: self.player_id,
            event_type: Lookup {
                id: self.type_id,
                name: self.type_name.clone(),
            },
            team,
            player,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEventView {
    pub id: i64,
    pub game_id: i64,
    pub type_id: i64,
    pub team_id: Option<i64>,
    pub player_id: Option<i64>,
    #[serde(rename = "type")]
    pub event_type: Lookup,
    pub team: Option<Team>,
    pub player: Option<Player>,
}

/// A stored event naming a player, with the two teams of its game.
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerAttribution {
    pub event_id: i64,
    pub game_id: i64,
    pub team_id: Option<i64>,
    pub team_a_id: i64,
    pub team_b_id: i64,
}

impl PlayerAttribution {
    /// Whether the event still holds if its player plays for `team_id`.
    pub fn accepts_team(&self, team_id: i64) -> bool {
        let in_game = self.team_a_id == team_id || self.team_b_id == team_id;
        in_game && self.team_id.is_none_or(|t| t == team_id)
    }
}

// Request payloads

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamPayload {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerPayload {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub number: i64,
    pub gender_id: i64,
    pub team_id: i64,
}

/// Teams may be given either as the `teamAId`/`teamBId` pair or as a two entry `teamIds` list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGamePayload {
    pub planned_at: DateTime<Utc>,
    pub location: String,
    pub category_id: i64,
    pub status_id: i64,
    #[serde(default)]
    pub team_a_id: Option<i64>,
    #[serde(default)]
    pub team_b_id: Option<i64>,
    #[serde(default)]
    pub team_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGameEventPayload {
    pub type_id: i64,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub player_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteGameQuery {
    #[serde(default)]
    pub cascade: bool,
}
