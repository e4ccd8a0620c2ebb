//! Serde models for Sleeper API payloads.
//!
//! Sleeper omits or nulls fields freely (co-owners without rosters, players
//! without a team, empty pre-season settings), so every field here is
//! optional or defaults through [`null_as_default`].

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use crate::cli::types::{PlayerId, RosterId};

/// Treat JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// League member from `/league/{id}/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

impl User {
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    /// Team name shown on the site: custom team name, then display name,
    /// then username.
    pub fn team_name(&self) -> String {
        let custom = self
            .metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref());
        [custom, self.display_name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown Team")
            .to_string()
    }

    /// CDN URL of the user's avatar, or an empty string.
    pub fn avatar_url(&self) -> String {
        match self.avatar.as_deref() {
            Some(avatar) if !avatar.is_empty() => {
                format!("https://sleepercdn.com/avatars/{avatar}")
            }
            _ => String::new(),
        }
    }
}

/// Team roster from `/league/{id}/rosters`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub roster_id: Option<RosterId>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<PlayerId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: RosterSettings,
}

impl Roster {
    pub fn owner_id(&self) -> &str {
        self.owner_id.as_deref().unwrap_or("")
    }

    /// Rostered players that are not in the starting lineup, in roster order.
    pub fn bench(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter().filter(|p| !self.starters.contains(p))
    }
}

/// Win/loss record and points. Sleeper splits points into an integer part and
/// hundredths (`fpts` + `fpts_decimal`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts_decimal: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts_against: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fpts_against_decimal: f64,
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        self.fpts + self.fpts_decimal / 100.0
    }

    pub fn points_against(&self) -> f64 {
        self.fpts_against + self.fpts_against_decimal / 100.0
    }
}

/// Player attributes from the bulk `/players/nfl` directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl PlayerRecord {
    /// Display name with the same fallbacks the site uses everywhere.
    pub fn display_name(&self) -> Option<&str> {
        [&self.full_name, &self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .find(|s| !s.is_empty())
    }

    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or("")
    }

    pub fn team(&self) -> &str {
        self.team.as_deref().unwrap_or("")
    }
}

/// Player id → attributes, sorted by id so iteration is stable across runs.
pub type PlayerDirectory = BTreeMap<PlayerId, PlayerRecord>;

/// Looks up a player and renders `name`, falling back to the raw id.
pub fn player_name(players: &PlayerDirectory, player_id: &PlayerId) -> String {
    players
        .get(player_id)
        .and_then(|p| p.display_name())
        .map(str::to_string)
        .unwrap_or_else(|| player_id.to_string())
}

/// One team's side of a weekly matchup from `/league/{id}/matchups/{week}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchupEntry {
    #[serde(default)]
    pub roster_id: Option<RosterId>,
    #[serde(default)]
    pub matchup_id: Option<u32>,
}

/// Subset of `/state/nfl`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NflState {
    #[serde(default)]
    pub season_type: Option<String>,
}
