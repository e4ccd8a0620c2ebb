//! Teams: who owns which roster, as JSON for the site and CSV for offline use.
//!
//! A team only exists if its owner has a roster. Co-owners show up as league
//! users without one and are left out of every team-level output.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, PlayerId, RosterId},
    sleeper::types::{PlayerDirectory, Roster, User},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub roster_id: RosterId,
    pub owner_user_id: String,
    pub owner_display_name: String,
    pub team_name: String,
    pub avatar_url: String,
}

/// `teams.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamsDocument {
    pub league_id: LeagueId,
    pub teams: Vec<TeamEntry>,
}

/// Owner user id → roster id, for rosters that have both.
pub fn owner_to_roster(rosters: &[Roster]) -> HashMap<&str, RosterId> {
    rosters
        .iter()
        .filter(|r| !r.owner_id().is_empty())
        .filter_map(|r| r.roster_id.map(|id| (r.owner_id(), id)))
        .collect()
}

/// One entry per user that owns a roster, in league user order.
pub fn build_teams(league_id: &LeagueId, users: &[User], rosters: &[Roster]) -> TeamsDocument {
    let owners = owner_to_roster(rosters);

    let teams = users
        .iter()
        .filter_map(|user| {
            let roster_id = *owners.get(user.user_id())?;
            Some(TeamEntry {
                roster_id,
                owner_user_id: user.user_id().to_string(),
                owner_display_name: user.display_name().to_string(),
                team_name: user.team_name(),
                avatar_url: user.avatar_url(),
            })
        })
        .collect();

    TeamsDocument {
        league_id: league_id.clone(),
        teams,
    }
}

/// Team name for every roster in the league. Rosters without a known owner
/// get `Team {id}`.
pub fn roster_team_names(users: &[User], rosters: &[Roster]) -> BTreeMap<RosterId, String> {
    let by_owner: HashMap<&str, &User> = users
        .iter()
        .filter(|u| !u.user_id().is_empty())
        .map(|u| (u.user_id(), u))
        .collect();

    rosters
        .iter()
        .filter_map(|roster| {
            let roster_id = roster.roster_id?;
            let name = by_owner
                .get(roster.owner_id())
                .map(|u| u.team_name())
                .unwrap_or_else(|| fallback_team_name(roster_id));
            Some((roster_id, name))
        })
        .collect()
}

pub fn fallback_team_name(roster_id: RosterId) -> String {
    format!("Team {roster_id}")
}

/// Column order of `{league_id}_teams.csv`.
pub const TEAM_CSV_HEADERS: [&str; 5] = [
    "league_id",
    "roster_id",
    "owner_user_id",
    "owner_display_name",
    "team_name",
];

/// Column order of `{league_id}_rosters.csv`.
pub const ROSTER_CSV_HEADERS: [&str; 10] = [
    "league_id",
    "roster_id",
    "owner_user_id",
    "owner_display_name",
    "team_name",
    "player_id",
    "player_name",
    "position",
    "nfl_team",
    "is_starter",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCsvRow {
    pub league_id: LeagueId,
    pub roster_id: RosterId,
    pub owner_user_id: String,
    pub owner_display_name: String,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterCsvRow {
    pub league_id: LeagueId,
    pub roster_id: RosterId,
    pub owner_user_id: String,
    pub owner_display_name: String,
    pub team_name: String,
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: String,
    pub nfl_team: String,
    /// `True` / `False`, matching the spreadsheets already built on this export.
    pub is_starter: &'static str,
}

pub fn team_csv_rows(teams: &TeamsDocument) -> Vec<TeamCsvRow> {
    teams
        .teams
        .iter()
        .map(|t| TeamCsvRow {
            league_id: teams.league_id.clone(),
            roster_id: t.roster_id,
            owner_user_id: t.owner_user_id.clone(),
            owner_display_name: t.owner_display_name.clone(),
            team_name: t.team_name.clone(),
        })
        .collect()
}

/// One row per rostered player, rosters in league order.
pub fn roster_csv_rows(
    league_id: &LeagueId,
    users: &[User],
    rosters: &[Roster],
    players: &PlayerDirectory,
) -> Vec<RosterCsvRow> {
    let by_owner: HashMap<&str, &User> = users.iter().map(|u| (u.user_id(), u)).collect();
    let nobody = User::default();
    let mut rows = Vec::new();

    for roster in rosters {
        let Some(roster_id) = roster.roster_id else {
            continue;
        };
        let owner = by_owner.get(roster.owner_id()).copied().unwrap_or(&nobody);

        for player_id in &roster.players {
            let record = players.get(player_id);
            rows.push(RosterCsvRow {
                league_id: league_id.clone(),
                roster_id,
                owner_user_id: roster.owner_id().to_string(),
                owner_display_name: owner.display_name().to_string(),
                team_name: owner.team_name(),
                player_id: player_id.clone(),
                player_name: record
                    .and_then(|p| p.display_name())
                    .unwrap_or("Unknown Player")
                    .to_string(),
                position: record.map(|p| p.position()).unwrap_or("").to_string(),
                nfl_team: record.map(|p| p.team()).unwrap_or("").to_string(),
                is_starter: if roster.starters.contains(player_id) {
                    "True"
                } else {
                    "False"
                },
            });
        }
    }

    rows
}

/// Render rows as CSV with a fixed header line, even when there are no rows.
pub fn render_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> csv::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
