//! Weekly power rankings.
//!
//! Before any narrative rankings exist the site gets a placeholder ranking
//! (alphabetical by team name). Rankings documents written by the narrative
//! generator are free-form, so readers go through [`RankedTeam::from_value`]
//! which accepts whatever subset of `{roster_id, team_name, rank}` is there.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    cli::types::{LeagueId, RosterId, Season, Week},
    transform::teams::TeamsDocument,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub roster_id: RosterId,
    pub team_name: String,
    pub rank: u32,
}

/// `{season}/week{w}/power_rankings.json`. `R` is [`RankingEntry`] for the
/// placeholder and `serde_json::Value` for generated rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRankingsDocument<R = RankingEntry> {
    pub league_id: LeagueId,
    pub season: Season,
    pub week: Week,
    pub rankings: Vec<R>,
}

/// Teams ranked alphabetically by team name; ties keep league order.
pub fn placeholder_rankings(teams: &TeamsDocument) -> Vec<RankingEntry> {
    let mut ordered: Vec<_> = teams
        .teams
        .iter()
        .map(|t| (t.team_name.clone(), t.roster_id))
        .collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|((team_name, roster_id), rank)| RankingEntry {
            roster_id,
            team_name,
            rank,
        })
        .collect()
}

/// Loosely-typed view of one ranking entry as found on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeam {
    pub roster_id: Option<RosterId>,
    pub team_name: Option<String>,
    pub rank: Option<u32>,
}

impl RankedTeam {
    /// Pull the known fields out of an arbitrary JSON value. Numbers may come
    /// quoted; anything unusable becomes `None`.
    pub fn from_value(value: &Value) -> Self {
        let roster_id = value
            .get("roster_id")
            .and_then(|v| serde_json::from_value::<RosterId>(v.clone()).ok());
        let team_name = value
            .get("team_name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let rank = value.get("rank").and_then(as_rank);

        Self {
            roster_id,
            team_name,
            rank,
        }
    }
}

fn as_rank(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Distill every entry of a rankings array.
pub fn ranked_teams(rankings: &[Value]) -> Vec<RankedTeam> {
    rankings.iter().map(RankedTeam::from_value).collect()
}
