//! Weekly player projections from Sleeper or FantasyPros.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    cli::types::{PlayerId, Position, Season, Week},
    fantasypros::ExternalProjectionRow,
    identity::IdentityIndex,
    transform::round2,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub player_id: PlayerId,
    pub position: String,
    pub points: f64,
}

/// `{season}/week{w}/projections.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionsDocument {
    pub season: Season,
    pub week: Week,
    pub projections: Vec<ProjectionRow>,
}

/// Where Sleeper may put the fantasy-point total, best scoring format first.
/// `true` means the key lives under `stats`, `false` at the entry root.
const POINT_FIELDS: [(bool, &str); 7] = [
    (true, "pts_ppr"),
    (false, "pts_ppr"),
    (true, "pts_half_ppr"),
    (false, "pts_half_ppr"),
    (true, "pts_std"),
    (false, "pts_std"),
    (false, "fantasy_points"),
];

fn as_points(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reduce one raw Sleeper projection entry to `{player_id, position, points}`.
///
/// Points are the first non-zero total among [`POINT_FIELDS`], else zero.
/// Entries without a player id are dropped.
pub fn normalize_sleeper_projection(entry: &Value) -> Option<ProjectionRow> {
    let player_id = entry.get("player_id").and_then(as_id)?;
    let stats = entry.get("stats");

    let points = POINT_FIELDS
        .iter()
        .filter_map(|&(nested, key)| {
            let source = if nested { stats? } else { entry };
            source.get(key).and_then(as_points)
        })
        .find(|p| *p != 0.0 && p.is_finite())
        .unwrap_or(0.0);

    let position = entry
        .get("position")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            entry
                .get("player")
                .and_then(|p| p.get("position"))
                .and_then(Value::as_str)
        })
        .unwrap_or("")
        .to_string();

    Some(ProjectionRow {
        player_id: PlayerId::new(player_id),
        position,
        points,
    })
}

/// Join external rows onto Sleeper ids. Rows that do not resolve are dropped;
/// the caller logs how many.
pub fn match_external_rows(
    index: &IdentityIndex,
    position: Position,
    rows: &[ExternalProjectionRow],
) -> Vec<ProjectionRow> {
    rows.iter()
        .filter_map(|row| {
            let player_id = index.resolve(&row.name, &row.team)?;
            Some(ProjectionRow {
                player_id: player_id.clone(),
                position: position.fantasypros_label().to_string(),
                points: round2(row.points),
            })
        })
        .collect()
}
