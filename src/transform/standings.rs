//! Season standings and the trimmed roster view shown next to them.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{PlayerId, RosterId, Season},
    sleeper::types::{player_name, PlayerDirectory, Roster},
    transform::round2,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub roster_id: RosterId,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub pf: f64,
    pub pa: f64,
}

/// `{season}/standings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsDocument {
    pub season: Season,
    pub standings: Vec<StandingRow>,
}

/// One row per roster, in league order. Rosters without an id are skipped.
pub fn build_standings(season: Season, rosters: &[Roster]) -> StandingsDocument {
    let standings = rosters
        .iter()
        .filter_map(|roster| {
            let settings = &roster.settings;
            Some(StandingRow {
                roster_id: roster.roster_id?,
                wins: settings.wins,
                losses: settings.losses,
                ties: settings.ties,
                pf: round2(settings.points_for()),
                pa: round2(settings.points_against()),
            })
        })
        .collect();

    StandingsDocument { season, standings }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterOut {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub nfl_team: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMin {
    pub roster_id: RosterId,
    pub starters: Vec<StarterOut>,
}

/// `{season}/rosters_min.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RostersMinDocument {
    pub season: Season,
    pub rosters: Vec<RosterMin>,
}

pub fn build_rosters_min(
    season: Season,
    rosters: &[Roster],
    players: &PlayerDirectory,
) -> RostersMinDocument {
    let rosters = rosters
        .iter()
        .filter_map(|roster| {
            let starters = roster
                .starters
                .iter()
                .map(|player_id| {
                    let record = players.get(player_id);
                    StarterOut {
                        player_id: player_id.clone(),
                        name: player_name(players, player_id),
                        position: record.map(|p| p.position()).unwrap_or("").to_string(),
                        nfl_team: record.map(|p| p.team()).unwrap_or("").to_string(),
                    }
                })
                .collect();

            Some(RosterMin {
                roster_id: roster.roster_id?,
                starters,
            })
        })
        .collect();

    RostersMinDocument { season, rosters }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::types::PlayerRecord;
    use serde_json::json;

    fn rosters() -> Vec<Roster> {
        serde_json::from_value(json!([
            {
                "roster_id": 1,
                "starters": ["4046", "0"],
                "settings": {
                    "wins": 3, "losses": 1, "ties": 0,
                    "fpts": 480, "fpts_decimal": 36,
                    "fpts_against": 401, "fpts_against_decimal": 7
                }
            },
            { "roster_id": 2, "settings": null },
            { "roster_id": null, "starters": ["4046"] }
        ]))
        .unwrap()
    }

    #[test]
    fn test_build_standings() {
        let doc = build_standings(Season::new(2025), &rosters());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            json!({
                "season": 2025,
                "standings": [
                    { "roster_id": 1, "wins": 3, "losses": 1, "ties": 0, "pf": 480.36, "pa": 401.07 },
                    { "roster_id": 2, "wins": 0, "losses": 0, "ties": 0, "pf": 0.0, "pa": 0.0 }
                ]
            })
        );
    }

    #[test]
    fn test_build_rosters_min() {
        let mut players = PlayerDirectory::new();
        players.insert(
            PlayerId::from("4046"),
            PlayerRecord {
                full_name: Some("Patrick Mahomes".into()),
                position: Some("QB".into()),
                team: Some("KC".into()),
                ..Default::default()
            },
        );

        let doc = build_rosters_min(Season::new(2025), &rosters(), &players);

        assert_eq!(doc.rosters.len(), 2);
        assert_eq!(
            doc.rosters[0].starters,
            vec![
                StarterOut {
                    player_id: PlayerId::from("4046"),
                    name: "Patrick Mahomes".into(),
                    position: "QB".into(),
                    nfl_team: "KC".into(),
                },
                StarterOut {
                    player_id: PlayerId::from("0"),
                    name: "0".into(),
                    position: String::new(),
                    nfl_team: String::new(),
                },
            ]
        );
        assert!(doc.rosters[1].starters.is_empty());
    }
}
