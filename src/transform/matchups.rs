//! Weekly head-to-head matchups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    cli::types::{LeagueId, RosterId, Season, Week},
    sleeper::types::MatchupEntry,
    transform::teams::fallback_team_name,
};

pub type Pair = (RosterId, RosterId);

/// Deterministic pairing for weeks without a published schedule: sort ids
/// ascending and pair neighbours. An odd one out stays unpaired.
///
/// ```rust
/// use sleeper_site::{transform::matchups::fallback_pairs, RosterId};
///
/// let ids: Vec<RosterId> = [5, 3, 1, 4, 2].into_iter().map(RosterId::new).collect();
/// let pairs = fallback_pairs(&ids);
/// assert_eq!(pairs, vec![(RosterId::new(1), RosterId::new(2)), (RosterId::new(3), RosterId::new(4))]);
/// ```
pub fn fallback_pairs(ids: &[RosterId]) -> Vec<Pair> {
    let mut sorted = ids.to_vec();
    sorted.sort();
    sorted
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Pairs from Sleeper matchup entries, grouped by `matchup_id` ascending.
/// Within a group the first two entries are home and away; groups with fewer
/// than two rosters (byes) are skipped.
pub fn pairs_from_entries(entries: &[MatchupEntry]) -> Vec<Pair> {
    let mut groups: BTreeMap<u32, Vec<RosterId>> = BTreeMap::new();
    for entry in entries {
        if let (Some(matchup_id), Some(roster_id)) = (entry.matchup_id, entry.roster_id) {
            groups.entry(matchup_id).or_default().push(roster_id);
        }
    }

    groups
        .into_values()
        .filter(|rosters| rosters.len() >= 2)
        .map(|rosters| (rosters[0], rosters[1]))
        .collect()
}

/// Real pairs when Sleeper has them, otherwise the fallback over `all_ids`.
pub fn resolve_pairs(entries: &[MatchupEntry], all_ids: &[RosterId]) -> Vec<Pair> {
    let pairs = pairs_from_entries(entries);
    if pairs.is_empty() {
        fallback_pairs(all_ids)
    } else {
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub home_roster_id: RosterId,
    pub away_roster_id: RosterId,
    pub home_team_name: String,
    pub away_team_name: String,
    pub prediction: Option<Value>,
}

/// `{season}/week{w}/matchups.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupsDocument {
    pub league_id: LeagueId,
    pub season: Season,
    pub week: Week,
    pub matchups: Vec<Matchup>,
}

/// Attach names and, when a predictions document is available, the
/// prediction made for the same two rosters.
pub fn build_matchups(
    pairs: &[Pair],
    names: &BTreeMap<RosterId, String>,
    predictions: Option<&Value>,
) -> Vec<Matchup> {
    let name_of = |id: RosterId| {
        names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| fallback_team_name(id))
    };

    pairs
        .iter()
        .map(|&(home, away)| Matchup {
            home_roster_id: home,
            away_roster_id: away,
            home_team_name: name_of(home),
            away_team_name: name_of(away),
            prediction: predictions.and_then(|p| prediction_for(p, home, away)),
        })
        .collect()
}

/// Find the prediction for `home` vs `away` (either orientation) in a
/// `matchup_predictions.json` document.
pub fn prediction_for(predictions: &Value, home: RosterId, away: RosterId) -> Option<Value> {
    let roster = |entry: &Value, key: &str| {
        entry
            .get(key)
            .and_then(|v| serde_json::from_value::<RosterId>(v.clone()).ok())
    };

    predictions
        .get("predictions")?
        .as_array()?
        .iter()
        .find(|&entry| {
            let pair = (roster(entry, "home_roster_id"), roster(entry, "away_roster_id"));
            pair == (Some(home), Some(away)) || pair == (Some(away), Some(home))
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(raw: &[u32]) -> Vec<RosterId> {
        raw.iter().copied().map(RosterId::new).collect()
    }

    fn pairs(raw: &[(u32, u32)]) -> Vec<Pair> {
        raw.iter()
            .map(|&(a, b)| (RosterId::new(a), RosterId::new(b)))
            .collect()
    }

    fn entries(raw: serde_json::Value) -> Vec<MatchupEntry> {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_fallback_pairs_odd() {
        assert_eq!(fallback_pairs(&ids(&[1, 2, 3, 4, 5])), pairs(&[(1, 2), (3, 4)]));
    }

    #[test]
    fn test_fallback_pairs_two() {
        assert_eq!(fallback_pairs(&ids(&[1, 2])), pairs(&[(1, 2)]));
    }

    #[test]
    fn test_fallback_pairs_sorts_first() {
        assert_eq!(fallback_pairs(&ids(&[4, 1, 3, 2])), pairs(&[(1, 2), (3, 4)]));
    }

    #[test]
    fn test_fallback_pairs_degenerate() {
        assert!(fallback_pairs(&[]).is_empty());
        assert!(fallback_pairs(&ids(&[7])).is_empty());
    }

    #[test]
    fn test_pairs_from_entries_groups_by_matchup_id() {
        let entries = entries(json!([
            { "roster_id": 1, "matchup_id": 2 },
            { "roster_id": 2, "matchup_id": 1 },
            { "roster_id": 3, "matchup_id": 2 },
            { "roster_id": 4, "matchup_id": 1 },
            { "roster_id": 5, "matchup_id": null },
            { "roster_id": 6, "matchup_id": 3 }
        ]));

        assert_eq!(pairs_from_entries(&entries), pairs(&[(2, 4), (1, 3)]));
    }

    #[test]
    fn test_resolve_pairs_falls_back_when_unscheduled() {
        let unscheduled = entries(json!([
            { "roster_id": 1, "matchup_id": null },
            { "roster_id": 2, "matchup_id": null }
        ]));

        assert_eq!(
            resolve_pairs(&unscheduled, &ids(&[3, 1, 2])),
            pairs(&[(1, 2)])
        );
        assert_eq!(resolve_pairs(&[], &ids(&[2, 1])), pairs(&[(1, 2)]));
    }

    #[test]
    fn test_build_matchups_names_and_null_prediction() {
        let mut names = BTreeMap::new();
        names.insert(RosterId::new(1), "Alpha".to_string());

        let matchups = build_matchups(&pairs(&[(1, 2)]), &names, None);
        let value = serde_json::to_value(&matchups).unwrap();

        assert_eq!(
            value,
            json!([{
                "home_roster_id": 1,
                "away_roster_id": 2,
                "home_team_name": "Alpha",
                "away_team_name": "Team 2",
                "prediction": null
            }])
        );
    }

    #[test]
    fn test_prediction_attached_in_either_orientation() {
        let predictions = json!({
            "predictions": [
                { "home_roster_id": "2", "away_roster_id": 1, "predicted_winner_roster_id": 2, "reasoning": "depth" },
                { "home_roster_id": 3, "away_roster_id": 4, "predicted_winner_roster_id": 4, "reasoning": "QB" }
            ]
        });

        let matchups = build_matchups(&pairs(&[(1, 2), (3, 4), (5, 6)]), &BTreeMap::new(), Some(&predictions));

        assert_eq!(matchups[0].prediction.as_ref().unwrap()["reasoning"], "depth");
        assert_eq!(matchups[1].prediction.as_ref().unwrap()["reasoning"], "QB");
        assert!(matchups[2].prediction.is_none());
    }

    #[test]
    fn test_prediction_for_tolerates_odd_documents() {
        assert!(prediction_for(&json!({}), RosterId::new(1), RosterId::new(2)).is_none());
        assert!(prediction_for(&json!({ "predictions": {} }), RosterId::new(1), RosterId::new(2)).is_none());
    }
}
