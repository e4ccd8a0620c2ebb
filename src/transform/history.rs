//! Season-long ranking history, one entry per week.
//!
//! `history.json` is edited in place week after week. Only the week being
//! recorded is rewritten: every other week, and any top-level key this crate
//! does not model, is carried through exactly as it was read. Week keys are
//! written as JSON strings (`"1"`, `"2"`) but kept numerically ordered.

use std::collections::BTreeMap;

use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    cli::types::{Season, Week},
    transform::rankings::{ranked_teams, RankedTeam},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    pub season: Option<Season>,
    /// Week number to the stored rankings array, untouched once written.
    pub weeks: BTreeMap<u16, Value>,
    /// Top-level keys other than `season` and `weeks`.
    pub extra: Map<String, Value>,
}

impl History {
    pub fn new(season: Season) -> Self {
        Self {
            season: Some(season),
            ..Self::default()
        }
    }

    pub fn week(&self, week: Week) -> Option<&Value> {
        self.weeks.get(&week.as_u16())
    }
}

impl From<&RankedTeam> for Value {
    fn from(team: &RankedTeam) -> Self {
        let mut entry = Map::new();
        entry.insert(
            "roster_id".to_string(),
            team.roster_id.map_or(Value::Null, |id| Value::from(id.as_u32())),
        );
        entry.insert(
            "team_name".to_string(),
            team.team_name.clone().map_or(Value::Null, Value::from),
        );
        entry.insert("rank".to_string(), team.rank.map_or(Value::Null, Value::from));
        Value::Object(entry)
    }
}

/// Replace one week's rankings, leaving every other week alone.
pub fn record_week(existing: Option<History>, season: Season, week: Week, rankings: &[Value]) -> History {
    let mut history = existing.unwrap_or_else(|| History::new(season));
    let entries = ranked_teams(rankings).iter().map(Value::from).collect();
    history.weeks.insert(week.as_u16(), Value::Array(entries));
    history
}

impl TryFrom<Map<String, Value>> for History {
    type Error = String;

    fn try_from(mut raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let season = match raw.remove("season") {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<Season>(value.clone()) {
                Ok(season) => Some(season),
                Err(_) => {
                    raw.insert("season".to_string(), value);
                    None
                }
            },
        };

        let weeks: BTreeMap<u16, Value> = match raw.remove("weeks") {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(Value::Object(weeks)) => weeks
                .into_iter()
                .map(|(key, entries)| {
                    let week: u16 = key
                        .trim()
                        .parse()
                        .map_err(|_| format!("history week key {key:?} is not a week number"))?;
                    if !entries.is_array() {
                        return Err(format!("history week {key} is not an array"));
                    }
                    Ok((week, entries))
                })
                .collect::<Result<_, _>>()?,
            Some(_) => return Err("history `weeks` is not an object".to_string()),
        };

        Ok(Self {
            season,
            weeks,
            extra: raw,
        })
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        History::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for History {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(season) = &self.season {
            map.serialize_entry("season", season)?;
        }
        map.serialize_entry("weeks", &self.weeks)?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn week_one() -> Vec<Value> {
        vec![
            json!({ "roster_id": 2, "team_name": "Moose", "rank": 1, "summary": "hot" }),
            json!({ "roster_id": 1, "team_name": "Zebras", "rank": 2 }),
        ]
    }

    #[test]
    fn test_first_week_creates_document() {
        let history = record_week(None, Season::new(2025), Week::new(1), &week_one());
        let value = serde_json::to_value(&history).unwrap();

        assert_eq!(
            value,
            json!({
                "season": 2025,
                "weeks": {
                    "1": [
                        { "roster_id": 2, "team_name": "Moose", "rank": 1 },
                        { "roster_id": 1, "team_name": "Zebras", "rank": 2 }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_second_week_leaves_first_untouched() {
        let season = Season::new(2025);
        let first = record_week(None, season, Week::new(1), &week_one());
        let snapshot = first.week(Week::new(1)).unwrap().clone();

        let second = record_week(
            Some(first),
            season,
            Week::new(2),
            &[json!({ "roster_id": 1, "team_name": "Zebras", "rank": 1 })],
        );

        assert_eq!(second.week(Week::new(1)), Some(&snapshot));
        assert_eq!(second.week(Week::new(2)).unwrap()[0]["roster_id"], 1);
    }

    #[test]
    fn test_rewriting_a_week_replaces_it() {
        let season = Season::new(2025);
        let first = record_week(None, season, Week::new(1), &week_one());
        let rewritten = record_week(Some(first), season, Week::new(1), &[]);

        assert_eq!(rewritten.week(Week::new(1)), Some(&json!([])));
        assert_eq!(rewritten.weeks.len(), 1);
    }

    #[test]
    fn test_recording_same_week_twice_is_idempotent() {
        let season = Season::new(2025);
        let once = record_week(None, season, Week::new(3), &week_one());
        let twice = record_week(Some(once.clone()), season, Week::new(3), &week_one());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_weeks_sort_numerically() {
        let mut history = History::new(Season::new(2025));
        for week in [10, 2, 1] {
            history = record_week(Some(history), Season::new(2025), Week::new(week), &[]);
        }

        let text = serde_json::to_string(&history).unwrap();
        assert_eq!(text, r#"{"season":2025,"weeks":{"1":[],"2":[],"10":[]}}"#);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let existing: History = serde_json::from_value(json!({
            "season": 2024,
            "weeks": { "1": [{ "roster_id": 3, "team_name": "Moose", "rank": 4 }] },
            "notes": "keep me"
        }))
        .unwrap();

        let updated = record_week(Some(existing), Season::new(2025), Week::new(2), &[]);
        let value = serde_json::to_value(&updated).unwrap();

        assert_eq!(value["season"], 2024);
        assert_eq!(value["notes"], "keep me");
    }

    #[test]
    fn test_other_weeks_are_written_back_verbatim() {
        let week_one = r#"[{"extra":true,"rank":1,"roster_id":"3","team_name":"Moose"},{"rank":"2"}]"#;
        let text = format!(r#"{{"season":2025,"weeks":{{"1":{week_one}}}}}"#);
        let existing: History = serde_json::from_str(&text).unwrap();

        let updated = record_week(
            Some(existing),
            Season::new(2025),
            Week::new(2),
            &[json!({ "roster_id": "4", "team_name": "Zebras", "rank": "1", "summary": "hot" })],
        );
        let written = serde_json::to_string(&updated).unwrap();

        assert!(written.contains(&format!(r#""1":{week_one}"#)), "week 1 changed: {written}");
        assert_eq!(
            updated.week(Week::new(2)),
            Some(&json!([{ "roster_id": 4, "team_name": "Zebras", "rank": 1 }]))
        );
    }

    #[test]
    fn test_malformed_weeks_is_rejected() {
        assert!(serde_json::from_value::<History>(json!({ "weeks": [] })).is_err());
        assert!(serde_json::from_value::<History>(json!({ "weeks": { "one": [] } })).is_err());
        assert!(serde_json::from_value::<History>(json!({ "weeks": { "1": {} } })).is_err());
        assert!(serde_json::from_value::<History>(json!([])).is_err());
    }
}
