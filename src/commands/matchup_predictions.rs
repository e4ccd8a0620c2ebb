//! `matchup-predictions`: predicted winners and a spicy matchup of the week.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    cli::SiteArgs,
    core::{Artifact, ArtifactStore},
    llm::{
        prompt::{matchup_predictions_request, PredictionsContext},
        NarrativeGenerator, OpenAiClient,
    },
    sleeper::SleeperClient,
    transform::{
        matchups::{fallback_pairs, pairs_from_entries},
        rankings::ranked_teams,
        teams::build_teams,
    },
    LeagueId, Result, RosterId, Season, Week,
};

use super::{report_written, resolve_api_key, resolve_league_id};

pub async fn handle_matchup_predictions(
    league_id: Option<LeagueId>,
    site: SiteArgs,
    model: String,
) -> Result<()> {
    let api_key = resolve_api_key()?;
    let league_id = resolve_league_id(league_id)?;
    let client = SleeperClient::new()?;
    let generator = OpenAiClient::new(api_key, model)?;
    let store = ArtifactStore::for_docs_dir(&site.docs_dir);

    let path =
        matchup_predictions(&client, &generator, &store, &league_id, site.season, site.week).await?;
    report_written(&[path]);
    Ok(())
}

/// Ranks from this week's `power_rankings.json`, if there is one.
pub fn load_ranks(store: &ArtifactStore, season: Season, week: Week) -> BTreeMap<RosterId, u32> {
    let doc = match store.read_json::<Value>(Artifact::PowerRankings { season, week }) {
        Ok(Some(doc)) => doc,
        Ok(None) => return BTreeMap::new(),
        Err(e) => {
            warn!("ignoring unreadable power rankings: {e:#}");
            return BTreeMap::new();
        }
    };

    let entries = doc
        .get("rankings")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    ranked_teams(entries)
        .into_iter()
        .filter_map(|team| Some((team.roster_id?, team.rank?)))
        .collect()
}

/// `{league_id, season, week}` followed by every field of the model reply.
pub fn predictions_document(league_id: &LeagueId, season: Season, week: Week, response: Value) -> Value {
    let mut doc = Map::new();
    doc.insert("league_id".to_string(), Value::from(league_id.as_str()));
    doc.insert("season".to_string(), Value::from(season.as_u16()));
    doc.insert("week".to_string(), Value::from(week.as_u16()));

    match response {
        Value::Object(fields) => doc.extend(fields),
        other => warn!("narrative response is not an object, discarding: {other}"),
    }
    Value::Object(doc)
}

pub async fn matchup_predictions(
    client: &SleeperClient,
    generator: &dyn NarrativeGenerator,
    store: &ArtifactStore,
    league_id: &LeagueId,
    season: Season,
    week: Week,
) -> Result<PathBuf> {
    let users = client.league_users(league_id).await?;
    let rosters = client.league_rosters(league_id).await?;
    let players = client.players_nfl().await?;
    let entries = client.matchups(league_id, week).await?;

    let teams = build_teams(league_id, &users, &rosters);
    let ranks = load_ranks(store, season, week);

    let mut pairs = pairs_from_entries(&entries);
    if pairs.is_empty() {
        let owned: Vec<_> = teams.teams.iter().map(|t| t.roster_id).collect();
        pairs = fallback_pairs(&owned);
    }

    let request = matchup_predictions_request(&PredictionsContext {
        season,
        week,
        teams: &teams,
        ranks: &ranks,
        pairs: &pairs,
        rosters: &rosters,
        players: &players,
    });
    let response = generator.generate(&request).await?;

    let doc = predictions_document(league_id, season, week, response);
    Ok(store.write_json(Artifact::MatchupPredictions { season, week }, &doc)?)
}
