//! `power-rankings`: weekly rankings with analysis from the narrative generator.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::SiteArgs,
    core::{Artifact, ArtifactStore},
    llm::{prompt::power_rankings_request, NarrativeGenerator, OpenAiClient},
    sleeper::SleeperClient,
    transform::{rankings::PowerRankingsDocument, teams::build_teams},
    LeagueId, Result, Season, Week,
};

use super::{report_written, resolve_api_key, resolve_league_id};

pub async fn handle_power_rankings(
    league_id: Option<LeagueId>,
    site: SiteArgs,
    model: String,
) -> Result<()> {
    let api_key = resolve_api_key()?;
    let league_id = resolve_league_id(league_id)?;
    let client = SleeperClient::new()?;
    let generator = OpenAiClient::new(api_key, model)?;
    let store = ArtifactStore::for_docs_dir(&site.docs_dir);

    let path = power_rankings(&client, &generator, &store, &league_id, site.season, site.week).await?;
    report_written(&[path]);
    Ok(())
}

/// `response.rankings` when it is an array, otherwise nothing.
pub fn rankings_from_response(response: &Value) -> Vec<Value> {
    match response.get("rankings") {
        Some(Value::Array(rankings)) => rankings.clone(),
        Some(_) => {
            warn!("narrative response has a non-array `rankings` field; writing no rankings");
            Vec::new()
        }
        None => Vec::new(),
    }
}

pub async fn power_rankings(
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

    let teams = build_teams(league_id, &users, &rosters);
    let request = power_rankings_request(season, week, &teams, &rosters, &players);
    let response = generator.generate(&request).await?;

    let rankings = rankings_from_response(&response);
    debug!(count = rankings.len(), "received rankings");

    let doc = PowerRankingsDocument {
        league_id: league_id.clone(),
        season,
        week,
        rankings,
    };
    Ok(store.write_json(Artifact::PowerRankings { season, week }, &doc)?)
}
