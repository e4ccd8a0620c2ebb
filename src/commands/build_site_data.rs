//! `build-site-data`: teams, placeholder power rankings and matchups for a week.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::SiteArgs,
    core::{Artifact, ArtifactStore},
    sleeper::SleeperClient,
    transform::{
        matchups::{build_matchups, resolve_pairs, MatchupsDocument},
        rankings::{placeholder_rankings, PowerRankingsDocument},
        teams::{build_teams, roster_team_names},
    },
    LeagueId, Result, Season, Week,
};

use super::{report_written, resolve_league_id};

pub async fn handle_build_site_data(league_id: Option<LeagueId>, site: SiteArgs) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = SleeperClient::new()?;
    let store = ArtifactStore::for_docs_dir(&site.docs_dir);
    let written = build_site_data(&client, &store, &league_id, site.season, site.week).await?;
    report_written(&written);
    Ok(())
}

pub async fn build_site_data(
    client: &SleeperClient,
    store: &ArtifactStore,
    league_id: &LeagueId,
    season: Season,
    week: Week,
) -> Result<Vec<PathBuf>> {
    let users = client.league_users(league_id).await?;
    let rosters = client.league_rosters(league_id).await?;
    let entries = client.matchups(league_id, week).await?;

    let teams = build_teams(league_id, &users, &rosters);

    let rankings = PowerRankingsDocument {
        league_id: league_id.clone(),
        season,
        week,
        rankings: placeholder_rankings(&teams),
    };

    let all_ids: Vec<_> = rosters.iter().filter_map(|r| r.roster_id).collect();
    let pairs = resolve_pairs(&entries, &all_ids);
    debug!(entries = entries.len(), pairs = pairs.len(), "resolved matchups");

    let predictions = match store.read_json::<Value>(Artifact::MatchupPredictions { season, week }) {
        Ok(predictions) => predictions,
        Err(e) => {
            warn!("ignoring unreadable matchup predictions: {e:#}");
            None
        }
    };

    let matchups = MatchupsDocument {
        league_id: league_id.clone(),
        season,
        week,
        matchups: build_matchups(
            &pairs,
            &roster_team_names(&users, &rosters),
            predictions.as_ref(),
        ),
    };

    Ok(vec![
        store.write_json(Artifact::Teams, &teams)?,
        store.write_json(Artifact::PowerRankings { season, week }, &rankings)?,
        store.write_json(Artifact::Matchups { season, week }, &matchups)?,
    ])
}
