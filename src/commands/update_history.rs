//! `update-history`: fold a week's power rankings into `history.json`, then
//! refresh the season's standings and roster snapshots.
//!
//! Only the rankings file is required. Standings and rosters come from the
//! league API and are skipped, not failed, when it cannot be reached.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::SiteArgs,
    core::{Artifact, ArtifactStore},
    error::SleeperError,
    sleeper::{PlayerDirectory, SleeperClient},
    transform::{
        history::{record_week, History},
        standings::{build_rosters_min, build_standings},
    },
    LeagueId, Result, Season, Week,
};

use super::report_written;

/// Paths written by one `update-history` run.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryUpdate {
    pub history: PathBuf,
    pub standings: Option<PathBuf>,
    pub rosters_min: Option<PathBuf>,
}

pub async fn handle_update_history(site: SiteArgs) -> Result<()> {
    let client = SleeperClient::new()?;
    let store = ArtifactStore::for_docs_dir(&site.docs_dir);
    let update = update_history(&client, &store, site.season, site.week).await?;

    println!("Updated: {}", update.history.display());
    let snapshots: Vec<_> = [update.standings, update.rosters_min]
        .into_iter()
        .flatten()
        .collect();
    report_written(&snapshots);
    Ok(())
}

/// League id recorded in the rankings file, quoted or not.
fn league_id_of(week_doc: &Value) -> Option<LeagueId> {
    match week_doc.get("league_id")? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

pub async fn update_history(
    client: &SleeperClient,
    store: &ArtifactStore,
    season: Season,
    week: Week,
) -> Result<HistoryUpdate> {
    let week_artifact = Artifact::PowerRankings { season, week };
    let week_doc: Value = store
        .read_json(week_artifact)?
        .ok_or_else(|| SleeperError::MissingArtifact {
            path: store.path(week_artifact),
        })?;

    let rankings = week_doc
        .get("rankings")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let existing = match store.read_json::<History>(Artifact::History { season }) {
        Ok(existing) => existing,
        Err(e) => {
            warn!("starting a fresh history, existing file is unreadable: {e:#}");
            None
        }
    };
    let history = record_week(existing, season, week, rankings);
    let history_path = store.write_json(Artifact::History { season }, &history)?;

    let Some(league_id) = league_id_of(&week_doc) else {
        warn!("rankings file has no usable league_id; skipping standings and rosters");
        return Ok(HistoryUpdate {
            history: history_path,
            standings: None,
            rosters_min: None,
        });
    };

    let rosters = client.league_rosters(&league_id).await.unwrap_or_else(|e| {
        warn!("could not fetch rosters, skipping standings: {e}");
        Vec::new()
    });
    debug!(rosters = rosters.len(), "fetched rosters");

    let standings = build_standings(season, &rosters);
    let standings_path = if standings.standings.is_empty() {
        None
    } else {
        Some(store.write_json(Artifact::Standings { season }, &standings)?)
    };

    let players = if rosters.is_empty() {
        PlayerDirectory::new()
    } else {
        client.players_nfl().await.unwrap_or_else(|e| {
            warn!("could not fetch players, starters will show raw ids: {e}");
            PlayerDirectory::new()
        })
    };

    let rosters_min = build_rosters_min(season, &rosters, &players);
    let rosters_min_path = if rosters_min.rosters.is_empty() {
        None
    } else {
        Some(store.write_json(Artifact::RostersMin { season }, &rosters_min)?)
    };

    Ok(HistoryUpdate {
        history: history_path,
        standings: standings_path,
        rosters_min: rosters_min_path,
    })
}
