//! `projections`: Sleeper's own weekly projections for every position.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::{
    cli::SiteArgs,
    core::{Artifact, ArtifactStore},
    sleeper::SleeperClient,
    transform::projections::{normalize_sleeper_projection, ProjectionsDocument},
    Position, Result, Season, Week,
};

use super::report_written;

const DEFAULT_SEASON_TYPE: &str = "regular";

pub async fn handle_projections(site: SiteArgs, season_type: Option<String>) -> Result<()> {
    let client = SleeperClient::new()?;
    let store = ArtifactStore::for_docs_dir(&site.docs_dir);
    let path = sleeper_projections(&client, &store, site.season, site.week, season_type).await?;
    report_written(&[path]);
    Ok(())
}

/// The flag wins; otherwise ask Sleeper which part of the season we are in.
async fn resolve_season_type(client: &SleeperClient, season_type: Option<String>) -> String {
    if let Some(season_type) = season_type.filter(|s| !s.trim().is_empty()) {
        return season_type;
    }
    match client.nfl_state().await {
        Ok(state) => state
            .season_type
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SEASON_TYPE.to_string()),
        Err(e) => {
            warn!("could not read NFL state, assuming {DEFAULT_SEASON_TYPE}: {e}");
            DEFAULT_SEASON_TYPE.to_string()
        }
    }
}

pub async fn sleeper_projections(
    client: &SleeperClient,
    store: &ArtifactStore,
    season: Season,
    week: Week,
    season_type: Option<String>,
) -> Result<PathBuf> {
    let season_type = resolve_season_type(client, season_type).await;

    let mut projections = Vec::new();
    for position in Position::ALL {
        let entries = match client.projections(season, week, Some(position), &season_type).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(%position, "skipping position: {e}");
                continue;
            }
        };
        let before = projections.len();
        projections.extend(entries.iter().filter_map(normalize_sleeper_projection));
        debug!(%position, rows = projections.len() - before, "normalized projections");
    }

    let doc = ProjectionsDocument {
        season,
        week,
        projections,
    };
    Ok(store.write_json(Artifact::Projections { season, week }, &doc)?)
}
