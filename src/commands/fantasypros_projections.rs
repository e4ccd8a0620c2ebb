//! `fantasypros-projections`: FantasyPros projections joined onto Sleeper ids.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    cli::SiteArgs,
    core::{Artifact, ArtifactStore},
    fantasypros::FantasyProsClient,
    identity::IdentityIndex,
    sleeper::SleeperClient,
    transform::projections::{match_external_rows, ProjectionsDocument},
    Position, Result, Season, Week,
};

use super::report_written;

pub async fn handle_fantasypros_projections(site: SiteArgs, scoring: String) -> Result<()> {
    let sleeper = SleeperClient::new()?;
    let fantasypros = FantasyProsClient::new()?;
    let store = ArtifactStore::for_docs_dir(&site.docs_dir);
    let path = fantasypros_projections(&sleeper, &fantasypros, &store, site.season, site.week, &scoring).await?;
    report_written(&[path]);
    Ok(())
}

pub async fn fantasypros_projections(
    sleeper: &SleeperClient,
    fantasypros: &FantasyProsClient,
    store: &ArtifactStore,
    season: Season,
    week: Week,
    scoring: &str,
) -> Result<PathBuf> {
    let players = sleeper.players_nfl().await?;
    let index = IdentityIndex::build(&players);
    debug!(entries = index.len(), "built identity index");

    let mut projections = Vec::new();
    for position in Position::ALL {
        let rows = match fantasypros.fetch_projections(position, week, scoring).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(position = position.fantasypros_label(), "skipping position: {e}");
                continue;
            }
        };
        let matched = match_external_rows(&index, position, &rows);
        if matched.len() < rows.len() {
            info!(
                position = position.fantasypros_label(),
                unmatched = rows.len() - matched.len(),
                "dropped rows with no Sleeper match"
            );
        }
        projections.extend(matched);
    }

    let doc = ProjectionsDocument {
        season,
        week,
        projections,
    };
    Ok(store.write_json(Artifact::Projections { season, week }, &doc)?)
}
