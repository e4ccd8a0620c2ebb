//! `export-csv`: league teams and rosters as CSV files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    core::write_atomic,
    sleeper::SleeperClient,
    transform::teams::{
        build_teams, render_csv, roster_csv_rows, team_csv_rows, ROSTER_CSV_HEADERS,
        TEAM_CSV_HEADERS,
    },
    LeagueId, Result,
};

use super::{report_written, resolve_league_id};

pub async fn handle_export_csv(league_id: Option<LeagueId>, out_dir: PathBuf) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = SleeperClient::new()?;
    let written = export_csv(&client, &league_id, &out_dir).await?;
    report_written(&written);
    Ok(())
}

/// Write `{league_id}_teams.csv` and `{league_id}_rosters.csv` into `out_dir`.
pub async fn export_csv(
    client: &SleeperClient,
    league_id: &LeagueId,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let users = client.league_users(league_id).await?;
    let rosters = client.league_rosters(league_id).await?;
    let players = client.players_nfl().await?;
    debug!(users = users.len(), rosters = rosters.len(), players = players.len(), "fetched league");

    let teams = build_teams(league_id, &users, &rosters);
    let roster_rows = roster_csv_rows(league_id, &users, &rosters, &players);

    let teams_path = out_dir.join(format!("{league_id}_teams.csv"));
    write_atomic(&teams_path, &render_csv(&TEAM_CSV_HEADERS, &team_csv_rows(&teams))?)?;

    let rosters_path = out_dir.join(format!("{league_id}_rosters.csv"));
    write_atomic(&rosters_path, &render_csv(&ROSTER_CSV_HEADERS, &roster_rows)?)?;

    Ok(vec![teams_path, rosters_path])
}
