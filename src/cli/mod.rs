//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Season, Week};

/// Arguments shared by every command that writes weekly site artifacts.
#[derive(Debug, Args)]
pub struct SiteArgs {
    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Scoring week.
    #[clap(long, short, default_value_t = Week::default())]
    pub week: Week,

    /// Site root; artifacts are written under `<docs-dir>/data`.
    #[clap(long, default_value = "docs")]
    pub docs_dir: PathBuf,
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-site", about = "Sleeper league data exporter for static sites")]
pub struct SleeperSite {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export league teams and rosters to CSV.
    ExportCsv {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Directory to write CSV files to.
        #[clap(long, default_value = "data")]
        out_dir: PathBuf,
    },

    /// Build teams, placeholder power rankings and matchups JSON for a week.
    BuildSiteData {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        #[clap(flatten)]
        site: SiteArgs,
    },

    /// Fetch Sleeper projections for every position and write projections.json.
    Projections {
        #[clap(flatten)]
        site: SiteArgs,

        /// Season type (regular, pre, post). Read from the NFL state endpoint when omitted.
        #[clap(long)]
        season_type: Option<String>,
    },

    /// Fetch FantasyPros projections, match them to Sleeper player ids and write projections.json.
    FantasyprosProjections {
        #[clap(flatten)]
        site: SiteArgs,

        /// FantasyPros scoring format (PPR, HALF, STD).
        #[clap(long, default_value = "PPR")]
        scoring: String,
    },

    /// Generate weekly power rankings with analysis via the generative-text API.
    PowerRankings {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        #[clap(flatten)]
        site: SiteArgs,

        /// Model name passed to the generative-text API.
        #[clap(long, default_value = crate::llm::DEFAULT_MODEL)]
        model: String,
    },

    /// Generate weekly matchup predictions via the generative-text API.
    MatchupPredictions {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        #[clap(flatten)]
        site: SiteArgs,

        /// Model name passed to the generative-text API.
        #[clap(long, default_value = crate::llm::DEFAULT_MODEL)]
        model: String,
    },

    /// Fold a week's power rankings into history.json and refresh standings and roster snapshots.
    UpdateHistory {
        #[clap(flatten)]
        site: SiteArgs,
    },
}
