//! Sleeper fantasy football site-data library
//!
//! Fetches league data from the Sleeper API and reshapes it into the static
//! JSON/CSV artifacts a league website is built from: teams, matchups, power
//! rankings, projections, standings and a season history.
//!
//! ## Features
//!
//! - **League export**: teams and rosters as JSON for the site and CSV for spreadsheets
//! - **Projections**: Sleeper's own projections, or FantasyPros rows joined onto
//!   Sleeper player ids by normalized name and team
//! - **Narratives**: power rankings and matchup predictions from a chat model
//! - **History**: week-by-week rankings accumulated per season
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_site::{
//!     commands::build_site_data::build_site_data, core::ArtifactStore, sleeper::SleeperClient,
//!     LeagueId, Season, Week,
//! };
//!
//! # async fn example() -> sleeper_site::Result<()> {
//! let client = SleeperClient::new()?;
//! let store = ArtifactStore::new("docs/data");
//! let league_id: LeagueId = "1248075580834856960".parse()?;
//!
//! for path in build_site_data(&client, &store, &league_id, Season::default(), Week::new(1)).await? {
//!     println!("Wrote: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SLEEPER_LEAGUE_ID=1248075580834856960
//! export OPENAI_API_KEY=sk-...   # narrative commands only; also read from .env
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fantasypros;
pub mod identity;
pub mod llm;
pub mod sleeper;
pub mod transform;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, RosterId, Season, Week};
pub use error::{Result, SleeperError};
pub use llm::OPENAI_API_KEY_ENV;

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";

/// League used when neither `--league-id` nor `SLEEPER_LEAGUE_ID` is set.
pub const DEFAULT_LEAGUE_ID: &str = "1248075580834856960";
