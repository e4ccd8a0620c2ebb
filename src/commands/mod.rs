//! Command implementations for the sleeper-site CLI.
//!
//! Each subcommand has a `handle_*` entry point that resolves configuration,
//! builds production clients and prints what it wrote, plus a core function
//! taking injected clients and an [`ArtifactStore`](crate::core::ArtifactStore)
//! so the pipeline can be driven against mock servers in tests.

use std::path::PathBuf;

use crate::{
    error::{Result, SleeperError},
    llm::OPENAI_API_KEY_ENV,
    LeagueId, DEFAULT_LEAGUE_ID, LEAGUE_ID_ENV_VAR,
};

pub mod build_site_data;
pub mod export_csv;
pub mod fantasypros_projections;
pub mod matchup_predictions;
pub mod power_rankings;
pub mod projections;
pub mod update_history;

#[cfg(test)]
mod tests;

/// League id from the flag, then `SLEEPER_LEAGUE_ID`, then the built-in default.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    resolve_league_id_from(league_id, std::env::var(LEAGUE_ID_ENV_VAR).ok())
}

/// [`resolve_league_id`] with the environment value passed in. A set but
/// malformed variable is an error rather than a silent fallback.
pub fn resolve_league_id_from(league_id: Option<LeagueId>, env_value: Option<String>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match env_value {
        Some(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Ok(LeagueId::new(DEFAULT_LEAGUE_ID)),
    }
}

/// `OPENAI_API_KEY` from the environment (a `.env` file is loaded at startup).
pub fn resolve_api_key() -> Result<String> {
    resolve_api_key_from(std::env::var(OPENAI_API_KEY_ENV).ok())
}

pub fn resolve_api_key_from(env_value: Option<String>) -> Result<String> {
    env_value
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| SleeperError::MissingCredential {
            env_var: OPENAI_API_KEY_ENV.to_string(),
        })
}

/// Print one `Wrote: <path>` line per artifact.
pub fn report_written(paths: &[PathBuf]) {
    for path in paths {
        println!("Wrote: {}", path.display());
    }
}
