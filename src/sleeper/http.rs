//! HTTP client for the Sleeper read-only league API.
//!
//! Every call is a single GET with a fixed timeout. The top-level JSON shape
//! is checked before deserializing: users, rosters and the player directory
//! must have the expected shape, while matchups, projections and NFL state
//! degrade to empty values because Sleeper returns `null` or `{}` for them
//! before the season starts.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Position, Season, Week},
    error::{Result, SleeperError},
    sleeper::types::{MatchupEntry, NflState, PlayerDirectory, Roster, User},
};


/// Base path for Sleeper API v1.
pub const SLEEPER_API_BASE: &str = "https://api.sleeper.app/v1";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Expected top-level JSON shape of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Array,
    Object,
}

impl Shape {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::Array => "array",
            Shape::Object => "object",
        }
    }
}

/// Thin wrapper over `reqwest::Client` bound to a Sleeper base URL.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
}

impl SleeperClient {
    /// Client against the production API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(SLEEPER_API_BASE)
    }

    /// Client against an arbitrary base URL (used by tests with a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("sleeper-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base}{path}` and decode JSON. Non-2xx statuses are errors.
    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let value = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(value)
    }

    /// Fetch and require the given shape; a mismatch is a hard failure.
    async fn get_strict<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        shape: Shape,
    ) -> Result<T> {
        let value = self.get_json(path, &[]).await?;
        if !shape.matches(&value) {
            return Err(SleeperError::UnexpectedShape {
                endpoint: endpoint.to_string(),
                expected: shape.name(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch and substitute `T::default()` when the shape is wrong.
    async fn get_lenient<T: DeserializeOwned + Default>(
        &self,
        endpoint: &str,
        path: &str,
        query: &[(&str, &str)],
        shape: Shape,
    ) -> Result<T> {
        let value = self.get_json(path, query).await?;
        if !shape.matches(&value) {
            debug!(endpoint, expected = shape.name(), "treating response as empty");
            return Ok(T::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    pub async fn league_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.get_strict("users", &format!("/league/{league_id}/users"), Shape::Array)
            .await
    }

    pub async fn league_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_strict("rosters", &format!("/league/{league_id}/rosters"), Shape::Array)
            .await
    }

    /// Bulk NFL player directory (several MB; fetched once per run).
    pub async fn players_nfl(&self) -> Result<PlayerDirectory> {
        self.get_strict("players", "/players/nfl", Shape::Object)
            .await
    }

    /// Weekly matchups; empty before the schedule is published.
    pub async fn matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<MatchupEntry>> {
        self.get_lenient(
            "matchups",
            &format!("/league/{league_id}/matchups/{week}"),
            &[],
            Shape::Array,
        )
        .await
    }

    /// Raw projection entries for one position. Entries stay untyped because
    /// point totals move between the root and the `stats` object.
    pub async fn projections(
        &self,
        season: Season,
        week: Week,
        position: Option<Position>,
        season_type: &str,
    ) -> Result<Vec<Value>> {
        let mut query = Vec::new();
        if let Some(position) = position {
            query.push(("position", position.sleeper_label()));
        }
        if !season_type.is_empty() {
            query.push(("season_type", season_type));
        }
        self.get_lenient(
            "projections",
            &format!("/projections/nfl/{season}/{week}"),
            &query,
            Shape::Array,
        )
        .await
    }

    pub async fn nfl_state(&self) -> Result<NflState> {
        self.get_lenient("state", "/state/nfl", &[], Shape::Object)
            .await
    }
}
