//! FantasyPros weekly projections, downloaded as CSV.
//!
//! Column headers vary between pages and over time (`Player` vs `PLAYER`,
//! `FPTS` vs `FPTS.`), so rows are read as string maps and the known
//! spellings are tried in order.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{
    cli::types::{Position, Week},
    error::Result,
};

/// Base path of the FantasyPros projections pages.
pub const FANTASYPROS_BASE: &str = "https://www.fantasypros.com/nfl/projections";

const NAME_COLUMNS: [&str; 2] = ["Player", "PLAYER"];
const TEAM_COLUMNS: [&str; 2] = ["Team", "TEAM"];
const POINTS_COLUMNS: [&str; 3] = ["FPTS", "FPTS.", "Points"];

/// One projection row keyed by free-text name and team.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalProjectionRow {
    pub name: String,
    /// Uppercased team abbreviation, empty for free agents.
    pub team: String,
    pub points: f64,
}

fn first_present<'a>(record: &'a HashMap<String, String>, columns: &[&str]) -> Option<&'a str> {
    columns
        .iter()
        .filter_map(|column| record.get(*column))
        .map(String::as_str)
        .find(|value| !value.trim().is_empty())
}

impl ExternalProjectionRow {
    /// Pick name/team/points out of a CSV record. Points that fail to parse
    /// count as zero.
    pub fn from_record(record: &HashMap<String, String>) -> Self {
        let name = first_present(record, &NAME_COLUMNS).unwrap_or("").trim().to_string();
        let team = first_present(record, &TEAM_COLUMNS)
            .unwrap_or("")
            .trim()
            .to_uppercase();
        let points = first_present(record, &POINTS_COLUMNS)
            .and_then(|raw| raw.trim().replace(',', "").parse::<f64>().ok())
            .filter(|p| p.is_finite())
            .unwrap_or(0.0);

        Self { name, team, points }
    }
}

/// Parse a FantasyPros CSV export into rows.
pub fn parse_projection_csv(content: &str) -> Result<Vec<ExternalProjectionRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize::<HashMap<String, String>>() {
        rows.push(ExternalProjectionRow::from_record(&record?));
    }
    Ok(rows)
}

/// HTTP client for FantasyPros CSV downloads.
#[derive(Debug, Clone)]
pub struct FantasyProsClient {
    http: Client,
    base_url: String,
}

impl FantasyProsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FANTASYPROS_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("sleeper-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Download and parse one position's projections for a week.
    pub async fn fetch_projections(
        &self,
        position: Position,
        week: Week,
        scoring: &str,
    ) -> Result<Vec<ExternalProjectionRow>> {
        let url = format!("{}/{}.php", self.base_url, position.fantasypros_slug());
        let week = week.to_string();
        debug!(%url, %week, scoring, "GET FantasyPros CSV");

        let bytes = self
            .http
            .get(&url)
            .query(&[("week", week.as_str()), ("scoring", scoring), ("csv", "1")])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse_projection_csv(&String::from_utf8_lossy(&bytes))
    }
}
