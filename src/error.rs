//! Error types for the Sleeper site-data CLI

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

/// Exit code for configuration problems (missing credentials).
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Unexpected {endpoint} response from Sleeper API (expected {expected})")]
    UnexpectedShape {
        endpoint: String,
        expected: &'static str,
    },

    #[error("Missing {env_var} environment variable")]
    MissingCredential { env_var: String },

    #[error("Artifact not found: {}", path.display())]
    MissingArtifact { path: PathBuf },

    #[error("Narrative generation failed: {message}")]
    Narrative { message: String },

    #[error("{message}")]
    Other { message: String },
}

impl SleeperError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SleeperError::MissingCredential { .. } => EXIT_CONFIG,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<anyhow::Error> for SleeperError {
    fn from(err: anyhow::Error) -> Self {
        SleeperError::Other {
            message: format!("{err:#}"),
        }
    }
}
