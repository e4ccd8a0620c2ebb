//! Sleeper league API: HTTP client and payload models.

pub mod http;
pub mod types;

pub use http::SleeperClient;
pub use types::{MatchupEntry, NflState, PlayerDirectory, PlayerRecord, Roster, User};
