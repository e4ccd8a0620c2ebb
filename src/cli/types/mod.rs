//! Type-safe wrappers for Sleeper league data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, RosterId};
pub use position::Position;
pub use time::{Season, Week};
