//! ID types for Sleeper leagues, rosters and players.

use crate::error::{Result, SleeperError};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper league ids are 18-19 digit snowflakes. They are kept as strings
/// because they only ever appear in URLs and output documents.
///
/// # Examples
///
/// ```rust
/// use sleeper_site::LeagueId;
///
/// let league_id: LeagueId = "1248075580834856960".parse().unwrap();
/// assert_eq!(league_id.as_str(), "1248075580834856960");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = SleeperError;

    /// League ids must be non-empty and all digits.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // u64 parse gives us the digit check and a ParseIntError on failure
        trimmed.parse::<u64>()?;
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for roster ids (one per team slot in a league).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RosterId(pub u32);

impl RosterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RosterId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Roster ids come back as integers from Sleeper, but generated documents
/// (LLM output in particular) sometimes quote them.
impl<'de> Deserialize<'de> for RosterId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u32),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(RosterId(n)),
            Raw::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
                Ok(RosterId(f as u32))
            }
            Raw::Float(f) => Err(de::Error::custom(format!("invalid roster id {f}"))),
            Raw::Text(s) => s.trim().parse().map(RosterId).map_err(de::Error::custom),
        }
    }
}

/// Type-safe wrapper for Sleeper player IDs.
///
/// Most ids are numeric strings, but team defenses use the team abbreviation
/// (`"KC"`), so this stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_parse() {
        let id: LeagueId = " 1248075580834856960 ".parse().unwrap();
        assert_eq!(id.as_str(), "1248075580834856960");
        assert_eq!(id.to_string(), "1248075580834856960");
    }

    #[test]
    fn test_league_id_rejects_non_numeric() {
        assert!("abc".parse::<LeagueId>().is_err());
        assert!("".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_roster_id_accepts_numbers_and_strings() {
        let from_int: RosterId = serde_json::from_str("7").unwrap();
        let from_str: RosterId = serde_json::from_str("\"7\"").unwrap();
        let from_float: RosterId = serde_json::from_str("7.0").unwrap();

        assert_eq!(from_int, RosterId::new(7));
        assert_eq!(from_str, RosterId::new(7));
        assert_eq!(from_float, RosterId::new(7));
    }

    #[test]
    fn test_roster_id_rejects_garbage() {
        assert!(serde_json::from_str::<RosterId>("\"seven\"").is_err());
        assert!(serde_json::from_str::<RosterId>("-1").is_err());
        assert!(serde_json::from_str::<RosterId>("1.5").is_err());
    }

    #[test]
    fn test_roster_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&RosterId::new(3)).unwrap(), "3");
    }

    #[test]
    fn test_player_id_ordering_is_lexicographic() {
        let mut ids = vec![PlayerId::from("4046"), PlayerId::from("KC"), PlayerId::from("1234")];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::from("1234"), PlayerId::from("4046"), PlayerId::from("KC")]);
    }
}
