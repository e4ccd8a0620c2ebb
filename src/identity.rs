//! Player identity resolution.
//!
//! External projection sources only give a free-text player name and a team
//! abbreviation. This module maps those onto Sleeper player ids by joining on
//! a normalized name plus the uppercased team.
//!
//! Normalization must be applied the same way to both sides of the join;
//! everything goes through [`NameKey::normalize`].

use std::collections::HashMap;
use std::fmt;

use crate::{cli::types::PlayerId, sleeper::types::PlayerDirectory};


/// Generational suffixes dropped from names before matching.
const NAME_SUFFIXES: [&str; 5] = ["jr", "sr", "ii", "iii", "iv"];

/// Normalized player name used as a join key.
///
/// Lowercased, punctuation stripped, suffixes removed, whitespace collapsed.
/// `NameKey::normalize` is idempotent.
///
/// # Examples
///
/// ```rust
/// use sleeper_site::identity::NameKey;
///
/// assert_eq!(NameKey::normalize("Odell Beckham Jr.").as_str(), "odell beckham");
/// assert_eq!(NameKey::normalize("D.J.  Moore"), NameKey::normalize("dj moore"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    pub fn normalize(raw: &str) -> Self {
        let stripped: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        let key = stripped
            .split_whitespace()
            .filter(|token| !NAME_SUFFIXES.contains(token))
            .collect::<Vec<_>>()
            .join(" ");

        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Team abbreviations are compared uppercased with surrounding space removed.
fn team_key(team: &str) -> String {
    team.trim().to_uppercase()
}

/// Lookup from `(NameKey, TEAM)` to player id, built once per run.
///
/// When two directory entries produce the same key the later one wins
/// silently. The directory iterates in player-id order, so "later" means the
/// greater id.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    by_name_team: HashMap<(NameKey, String), PlayerId>,
}

impl IdentityIndex {
    pub fn build(directory: &PlayerDirectory) -> Self {
        let mut by_name_team = HashMap::with_capacity(directory.len());

        for (player_id, player) in directory {
            let team = team_key(player.team());
            let full_name = player.full_name.as_deref().unwrap_or("");

            if !full_name.is_empty() {
                by_name_team.insert((NameKey::normalize(full_name), team), player_id.clone());
            } else if let (Some(first), Some(last)) = (
                player.first_name.as_deref().filter(|s| !s.is_empty()),
                player.last_name.as_deref().filter(|s| !s.is_empty()),
            ) {
                let joined = format!("{first} {last}");
                by_name_team.insert((NameKey::normalize(&joined), team), player_id.clone());
            }
        }

        Self { by_name_team }
    }

    pub fn len(&self) -> usize {
        self.by_name_team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name_team.is_empty()
    }

    /// Resolve a display name and team abbreviation (possibly empty).
    ///
    /// Exact `(name, team)` match first. When the team is empty and nothing
    /// matched, any entry with the same name is accepted regardless of team;
    /// ties go to the lowest player id so the result is stable across runs.
    pub fn resolve(&self, name: &str, team: &str) -> Option<&PlayerId> {
        let name_key = NameKey::normalize(name);
        let team = team_key(team);

        if let Some(id) = self.by_name_team.get(&(name_key.clone(), team.clone())) {
            return Some(id);
        }
        if !team.is_empty() {
            return None;
        }

        self.by_name_team
            .iter()
            .filter(|((key, _), _)| *key == name_key)
            .map(|(_, id)| id)
            .min()
    }
}
