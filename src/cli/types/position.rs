//! Fantasy football position types.

use std::fmt;

/// Scoring positions that projections are fetched for.
///
/// Sleeper and FantasyPros disagree on the team-defense label: Sleeper calls
/// it `DEF`, FantasyPros calls it `DST`.
///
/// # Examples
///
/// ```rust
/// use sleeper_site::Position;
///
/// let def = Position::DEF;
/// assert_eq!(def.sleeper_label(), "DEF");
/// assert_eq!(def.fantasypros_label(), "DST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Every projected position, in fetch order.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// Label used by the Sleeper projections endpoint.
    pub fn sleeper_label(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }

    /// Label used in FantasyPros output rows.
    pub fn fantasypros_label(&self) -> &'static str {
        match self {
            Position::DEF => "DST",
            other => other.sleeper_label(),
        }
    }

    /// Path segment of the FantasyPros projections page (`qb.php`, `dst.php`, ...).
    pub fn fantasypros_slug(&self) -> &'static str {
        match self {
            Position::QB => "qb",
            Position::RB => "rb",
            Position::WR => "wr",
            Position::TE => "te",
            Position::K => "k",
            Position::DEF => "dst",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sleeper_label())
    }
}
