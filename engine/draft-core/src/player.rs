//! Player records and the fixed position taxonomy.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six roster positions of a standard league.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

/// All positions in canonical order. Indexes match [`Position::index`].
pub const POSITIONS: [Position; 6] = [
    Position::QB,
    Position::RB,
    Position::WR,
    Position::TE,
    Position::K,
    Position::DST,
];

impl Position {
    /// Dense index for per-position tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Position::QB => 0,
            Position::RB => 1,
            Position::WR => 2,
            Position::TE => 3,
            Position::K => 4,
            Position::DST => 5,
        }
    }

    /// Whether the position is eligible for the FLEX lineup slot.
    #[inline]
    pub fn is_flex(self) -> bool {
        matches!(self, Position::RB | Position::WR | Position::TE)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when a pool row carries an unknown position string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown position '{0}'")]
pub struct PositionParseError(pub String);

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Pool exports vary in casing ("QB", "qb", "Dst"), accept all of them.
        match s.to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DST" => Ok(Position::DST),
            _ => Err(PositionParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = PositionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One row of the player pool.
///
/// A player's identity is its `name`; the pool enforces that no two rows share
/// one. `rank` is ascending-is-better and unique within a pool (ties broken by
/// name at load time). `projected_points` feeds valuation, `actual_points`
/// feeds reward evaluation only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    #[serde(rename = "Player")]
    pub name: String,

    #[serde(rename = "Team")]
    pub team: String,

    #[serde(rename = "Position")]
    pub position: Position,

    #[serde(rename = "Rank")]
    pub rank: u32,

    #[serde(rename = "Total_FPTS")]
    pub projected_points: f64,

    #[serde(rename = "actual_points")]
    pub actual_points: f64,
}

/// Per-position counters, indexed the same way as [`POSITIONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts([u32; 6]);

impl PositionCounts {
    #[inline]
    pub fn get(&self, position: Position) -> u32 {
        self.0[position.index()]
    }

    #[inline]
    pub fn add(&mut self, position: Position) {
        self.0[position.index()] += 1;
    }

    /// Total across all positions.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}
