//! The shared player pool.
//!
//! Players are stored once in a rank-sorted arena and referenced everywhere
//! else by `PlayerId` index, so draft snapshots copy id lists instead of rows.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::player::{Player, Position, PositionCounts};

/// Index into the pool arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// Errors from constructing or loading a pool.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to read player pool: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate player '{0}' in pool")]
    DuplicatePlayer(String),

    #[error("player pool is empty")]
    Empty,
}

/// A deduplicated, rank-sorted collection of players.
///
/// Iteration order is ascending rank (ties broken by name), which downstream
/// code relies on: `DraftState::available` inherits it, and "top N by rank"
/// is a prefix.
#[derive(Debug)]
pub struct PlayerPool {
    players: Vec<Player>,
    by_name: HashMap<String, PlayerId>,
}

impl PlayerPool {
    /// Build a pool from rows, sorting by rank and rejecting duplicate names.
    pub fn new(mut players: Vec<Player>) -> Result<Self, PoolError> {
        if players.is_empty() {
            return Err(PoolError::Empty);
        }

        players.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));

        let mut by_name = HashMap::with_capacity(players.len());
        for (idx, player) in players.iter().enumerate() {
            if by_name
                .insert(player.name.clone(), PlayerId(idx as u32))
                .is_some()
            {
                return Err(PoolError::DuplicatePlayer(player.name.clone()));
            }
        }

        debug!(players = players.len(), "player pool built");
        Ok(Self { players, by_name })
    }

    /// Load a pool from a CSV file with the standard export columns
    /// (`Player`, `Team`, `Position`, `Rank`, `Total_FPTS`, `actual_points`).
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let reader = csv::Reader::from_path(path.as_ref())?;
        Self::from_csv(reader)
    }

    /// Load a pool from any CSV reader with the standard columns.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, PoolError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, PoolError> {
        let players = reader
            .deserialize()
            .collect::<Result<Vec<Player>, csv::Error>>()?;
        Self::new(players)
    }

    #[inline]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.0 as usize]
    }

    /// Look up a player by its identity (name).
    pub fn id_by_name(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All ids in ascending-rank order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len() as u32).map(PlayerId)
    }

    /// All `(id, player)` pairs in ascending-rank order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(idx, p)| (PlayerId(idx as u32), p))
    }

    /// Players at one position, still in ascending-rank order.
    pub fn at_position(&self, position: Position) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.iter().filter(move |(_, p)| p.position == position)
    }

    /// Pool-wide player counts per position.
    pub fn position_counts(&self) -> PositionCounts {
        let mut counts = PositionCounts::default();
        for player in &self.players {
            counts.add(player.position);
        }
        counts
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// Shorthand for building pool rows in tests.
    pub fn player(name: &str, position: Position, rank: u32, proj: f64, actual: f64) -> Player {
        Player {
            name: name.to_string(),
            team: "FA".to_string(),
            position,
            rank,
            projected_points: proj,
            actual_points: actual,
        }
    }
}
