//! The immutable draft state machine.
//!
//! A `DraftState` is a value: applying a pick produces a fresh snapshot and
//! leaves the input untouched. The pool and the precomputed pick order are
//! shared between snapshots behind `Arc`, so cloning a state copies only the
//! available-id list and the rosters.

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::player::{Position, PositionCounts};
use crate::pool::{PlayerId, PlayerPool};
use crate::DraftError;

/// Whether the drafter sequence reverses on even rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStyle {
    /// Rounds 2, 4, … run the drafter ids in reverse.
    Snake,
    /// Every round runs the drafter ids in ascending order.
    Regular,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown draft style '{0}', expected 'snake' or 'regular'")]
pub struct DraftStyleParseError(pub String);

impl FromStr for DraftStyle {
    type Err = DraftStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snake" => Ok(DraftStyle::Snake),
            "regular" => Ok(DraftStyle::Regular),
            _ => Err(DraftStyleParseError(s.to_string())),
        }
    }
}

/// Static shape of a draft: seats, rounds, and ordering style.
#[derive(Debug, Clone, Copy)]
pub struct DraftRules {
    pub num_drafters: usize,
    pub rounds: u32,
    pub style: DraftStyle,
}

impl DraftRules {
    pub fn new(num_drafters: usize, rounds: u32, style: DraftStyle) -> Self {
        Self {
            num_drafters,
            rounds,
            style,
        }
    }

    pub fn total_picks(&self) -> u32 {
        self.rounds * self.num_drafters as u32
    }

    /// The full drafter sequence, one entry per pick.
    pub fn pick_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.total_picks() as usize);
        for round in 1..=self.rounds {
            if self.style == DraftStyle::Snake && round % 2 == 0 {
                order.extend((0..self.num_drafters).rev());
            } else {
                order.extend(0..self.num_drafters);
            }
        }
        order
    }

    /// The 1-based pick numbers belonging to `seat`, in draft order.
    pub fn picks_for_seat(&self, seat: usize) -> Vec<u32> {
        self.pick_order()
            .iter()
            .enumerate()
            .filter(|(_, &drafter)| drafter == seat)
            .map(|(idx, _)| idx as u32 + 1)
            .collect()
    }
}

/// An immutable snapshot of a draft in progress.
///
/// Invariant: `available` and the rosters partition the full pool; every
/// player id is in exactly one of them at every pick index. `available` stays
/// in ascending-rank order (inherited from the pool), so "top N by rank" is a
/// prefix.
#[derive(Debug, Clone)]
pub struct DraftState {
    pool: Arc<PlayerPool>,
    pick_order: Arc<Vec<usize>>,
    available: Vec<PlayerId>,
    rosters: Vec<Vec<PlayerId>>,
    /// 1-based; `total_picks + 1` once the draft is over.
    pick_index: u32,
}

impl DraftState {
    /// Initial snapshot: every pool player available, every roster empty.
    pub fn new(pool: Arc<PlayerPool>, rules: &DraftRules) -> Self {
        let available = pool.ids().collect();
        Self {
            pool,
            pick_order: Arc::new(rules.pick_order()),
            available,
            rosters: vec![Vec::new(); rules.num_drafters],
            pick_index: 1,
        }
    }

    #[inline]
    pub fn pool(&self) -> &PlayerPool {
        &self.pool
    }

    #[inline]
    pub fn shared_pool(&self) -> Arc<PlayerPool> {
        Arc::clone(&self.pool)
    }

    #[inline]
    pub fn num_drafters(&self) -> usize {
        self.rosters.len()
    }

    #[inline]
    pub fn pick_index(&self) -> u32 {
        self.pick_index
    }

    /// 1-based round of the current pick.
    #[inline]
    pub fn round_index(&self) -> u32 {
        (self.pick_index - 1) / self.num_drafters() as u32 + 1
    }

    /// The seat on the clock, or `None` once every pick has been made.
    pub fn current_drafter(&self) -> Option<usize> {
        self.pick_order
            .get(self.pick_index as usize - 1)
            .copied()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.pick_index as usize > self.pick_order.len()
    }

    /// Undrafted player ids in ascending-rank order.
    #[inline]
    pub fn available(&self) -> &[PlayerId] {
        &self.available
    }

    pub fn is_available(&self, id: PlayerId) -> bool {
        self.available.contains(&id)
    }

    /// Remaining availability per position.
    pub fn available_position_counts(&self) -> PositionCounts {
        let mut counts = PositionCounts::default();
        for &id in &self.available {
            counts.add(self.pool.get(id).position);
        }
        counts
    }

    /// Remaining availability at one position.
    pub fn available_at(&self, position: Position) -> usize {
        self.available
            .iter()
            .filter(|&&id| self.pool.get(id).position == position)
            .count()
    }

    #[inline]
    pub fn roster(&self, drafter: usize) -> &[PlayerId] {
        &self.rosters[drafter]
    }

    /// Position counts of one drafter's roster.
    pub fn roster_position_counts(&self, drafter: usize) -> PositionCounts {
        let mut counts = PositionCounts::default();
        for &id in &self.rosters[drafter] {
            counts.add(self.pool.get(id).position);
        }
        counts
    }

    /// Legal actions for search: the top `window` available players by rank.
    ///
    /// The window bounds the branching factor; the standalone greedy
    /// recommender scans `available()` directly instead.
    pub fn legal_actions(&self, window: usize) -> Vec<PlayerId> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.available
            .iter()
            .take(window)
            .copied()
            .collect()
    }

    /// Apply a pick, producing the next snapshot.
    ///
    /// Fails with [`DraftError::InvalidAction`] when the player is not
    /// available and [`DraftError::DraftOver`] on a terminal state; the input
    /// state is untouched either way.
    pub fn make_move(&self, pick: PlayerId) -> Result<DraftState, DraftError> {
        let drafter = self.current_drafter().ok_or(DraftError::DraftOver)?;

        let slot = self
            .available
            .iter()
            .position(|&id| id == pick)
            .ok_or_else(|| DraftError::InvalidAction(self.pool.get(pick).name.clone()))?;

        let mut available = self.available.clone();
        available.remove(slot);

        let mut rosters = self.rosters.clone();
        rosters[drafter].push(pick);

        Ok(DraftState {
            pool: Arc::clone(&self.pool),
            pick_order: Arc::clone(&self.pick_order),
            available,
            rosters,
            pick_index: self.pick_index + 1,
        })
    }
}
