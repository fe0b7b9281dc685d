//! Core domain model for the Draftkit draft engine
//!
//! This crate provides the data the rest of the workspace is built on:
//! - `Player`/`Position`: immutable player records keyed by name
//! - `PlayerPool`: the deduplicated, rank-sorted pool shared by all states
//! - `DraftState`: an immutable snapshot of a draft in progress, with a pure
//!   transition function (`make_move`) to the next snapshot
//! - `lineup_reward`: optimal-lineup scoring used as the search reward
//!
//! Every draft turn is a new `DraftState` value; nothing here mutates in
//! place, which is what lets the search tree branch safely from any snapshot.

pub mod player;
pub mod pool;
pub mod reward;
pub mod state;

pub use player::{Player, Position, PositionCounts, PositionParseError, POSITIONS};
pub use pool::{PlayerId, PlayerPool, PoolError};
pub use reward::{lineup_reward, roster_reward, LineupSlots, BENCH_WEIGHT};
pub use state::{DraftRules, DraftState, DraftStyle, DraftStyleParseError};

use thiserror::Error;

/// Errors surfaced by draft state transitions and pick validation.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The requested player is not in the available set of the current state.
    #[error("player '{0}' is not available to draft")]
    InvalidAction(String),

    /// The name does not match any player in the pool.
    #[error("player '{0}' not found in the pool")]
    PlayerNotFound(String),

    /// The name matches a pool player who has already been drafted.
    #[error("player '{0}' has already been drafted")]
    PlayerAlreadyDrafted(String),

    /// Every pick has been made; no further transitions exist.
    #[error("the draft is over")]
    DraftOver,
}
