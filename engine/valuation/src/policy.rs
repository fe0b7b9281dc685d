//! The efficiency scorer and greedy recommender.

use draft_core::{DraftState, Player, PlayerId, PlayerPool, Position};
use serde::Deserialize;
use tracing::debug;

use crate::baselines::ReplacementBaselines;

/// One value per position. Deserializes from a `{ qb = …, rb = …, … }` table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PositionTable<T> {
    pub qb: T,
    pub rb: T,
    pub wr: T,
    pub te: T,
    pub k: T,
    pub dst: T,
}

impl<T: Copy> PositionTable<T> {
    #[inline]
    pub fn get(&self, position: Position) -> T {
        match position {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
            Position::K => self.k,
            Position::DST => self.dst,
        }
    }
}

/// Tunable valuation tables.
///
/// The defaults are the shipped tuning: empirically chosen constants carried
/// as data, not logic. `early`/`mid`/`late` are VORP multipliers for rounds
/// `1..=early_rounds`, `..=mid_rounds`, and beyond.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationWeights {
    pub replacement_levels: PositionTable<u32>,
    pub slot_targets: PositionTable<u32>,
    pub early_rounds: u32,
    pub mid_rounds: u32,
    pub early: PositionTable<f64>,
    pub mid: PositionTable<f64>,
    pub late: PositionTable<f64>,
    /// Need factor once a position's slot target is already filled.
    pub filled_penalty: f64,
    pub need_floor: f64,
    pub scarcity_floor: f64,
    pub quality_floor: f64,
}

impl Default for ValuationWeights {
    fn default() -> Self {
        Self {
            replacement_levels: PositionTable {
                qb: 18,
                rb: 36,
                wr: 48,
                te: 18,
                k: 15,
                dst: 15,
            },
            slot_targets: PositionTable {
                qb: 2,
                rb: 4,
                wr: 4,
                te: 2,
                k: 1,
                dst: 1,
            },
            early_rounds: 6,
            mid_rounds: 12,
            early: PositionTable {
                qb: 0.7,
                rb: 1.2,
                wr: 1.1,
                te: 0.9,
                k: 0.1,
                dst: 0.1,
            },
            mid: PositionTable {
                qb: 1.3,
                rb: 1.0,
                wr: 1.0,
                te: 1.1,
                k: 0.3,
                dst: 0.3,
            },
            late: PositionTable {
                qb: 1.0,
                rb: 1.0,
                wr: 1.0,
                te: 1.0,
                k: 1.0,
                dst: 1.0,
            },
            filled_penalty: 20.0,
            need_floor: 0.5,
            scarcity_floor: 0.5,
            quality_floor: 0.2,
        }
    }
}

/// Greedy VORP/opportunity-cost recommender.
///
/// Construction computes replacement baselines from the full pool once; the
/// policy then scores any candidate against them for the recommender's
/// lifetime.
#[derive(Debug, Clone)]
pub struct ValuationPolicy {
    weights: ValuationWeights,
    baselines: ReplacementBaselines,
}

impl ValuationPolicy {
    pub fn new(pool: &PlayerPool) -> Self {
        Self::with_weights(pool, ValuationWeights::default())
    }

    pub fn with_weights(pool: &PlayerPool, weights: ValuationWeights) -> Self {
        let baselines = ReplacementBaselines::from_pool(pool, &weights.replacement_levels);
        Self { weights, baselines }
    }

    pub fn baselines(&self) -> &ReplacementBaselines {
        &self.baselines
    }

    /// Draft efficiency of one player: adjusted VORP over opportunity cost.
    ///
    /// `filled` is how many players the drafter already rosters at the
    /// candidate's position, `remaining` how many are still available there.
    pub fn efficiency(&self, player: &Player, filled: u32, remaining: usize, round: u32) -> f64 {
        let Some(baseline) = self.baselines.get(player.position) else {
            return 0.0;
        };

        let vorp = (player.projected_points - baseline.points).max(0.0);
        let adjusted = vorp * self.positional_adjustment(player.position, round);

        let target = self.weights.slot_targets.get(player.position);
        let need = if filled >= target {
            self.weights.filled_penalty
        } else {
            (1.0 / (target - filled) as f64).max(self.weights.need_floor)
        };

        let scarcity =
            (remaining as f64 / baseline.count.max(1) as f64).max(self.weights.scarcity_floor);

        let quality =
            (player.rank as f64 / baseline.rank.max(1) as f64).max(self.weights.quality_floor);

        adjusted / (need * scarcity * quality)
    }

    /// Round-band VORP multiplier.
    pub fn positional_adjustment(&self, position: Position, round: u32) -> f64 {
        if round <= self.weights.early_rounds {
            self.weights.early.get(position)
        } else if round <= self.weights.mid_rounds {
            self.weights.mid.get(position)
        } else {
            self.weights.late.get(position)
        }
    }

    /// Efficiency of one available player in a live draft state.
    pub fn score(&self, state: &DraftState, drafter: usize, id: PlayerId) -> f64 {
        let player = state.pool().get(id);
        let filled = state.roster_position_counts(drafter).get(player.position);
        let remaining = state.available_at(player.position);
        self.efficiency(player, filled, remaining, state.round_index())
    }

    /// Scan the full available pool and return the most efficient pick.
    ///
    /// Deterministic: ties resolve to the first candidate in ascending-rank
    /// order. Returns `None` only when nothing is available.
    pub fn best_player(&self, state: &DraftState, drafter: usize) -> Option<PlayerId> {
        let round = state.round_index();
        let filled = state.roster_position_counts(drafter);
        let remaining = state.available_position_counts();

        let mut best: Option<PlayerId> = None;
        let mut best_efficiency = f64::NEG_INFINITY;
        for &id in state.available() {
            let player = state.pool().get(id);
            let efficiency = self.efficiency(
                player,
                filled.get(player.position),
                remaining.get(player.position) as usize,
                round,
            );
            if efficiency > best_efficiency {
                best = Some(id);
                best_efficiency = efficiency;
            }
        }

        if let Some(id) = best {
            debug!(
                pick = %state.pool().get(id).name,
                efficiency = best_efficiency,
                round,
                "greedy recommendation"
            );
        }
        best
    }
}
