//! Optimal-lineup reward evaluation.
//!
//! The reward for a roster is the score of its best legal starting lineup
//! (using `actual_points`) plus a discounted bench contribution. Rollouts
//! evaluate this at whatever state they stop in, terminal or not.

use crate::player::Position;
use crate::pool::{PlayerId, PlayerPool};
use crate::state::DraftState;

/// Bench players contribute this fraction of their points.
pub const BENCH_WEIGHT: f64 = 0.3;

/// Starter slot counts for the standard lineup.
#[derive(Debug, Clone, Copy)]
pub struct LineupSlots {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    /// Best remaining RB/WR/TE not already counted in a dedicated slot.
    pub flex: usize,
    pub dst: usize,
    pub k: usize,
}

impl Default for LineupSlots {
    fn default() -> Self {
        Self {
            qb: 1,
            rb: 2,
            wr: 2,
            te: 1,
            flex: 1,
            dst: 1,
            k: 1,
        }
    }
}

/// Reward for one drafter's roster in the given state.
pub fn lineup_reward(state: &DraftState, drafter: usize) -> f64 {
    roster_reward(state.pool(), state.roster(drafter), LineupSlots::default())
}

/// Reward for an explicit roster with explicit slot counts.
///
/// Each slot greedily takes the highest unused `actual_points` among its
/// eligible players; a player fills at most one slot. Whatever is left is
/// bench, weighted by [`BENCH_WEIGHT`]. Empty position groups contribute
/// nothing.
pub fn roster_reward(pool: &PlayerPool, roster: &[PlayerId], slots: LineupSlots) -> f64 {
    let mut groups: [Vec<f64>; 6] = Default::default();
    for &id in roster {
        let player = pool.get(id);
        groups[player.position.index()].push(player.actual_points);
    }
    for group in &mut groups {
        group.sort_by(|a, b| b.total_cmp(a));
    }

    let mut starters = 0.0;
    starters += take_top(&mut groups[Position::QB.index()], slots.qb);
    starters += take_top(&mut groups[Position::RB.index()], slots.rb);
    starters += take_top(&mut groups[Position::WR.index()], slots.wr);
    starters += take_top(&mut groups[Position::TE.index()], slots.te);

    // FLEX draws from whatever RB/WR/TE the dedicated slots left behind.
    let mut flex_pool: Vec<f64> = groups[Position::RB.index()]
        .iter()
        .chain(groups[Position::WR.index()].iter())
        .chain(groups[Position::TE.index()].iter())
        .copied()
        .collect();
    flex_pool.sort_by(|a, b| b.total_cmp(a));
    starters += take_top(&mut flex_pool, slots.flex);

    starters += take_top(&mut groups[Position::DST.index()], slots.dst);
    starters += take_top(&mut groups[Position::K.index()], slots.k);

    let bench: f64 = flex_pool
        .iter()
        .chain(groups[Position::QB.index()].iter())
        .chain(groups[Position::DST.index()].iter())
        .chain(groups[Position::K.index()].iter())
        .sum();

    starters + bench * BENCH_WEIGHT
}

/// Remove and sum the first `count` entries of a descending-sorted group.
fn take_top(group: &mut Vec<f64>, count: usize) -> f64 {
    let take = count.min(group.len());
    group.drain(..take).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::test_fixtures::player;
    use crate::state::{DraftRules, DraftState, DraftStyle};
    use std::sync::Arc;

    fn pool_and_roster() -> (PlayerPool, Vec<PlayerId>) {
        let pool = PlayerPool::new(vec![
            player("QB1", Position::QB, 1, 0.0, 300.0),
            player("RB1", Position::RB, 2, 0.0, 250.0),
            player("RB2", Position::RB, 3, 0.0, 200.0),
            player("RB3", Position::RB, 4, 0.0, 150.0),
            player("WR1", Position::WR, 5, 0.0, 220.0),
            player("WR2", Position::WR, 6, 0.0, 180.0),
            player("TE1", Position::TE, 7, 0.0, 120.0),
            player("DST1", Position::DST, 8, 0.0, 90.0),
            player("K1", Position::K, 9, 0.0, 110.0),
        ])
        .unwrap();
        let roster = pool.ids().collect();
        (pool, roster)
    }

    #[test]
    fn nine_player_roster_matches_hand_computed_sum() {
        let (pool, roster) = pool_and_roster();

        // Starters: QB 300, RB 250+200, WR 220+180, TE 120, FLEX RB3 150,
        // DST 90, K 110 = 1620. Bench: empty. Total 1620.
        let reward = roster_reward(&pool, &roster, LineupSlots::default());
        assert!((reward - 1620.0).abs() < 1e-9);
    }

    #[test]
    fn surplus_players_ride_the_bench_at_a_discount() {
        let pool = PlayerPool::new(vec![
            player("QB1", Position::QB, 1, 0.0, 300.0),
            player("QB2", Position::QB, 2, 0.0, 280.0),
            player("RB1", Position::RB, 3, 0.0, 250.0),
            player("RB2", Position::RB, 4, 0.0, 200.0),
            player("RB3", Position::RB, 5, 0.0, 150.0),
            player("RB4", Position::RB, 6, 0.0, 100.0),
        ])
        .unwrap();
        let roster: Vec<PlayerId> = pool.ids().collect();

        // Starters: QB1 300, RB1+RB2 450, FLEX RB3 150 = 900.
        // Bench: QB2 280 + RB4 100 = 380 * 0.3 = 114.
        let reward = roster_reward(&pool, &roster, LineupSlots::default());
        assert!((reward - 1014.0).abs() < 1e-9);
    }

    #[test]
    fn flex_never_double_counts_a_starter() {
        let pool = PlayerPool::new(vec![
            player("WR1", Position::WR, 1, 0.0, 220.0),
            player("WR2", Position::WR, 2, 0.0, 180.0),
        ])
        .unwrap();
        let roster: Vec<PlayerId> = pool.ids().collect();

        // Both WRs fill the two WR slots; FLEX finds nothing left.
        let reward = roster_reward(&pool, &roster, LineupSlots::default());
        assert!((reward - 400.0).abs() < 1e-9);
    }

    #[test]
    fn empty_roster_scores_zero() {
        let (pool, _) = pool_and_roster();
        let reward = roster_reward(&pool, &[], LineupSlots::default());
        assert_eq!(reward, 0.0);
    }

    #[test]
    fn lineup_reward_reads_state_rosters() {
        let pool = Arc::new(
            PlayerPool::new(vec![
                player("QB1", Position::QB, 1, 0.0, 300.0),
                player("RB1", Position::RB, 2, 0.0, 250.0),
            ])
            .unwrap(),
        );
        let rules = DraftRules::new(2, 1, DraftStyle::Regular);
        let state = DraftState::new(pool, &rules);

        let qb = state.available()[0];
        let state = state.make_move(qb).unwrap();
        let rb = state.available()[0];
        let state = state.make_move(rb).unwrap();

        assert!((lineup_reward(&state, 0) - 300.0).abs() < 1e-9);
        assert!((lineup_reward(&state, 1) - 250.0).abs() < 1e-9);
    }
}
