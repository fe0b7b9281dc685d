//! Replacement-level baselines.
//!
//! For each position, the baseline is the player a pick at that position is
//! measured against: the Nth-ranked player, where N is the position's
//! replacement level. Computed once per recommender from the full pool.

use draft_core::{PlayerPool, Position, POSITIONS};

use crate::policy::PositionTable;

/// Baseline stats for one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionBaseline {
    /// Rank of the replacement-level player.
    pub rank: u32,
    /// Projected points of the replacement-level player.
    pub points: f64,
    /// Total players at the position in the full pool.
    pub count: usize,
}

/// Per-position baselines, present for every position the pool covers.
#[derive(Debug, Clone)]
pub struct ReplacementBaselines {
    per_position: [Option<PositionBaseline>; 6],
}

impl ReplacementBaselines {
    /// Compute baselines from the full pool.
    ///
    /// The replacement index clamps to the last player when a position has
    /// fewer players than its configured level; positions absent from the
    /// pool get no baseline.
    pub fn from_pool(pool: &PlayerPool, levels: &PositionTable<u32>) -> Self {
        let mut per_position = [None; 6];

        for position in POSITIONS {
            // Pool iteration is already ascending by rank.
            let players: Vec<_> = pool.at_position(position).collect();
            if players.is_empty() {
                continue;
            }

            let level = levels.get(position).max(1) as usize;
            let idx = level.min(players.len()) - 1;
            let (_, baseline) = players[idx];

            per_position[position.index()] = Some(PositionBaseline {
                rank: baseline.rank,
                points: baseline.projected_points,
                count: players.len(),
            });
        }

        Self { per_position }
    }

    pub fn get(&self, position: Position) -> Option<&PositionBaseline> {
        self.per_position[position.index()].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_core::Player;

    fn player(name: &str, position: Position, rank: u32, proj: f64) -> Player {
        Player {
            name: name.to_string(),
            team: "FA".to_string(),
            position,
            rank,
            projected_points: proj,
            actual_points: 0.0,
        }
    }

    fn levels() -> PositionTable<u32> {
        PositionTable {
            qb: 2,
            rb: 3,
            wr: 2,
            te: 2,
            k: 1,
            dst: 1,
        }
    }

    #[test]
    fn baseline_is_the_level_th_player() {
        let pool = PlayerPool::new(vec![
            player("QB1", Position::QB, 1, 380.0),
            player("QB2", Position::QB, 4, 340.0),
            player("QB3", Position::QB, 9, 300.0),
            player("RB1", Position::RB, 2, 290.0),
            player("RB2", Position::RB, 3, 270.0),
            player("RB3", Position::RB, 5, 240.0),
        ])
        .unwrap();

        let baselines = ReplacementBaselines::from_pool(&pool, &levels());

        let qb = baselines.get(Position::QB).unwrap();
        assert_eq!(qb.rank, 4);
        assert!((qb.points - 340.0).abs() < 1e-9);
        assert_eq!(qb.count, 3);

        let rb = baselines.get(Position::RB).unwrap();
        assert_eq!(rb.rank, 5);
        assert!((rb.points - 240.0).abs() < 1e-9);
    }

    #[test]
    fn baseline_index_clamps_to_last_player() {
        // Only one WR but the replacement level asks for the 2nd.
        let pool = PlayerPool::new(vec![
            player("WR1", Position::WR, 1, 280.0),
            player("QB1", Position::QB, 2, 380.0),
        ])
        .unwrap();

        let baselines = ReplacementBaselines::from_pool(&pool, &levels());

        let wr = baselines.get(Position::WR).unwrap();
        assert_eq!(wr.rank, 1);
        assert!((wr.points - 280.0).abs() < 1e-9);
        assert_eq!(wr.count, 1);
    }

    #[test]
    fn positions_missing_from_pool_have_no_baseline() {
        let pool = PlayerPool::new(vec![player("QB1", Position::QB, 1, 380.0)]).unwrap();
        let baselines = ReplacementBaselines::from_pool(&pool, &levels());

        assert!(baselines.get(Position::QB).is_some());
        assert!(baselines.get(Position::TE).is_none());
        assert!(baselines.get(Position::DST).is_none());
    }
}
