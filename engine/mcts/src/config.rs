//! Search configuration parameters.

use std::time::Duration;

/// Configuration for a draft search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Wall-clock budget per search call. Authoritative: the outer loop and
    /// every rollout ply check it.
    pub time_limit: Duration,

    /// Secondary bound on iterations, mostly for tests and benchmarks where
    /// a deterministic amount of work matters more than latency.
    pub max_iterations: u32,

    /// UCB1 exploration constant. Higher values spread visits across
    /// siblings, lower values exploit the current best line.
    pub exploration_constant: f64,

    /// Legal actions per node: the top N available players by rank. Bounds
    /// the branching factor so the tree gets depth instead of width.
    pub candidate_window: usize,

    /// Opponent rollout turns choose uniformly among this many top-ranked
    /// players, modeling a competent but not omniscient opponent.
    pub opponent_top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(30),
            max_iterations: 100_000,
            exploration_constant: 1.414,
            candidate_window: 30,
            opponent_top_k: 5,
        }
    }
}

impl SearchConfig {
    /// Small budget for unit tests: bounded by iterations, not the clock.
    pub fn for_testing() -> Self {
        Self {
            time_limit: Duration::from_secs(5),
            max_iterations: 300,
            ..Self::default()
        }
    }

    /// Builder pattern: set the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Builder pattern: set the iteration cap.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: set the candidate window.
    pub fn with_candidate_window(mut self, window: usize) -> Self {
        self.candidate_window = window;
        self
    }

    /// Builder pattern: set the opponent rollout width.
    pub fn with_opponent_top_k(mut self, k: usize) -> Self {
        self.opponent_top_k = k;
        self
    }
}
