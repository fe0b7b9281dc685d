//! The time-bounded search loop.
//!
//! `Mcts::search` runs select → expand → rollout → backpropagate iterations
//! against a fresh tree until the wall-clock budget (or the iteration cap)
//! runs out, then extracts the robust child. A search that never managed to
//! expand the root returns no recommendation rather than an error; callers
//! fall back to the greedy valuation policy.

use std::time::Instant;

use draft_core::{DraftError, DraftState, PlayerId};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::node::NodeId;
use crate::rollout::RolloutPolicy;
use crate::tree::SearchTree;

/// Errors from a search call.
///
/// The degenerate cases (no time, no legal actions) are not errors; they
/// surface as `Ok(None)`. This enum only carries genuine invariant breaches.
#[derive(Debug, Error)]
pub enum SearchError {
    /// An action drawn from a node's untried list was rejected by the state
    /// machine. Cannot happen while untried lists come from `legal_actions`.
    #[error("search applied an illegal action: {0}")]
    IllegalAction(#[from] DraftError),
}

/// What the search recommends, with enough statistics to log.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// The robust child's action.
    pub pick: PlayerId,
    /// Visits of the chosen child.
    pub visits: u32,
    /// Iterations completed before the budget ran out.
    pub iterations: u32,
    /// Mean rollout reward observed at the root.
    pub root_value: f64,
}

/// Monte Carlo Tree Search planner.
#[derive(Debug, Clone)]
pub struct Mcts {
    config: SearchConfig,
}

impl Mcts {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `root` and return the recommended pick.
    ///
    /// `Ok(None)` when the search is degenerate: terminal root, no legal
    /// actions, or a budget too small to expand anything.
    pub fn search(
        &self,
        root: &DraftState,
        rng: &mut ChaCha20Rng,
    ) -> Result<Option<SearchOutcome>, SearchError> {
        let (tree, iterations) = self.explore(root, rng)?;

        let Some((pick, visits)) = tree.best_action() else {
            debug!(iterations, "search produced no recommendation");
            return Ok(None);
        };

        let root_value = tree.get(tree.root()).mean_value();
        debug!(
            pick = %root.pool().get(pick).name,
            visits,
            iterations,
            nodes = tree.len(),
            root_value,
            "search recommendation"
        );
        Ok(Some(SearchOutcome {
            pick,
            visits,
            iterations,
            root_value,
        }))
    }

    /// Run the iteration loop and return the finished tree for inspection,
    /// along with the number of iterations completed.
    pub fn explore(
        &self,
        root: &DraftState,
        rng: &mut ChaCha20Rng,
    ) -> Result<(SearchTree, u32), SearchError> {
        let untried = root.legal_actions(self.config.candidate_window);
        let mut tree = SearchTree::new(root.clone(), untried);

        // The perspective is fixed for the whole search: rewards are always
        // the initiating drafter's, whoever is on the clock deeper in.
        let Some(perspective) = root.current_drafter() else {
            return Ok((tree, 0));
        };

        let rollout = RolloutPolicy::new(self.config.candidate_window, self.config.opponent_top_k);
        let deadline = Instant::now() + self.config.time_limit;

        let mut iterations = 0;
        while iterations < self.config.max_iterations && Instant::now() < deadline {
            let leaf = self.select_and_expand(&mut tree, rng)?;
            let reward = rollout.simulate(&tree.get(leaf).state, perspective, deadline, rng)?;
            tree.backpropagate(leaf, reward);

            iterations += 1;
            trace!(iteration = iterations, leaf = leaf.0, reward, "simulation complete");
        }

        Ok((tree, iterations))
    }

    /// Selection and expansion phases.
    ///
    /// Walks down fully-expanded nodes by UCB1, then realizes one untried
    /// action (chosen uniformly at random) as a new child. Terminal nodes and
    /// nodes whose frontier is exhausted are returned as-is.
    fn select_and_expand(
        &self,
        tree: &mut SearchTree,
        rng: &mut ChaCha20Rng,
    ) -> Result<NodeId, SearchError> {
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if node.is_terminal() || !node.is_fully_expanded() {
                break;
            }
            match tree.select_child(current, self.config.exploration_constant) {
                Some(child) => current = child,
                None => break,
            }
        }

        let node = tree.get(current);
        if node.is_terminal() || node.untried.is_empty() {
            return Ok(current);
        }

        let choice = rng.gen_range(0..node.untried.len());
        let action = tree.get_mut(current).untried.swap_remove(choice);

        let next = tree.get(current).state.make_move(action)?;
        let untried = next.legal_actions(self.config.candidate_window);
        Ok(tree.add_child(current, action, next, untried))
    }
}
