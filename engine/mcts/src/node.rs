//! Search tree node representation.
//!
//! Each node holds the draft snapshot reached by taking an action from its
//! parent, the visit statistics UCB1 selection runs on, and the actions not
//! yet realized as children. Nodes live in the tree's arena and refer to each
//! other by index; the parent link is navigation only, used by
//! backpropagation to walk toward the root.

use draft_core::{DraftState, PlayerId};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Parent node index (NONE for the root).
    pub parent: NodeId,

    /// Pick that produced this node from the parent (`None` for the root).
    pub action: Option<PlayerId>,

    /// Draft snapshot at this node.
    pub state: DraftState,

    /// Number of times backpropagation has passed through this node.
    pub visits: u32,

    /// Sum of rollout rewards backpropagated through this node.
    pub value_sum: f64,

    /// Legal actions not yet expanded into children.
    pub untried: Vec<PlayerId>,

    /// Children as `(action, node)` pairs, in expansion order.
    pub children: Vec<(PlayerId, NodeId)>,
}

impl SearchNode {
    /// Create a root node.
    pub fn new_root(state: DraftState, untried: Vec<PlayerId>) -> Self {
        Self {
            parent: NodeId::NONE,
            action: None,
            state,
            visits: 0,
            value_sum: 0.0,
            untried,
            children: Vec::new(),
        }
    }

    /// Create a child node.
    pub fn new_child(
        parent: NodeId,
        action: PlayerId,
        state: DraftState,
        untried: Vec<PlayerId>,
    ) -> Self {
        Self {
            parent,
            action: Some(action),
            state,
            visits: 0,
            value_sum: 0.0,
            untried,
            children: Vec::new(),
        }
    }

    /// Every legal action has been realized as a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Mean rollout reward, 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f64
        }
    }

    /// UCB1 score for selection by the parent.
    ///
    /// An unvisited child scores infinite, so every frontier child is tried
    /// once before any statistically informed comparison happens. Otherwise
    /// `value/visits + c * sqrt(ln(parent_visits) / visits)`.
    #[inline]
    pub fn ucb1(&self, parent_visits: u32, exploration_constant: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }

        let exploitation = self.value_sum / self.visits as f64;
        let exploration =
            exploration_constant * ((parent_visits as f64).ln() / self.visits as f64).sqrt();
        exploitation + exploration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_core::{DraftRules, DraftStyle, Player, PlayerPool, Position};
    use std::sync::Arc;

    fn any_state() -> DraftState {
        let pool = Arc::new(
            PlayerPool::new(vec![Player {
                name: "QB1".to_string(),
                team: "FA".to_string(),
                position: Position::QB,
                rank: 1,
                projected_points: 380.0,
                actual_points: 360.0,
            }])
            .unwrap(),
        );
        DraftState::new(pool, &DraftRules::new(1, 1, DraftStyle::Regular))
    }

    #[test]
    fn node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn unvisited_child_scores_infinite() {
        let node = SearchNode::new_root(any_state(), Vec::new());
        assert_eq!(node.ucb1(100, 1.414), f64::INFINITY);
    }

    #[test]
    fn ucb1_matches_fixture() {
        let mut node = SearchNode::new_root(any_state(), Vec::new());
        node.visits = 10;
        node.value_sum = 15.0;

        // Exploitation 15/10 = 1.5; exploration sqrt(ln(100)/10) ≈ 0.6786.
        let score = node.ucb1(100, 1.414);
        let exploration_term = (100f64.ln() / 10.0).sqrt();
        assert!((exploration_term - 0.6786).abs() < 1e-4);
        assert!((score - (1.5 + 1.414 * exploration_term)).abs() < 1e-9);
    }

    #[test]
    fn mean_value_handles_zero_visits() {
        let mut node = SearchNode::new_root(any_state(), Vec::new());
        assert_eq!(node.mean_value(), 0.0);

        node.visits = 4;
        node.value_sum = 10.0;
        assert!((node.mean_value() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn expansion_state_tracking() {
        let state = any_state();
        let untried = state.legal_actions(30);
        let mut node = SearchNode::new_root(state, untried);

        assert!(!node.is_fully_expanded());
        assert!(!node.is_terminal());

        node.untried.clear();
        assert!(node.is_fully_expanded());
    }
}
