//! Search tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by `NodeId` indices:
//! children are exclusively owned by the arena, parents hold non-owning index
//! back-references, and the whole tree is dropped at the end of the search
//! call that built it.

use draft_core::{DraftState, PlayerId};

use crate::node::{NodeId, SearchNode};

/// Arena-backed search tree.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl SearchTree {
    /// Create a tree with the given root state and its untried actions.
    pub fn new(root_state: DraftState, untried: Vec<PlayerId>) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_state, untried)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Total nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Select the child of `node_id` with the highest UCB1 score.
    ///
    /// Ties go to the earlier child in expansion order, which keeps the walk
    /// deterministic for a given tree shape.
    pub fn select_child(&self, node_id: NodeId, exploration_constant: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visits;

        let mut best: Option<NodeId> = None;
        let mut best_score = f64::NEG_INFINITY;
        for &(_, child_id) in &node.children {
            let score = self.get(child_id).ucb1(parent_visits, exploration_constant);
            if score > best_score {
                best = Some(child_id);
                best_score = score;
            }
        }
        best
    }

    /// Allocate a child of `parent_id` and link it.
    pub fn add_child(
        &mut self,
        parent_id: NodeId,
        action: PlayerId,
        state: DraftState,
        untried: Vec<PlayerId>,
    ) -> NodeId {
        let child = SearchNode::new_child(parent_id, action, state, untried);
        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(child);
        self.get_mut(parent_id).children.push((action, child_id));
        child_id
    }

    /// Add one visit and the rollout reward to every node from `leaf` up to
    /// the root. Rewards are absolute (the searching drafter's points), so no
    /// sign alternation happens on the way up.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) {
        let mut current = leaf;
        while current.is_some() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.value_sum += reward;
            current = node.parent;
        }
    }

    /// The robust child: the root action with the highest visit count.
    ///
    /// Ties resolve to the first child in expansion order. `None` when the
    /// root never expanded (zero budget or no legal actions).
    pub fn best_action(&self) -> Option<(PlayerId, u32)> {
        let root = self.get(self.root);

        let mut best: Option<(PlayerId, u32)> = None;
        for &(action, child_id) in &root.children {
            let visits = self.get(child_id).visits;
            if best.map_or(true, |(_, best_visits)| visits > best_visits) {
                best = Some((action, visits));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_core::{DraftRules, DraftStyle, Player, PlayerPool, Position};
    use std::sync::Arc;

    fn fixture_state() -> DraftState {
        let players = vec![
            Player {
                name: "QB1".to_string(),
                team: "FA".to_string(),
                position: Position::QB,
                rank: 1,
                projected_points: 380.0,
                actual_points: 360.0,
            },
            Player {
                name: "RB1".to_string(),
                team: "FA".to_string(),
                position: Position::RB,
                rank: 2,
                projected_points: 290.0,
                actual_points: 310.0,
            },
            Player {
                name: "WR1".to_string(),
                team: "FA".to_string(),
                position: Position::WR,
                rank: 3,
                projected_points: 280.0,
                actual_points: 295.0,
            },
        ];
        let pool = Arc::new(PlayerPool::new(players).unwrap());
        DraftState::new(pool, &DraftRules::new(1, 3, DraftStyle::Regular))
    }

    #[test]
    fn new_tree_holds_only_the_root() {
        let state = fixture_state();
        let untried = state.legal_actions(30);
        let tree = SearchTree::new(state, untried);

        assert_eq!(tree.len(), 1);
        let root = tree.get(tree.root());
        assert!(root.parent.is_none());
        assert_eq!(root.untried.len(), 3);
    }

    #[test]
    fn add_child_links_both_directions() {
        let state = fixture_state();
        let untried = state.legal_actions(30);
        let mut tree = SearchTree::new(state.clone(), untried);

        let action = state.available()[0];
        let next = state.make_move(action).unwrap();
        let child_untried = next.legal_actions(30);
        let child_id = tree.add_child(tree.root(), action, next, child_untried);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(tree.root()).children, [(action, child_id)]);
        assert_eq!(tree.get(child_id).parent, tree.root());
        assert_eq!(tree.get(child_id).action, Some(action));
    }

    #[test]
    fn backpropagate_accumulates_along_the_path() {
        let state = fixture_state();
        let untried = state.legal_actions(30);
        let mut tree = SearchTree::new(state.clone(), untried);

        let a1 = state.available()[0];
        let s1 = state.make_move(a1).unwrap();
        let child = tree.add_child(tree.root(), a1, s1.clone(), s1.legal_actions(30));

        let a2 = s1.available()[0];
        let s2 = s1.make_move(a2).unwrap();
        let grandchild = tree.add_child(child, a2, s2.clone(), s2.legal_actions(30));

        tree.backpropagate(grandchild, 100.0);
        tree.backpropagate(child, 50.0);

        assert_eq!(tree.get(grandchild).visits, 1);
        assert_eq!(tree.get(child).visits, 2);
        assert_eq!(tree.get(tree.root()).visits, 2);

        // Same-signed reward accumulates at every level.
        assert!((tree.get(grandchild).value_sum - 100.0).abs() < 1e-9);
        assert!((tree.get(child).value_sum - 150.0).abs() < 1e-9);
        assert!((tree.get(tree.root()).value_sum - 150.0).abs() < 1e-9);
    }

    #[test]
    fn select_child_prefers_unvisited_then_ucb() {
        let state = fixture_state();
        let untried = state.legal_actions(30);
        let mut tree = SearchTree::new(state.clone(), untried);

        let a1 = state.available()[0];
        let c1 = tree.add_child(tree.root(), a1, state.make_move(a1).unwrap(), Vec::new());
        let a2 = state.available()[1];
        let c2 = tree.add_child(tree.root(), a2, state.make_move(a2).unwrap(), Vec::new());

        // Give the first child stats; the second stays unvisited and must win.
        tree.backpropagate(c1, 10.0);
        assert_eq!(tree.select_child(tree.root(), 1.414), Some(c2));

        // Once both are visited, the better mean wins under equal visits.
        tree.backpropagate(c2, 1.0);
        assert_eq!(tree.select_child(tree.root(), 1.414), Some(c1));
    }

    #[test]
    fn best_action_is_most_visited_with_first_encounter_ties() {
        let state = fixture_state();
        let untried = state.legal_actions(30);
        let mut tree = SearchTree::new(state.clone(), untried);

        let a1 = state.available()[0];
        let c1 = tree.add_child(tree.root(), a1, state.make_move(a1).unwrap(), Vec::new());
        let a2 = state.available()[1];
        let c2 = tree.add_child(tree.root(), a2, state.make_move(a2).unwrap(), Vec::new());

        // Equal visits: the first-expanded child wins the tie.
        tree.backpropagate(c1, 5.0);
        tree.backpropagate(c2, 500.0);
        assert_eq!(tree.best_action(), Some((a1, 1)));

        // Strictly more visits beats a better mean value.
        tree.backpropagate(c2, 0.0);
        assert_eq!(tree.best_action(), Some((a2, 2)));
    }

    #[test]
    fn best_action_none_without_children() {
        let state = fixture_state();
        let untried = state.legal_actions(30);
        let tree = SearchTree::new(state, untried);
        assert_eq!(tree.best_action(), None);
    }
}
