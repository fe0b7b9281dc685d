//! Monte Carlo Tree Search over draft states.
//!
//! The planner explores future draft continuations from an immutable
//! [`draft_core::DraftState`] snapshot. Each search call builds its own tree
//! and runs the classic four-phase loop until a wall-clock budget elapses:
//!
//! 1. **Selection**: descend fully-expanded nodes by UCB1
//! 2. **Expansion**: realize one untried action as a new child
//! 3. **Rollout**: play the draft out with a cheap randomized policy
//! 4. **Backpropagation**: add the rollout reward along the path to the root
//!
//! The recommended pick is the root child with the most visits (the robust
//! child), not the highest mean value: visit counts are less sensitive to an
//! unlucky rollout than averages are.
//!
//! All randomness flows through a caller-supplied `ChaCha20Rng`, so a seeded
//! search is fully reproducible.

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use rollout::RolloutPolicy;
pub use search::{Mcts, SearchError, SearchOutcome};
pub use tree::SearchTree;
