//! Rollout simulation policy.
//!
//! A rollout plays the draft forward from an expanded node with cheap
//! randomized picks and scores the resulting rosters for the drafter who
//! initiated the search. Turns belonging to that drafter explore uniformly
//! over the whole candidate window; every other seat drafts like a competent
//! opponent, choosing uniformly among the few best-ranked players left.
//!
//! The deadline is re-checked on every simulated ply so one long rollout
//! cannot blow past the search budget; a time-cut rollout is scored at
//! whatever state it reached.

use std::time::Instant;

use draft_core::{lineup_reward, DraftError, DraftState};
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Randomized playout policy for one search.
#[derive(Debug, Clone, Copy)]
pub struct RolloutPolicy {
    /// Candidate window shared with node expansion.
    pub candidate_window: usize,
    /// Choice width on opponent turns.
    pub opponent_top_k: usize,
}

impl RolloutPolicy {
    pub fn new(candidate_window: usize, opponent_top_k: usize) -> Self {
        Self {
            candidate_window,
            opponent_top_k,
        }
    }

    /// Play out from `from` until terminal or deadline, then score
    /// `perspective`'s roster.
    pub fn simulate(
        &self,
        from: &DraftState,
        perspective: usize,
        deadline: Instant,
        rng: &mut ChaCha20Rng,
    ) -> Result<f64, DraftError> {
        let mut state = from.clone();

        while !state.is_terminal() && Instant::now() < deadline {
            let actions = state.legal_actions(self.candidate_window);
            if actions.is_empty() {
                break;
            }

            // Actions are rank-sorted, so the opponent model is a prefix.
            let pick = match state.current_drafter() {
                Some(drafter) if drafter == perspective => {
                    actions[rng.gen_range(0..actions.len())]
                }
                _ => {
                    let width = self.opponent_top_k.min(actions.len()).max(1);
                    actions[rng.gen_range(0..width)]
                }
            };

            state = state.make_move(pick)?;
        }

        Ok(lineup_reward(&state, perspective))
    }
}
