//! The draft orchestrator.
//!
//! Drives turns from pick 1 to the final pick: on our turns it produces a
//! recommendation and then applies the validated selection reported by the
//! pick source; on opponent turns it applies the reported selection directly.
//! Invalid names re-prompt the source; a bad entry never aborts the draft.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use draft_core::{DraftError, DraftRules, DraftState, PlayerId, PlayerPool};
use mcts::Mcts;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};
use valuation::ValuationPolicy;

use crate::input::{PickSource, TurnPrompt};

/// Which engine produces recommendations on our turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommenderKind {
    /// Full-pool greedy scan of the valuation policy.
    Greedy,
    /// Tree search, with the valuation policy as fallback.
    Mcts,
}

impl FromStr for RecommenderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(RecommenderKind::Greedy),
            "mcts" => Ok(RecommenderKind::Mcts),
            other => Err(anyhow::anyhow!(
                "unknown recommender '{other}', expected 'mcts' or 'greedy'"
            )),
        }
    }
}

/// One live draft from the first pick to the last.
pub struct DraftSession<S: PickSource> {
    state: DraftState,
    our_seat: usize,
    our_picks: HashSet<u32>,
    kind: RecommenderKind,
    policy: ValuationPolicy,
    mcts: Mcts,
    rng: ChaCha20Rng,
    source: S,
}

impl<S: PickSource> DraftSession<S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: Arc<PlayerPool>,
        rules: DraftRules,
        our_seat: usize,
        kind: RecommenderKind,
        policy: ValuationPolicy,
        mcts: Mcts,
        rng: ChaCha20Rng,
        source: S,
    ) -> Self {
        let our_picks = rules.picks_for_seat(our_seat).into_iter().collect();
        Self {
            state: DraftState::new(pool, &rules),
            our_seat,
            our_picks,
            kind,
            policy,
            mcts,
            rng,
            source,
        }
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// The source, for inspecting scripted runs after the fact.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the draft to completion.
    pub fn run(&mut self) -> Result<()> {
        let mut schedule: Vec<u32> = self.our_picks.iter().copied().collect();
        schedule.sort_unstable();
        info!(
            seat = self.our_seat + 1,
            picks = ?schedule,
            "draft session starting"
        );

        let mut last_round = 0;
        while self.state.current_drafter().is_some() {
            let pick_number = self.state.pick_index();
            let round = self.state.round_index();
            if round != last_round {
                info!(round, "starting round");
                last_round = round;
            }

            let our_turn = self.our_picks.contains(&pick_number);
            let recommendation = if our_turn { self.recommend()? } else { None };

            let picked = self.accept_pick(pick_number, round, our_turn, recommendation)?;
            info!(
                pick = pick_number,
                round,
                player = %self.state.pool().get(picked).name,
                ours = our_turn,
                "pick applied"
            );
        }

        let roster: Vec<String> = self
            .state
            .roster(self.our_seat)
            .iter()
            .map(|&id| self.state.pool().get(id).name.clone())
            .collect();
        info!(roster = ?roster, "draft complete");
        Ok(())
    }

    /// Prompt the source until a valid name arrives, then apply it.
    fn accept_pick(
        &mut self,
        pick_number: u32,
        round: u32,
        our_turn: bool,
        recommendation: Option<PlayerId>,
    ) -> Result<PlayerId> {
        loop {
            let prompt = TurnPrompt {
                pick_number,
                round,
                our_turn,
                recommendation: recommendation.map(|id| self.state.pool().get(id)),
            };
            let name = self.source.next_pick(&prompt)?;

            match self.validate(&name) {
                Ok(id) => {
                    self.state = self
                        .state
                        .make_move(id)
                        .context("validated pick was rejected by the state machine")?;
                    return Ok(id);
                }
                Err(error) => {
                    warn!(%error, "pick rejected, re-prompting");
                    self.source.rejected(&name, &error);
                }
            }
        }
    }

    /// Resolve a reported name against the pool and the available set.
    fn validate(&self, name: &str) -> Result<PlayerId, DraftError> {
        let id = self
            .state
            .pool()
            .id_by_name(name)
            .ok_or_else(|| DraftError::PlayerNotFound(name.to_string()))?;
        if !self.state.is_available(id) {
            return Err(DraftError::PlayerAlreadyDrafted(name.to_string()));
        }
        Ok(id)
    }

    /// Produce a recommendation for the current state.
    ///
    /// A degenerate search (no time, nothing expandable) falls back to the
    /// greedy valuation policy rather than leaving the turn unassisted.
    fn recommend(&mut self) -> Result<Option<PlayerId>> {
        match self.kind {
            RecommenderKind::Greedy => Ok(self.policy.best_player(&self.state, self.our_seat)),
            RecommenderKind::Mcts => match self.mcts.search(&self.state, &mut self.rng)? {
                Some(outcome) => Ok(Some(outcome.pick)),
                None => {
                    debug!("search produced no recommendation, falling back to valuation policy");
                    Ok(self.policy.best_player(&self.state, self.our_seat))
                }
            },
        }
    }
}
