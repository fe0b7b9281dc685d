//! Assistant - live draft companion for Draftkit
//!
//! An interactive process that:
//! 1. Loads the player pool CSV
//! 2. Follows the draft pick by pick, ours and opponents'
//! 3. Recommends a selection on our turns (MCTS or greedy valuation)
//! 4. Validates every reported pick against the live board

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use tracing::info;

mod config;
mod input;
mod session;

use crate::config::Config;
use crate::input::{ScriptedSource, StdinSource};
use crate::session::DraftSession;
use draft_core::PlayerPool;
use mcts::Mcts;
use valuation::ValuationPolicy;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;

    let rules = config.rules()?;
    info!(
        teams = config.teams,
        rounds = config.rounds,
        style = %config.style,
        our_slot = config.our_slot,
        recommender = %config.recommender,
        "starting draft assistant"
    );

    let pool = Arc::new(
        PlayerPool::from_csv_path(&config.pool)
            .with_context(|| format!("failed to load player pool from {}", config.pool))?,
    );
    info!(players = pool.len(), pool = %config.pool, "player pool loaded");

    let policy = ValuationPolicy::with_weights(&pool, config.valuation_weights());
    let mcts = Mcts::new(config.search_config());
    let kind = config.recommender_kind()?;

    let rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let our_seat = config.our_slot - 1;
    match &config.script {
        Some(path) => {
            let source = ScriptedSource::from_path(path)?;
            DraftSession::new(pool, rules, our_seat, kind, policy, mcts, rng, source).run()
        }
        None => {
            let source = StdinSource::new();
            DraftSession::new(pool, rules, our_seat, kind, policy, mcts, rng, source).run()
        }
    }
}
