//! Configuration for the assistant binary.
//!
//! Configuration is loaded from draftkit.toml with environment variable
//! overrides. CLI arguments take highest priority, followed by env vars,
//! then draftkit.toml, then the embedded defaults.

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use draft_config::{load_config, CentralConfig, PositionValues};
use draft_core::{DraftRules, DraftStyle};
use mcts::SearchConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;
use valuation::{PositionTable, ValuationWeights};

use crate::session::RecommenderKind;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_pool_path() -> String {
    CENTRAL_CONFIG.league.pool_path.clone()
}

fn default_teams() -> usize {
    CENTRAL_CONFIG.league.teams
}

fn default_rounds() -> u32 {
    CENTRAL_CONFIG.league.rounds
}

fn default_style() -> String {
    CENTRAL_CONFIG.league.style.clone()
}

fn default_our_slot() -> usize {
    CENTRAL_CONFIG.league.our_slot
}

fn default_recommender() -> String {
    CENTRAL_CONFIG.assistant.recommender.clone()
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.assistant.log_level.clone()
}

fn default_time_limit_ms() -> u64 {
    CENTRAL_CONFIG.mcts.time_limit_ms
}

fn default_exploration_constant() -> f64 {
    CENTRAL_CONFIG.mcts.exploration_constant
}

#[derive(Parser, Debug, Clone)]
#[command(name = "assistant")]
#[command(about = "Draftkit assistant - live draft recommendations")]
#[command(
    long_about = "Interactive draft assistant: loads a player pool, follows the
draft pick by pick, and recommends selections on your turns using either the
greedy valuation policy or Monte Carlo Tree Search.

Configuration is loaded from draftkit.toml with environment variable
overrides. CLI arguments take highest priority."
)]
pub struct Config {
    /// Path to the player pool CSV
    #[arg(long, default_value_t = default_pool_path())]
    pub pool: String,

    /// Number of drafting teams
    #[arg(long, default_value_t = default_teams())]
    pub teams: usize,

    /// Number of rounds
    #[arg(long, default_value_t = default_rounds())]
    pub rounds: u32,

    /// Draft style (snake or regular)
    #[arg(long, default_value_t = default_style())]
    pub style: String,

    /// Our draft slot, 1-based
    #[arg(long, default_value_t = default_our_slot())]
    pub our_slot: usize,

    /// Recommendation engine (mcts or greedy)
    #[arg(long, default_value_t = default_recommender())]
    pub recommender: String,

    /// Search budget per recommendation in milliseconds
    #[arg(long, default_value_t = default_time_limit_ms())]
    pub time_limit_ms: u64,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration_constant())]
    pub exploration_constant: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// RNG seed for reproducible searches (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Replay picks from a file (one name per line) instead of stdin
    #[arg(long)]
    pub script: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.teams < 2 {
            return Err(anyhow!("teams must be at least 2"));
        }

        if self.rounds == 0 {
            return Err(anyhow!("rounds must be greater than 0"));
        }

        if self.our_slot == 0 || self.our_slot > self.teams {
            return Err(anyhow!(
                "our_slot must be between 1 and {}, got {}",
                self.teams,
                self.our_slot
            ));
        }

        if self.style.parse::<DraftStyle>().is_err() {
            return Err(anyhow!(
                "invalid draft style '{}', expected 'snake' or 'regular'",
                self.style
            ));
        }

        self.recommender.parse::<RecommenderKind>()?;

        if self.time_limit_ms == 0 {
            return Err(anyhow!("time_limit_ms must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn rules(&self) -> Result<DraftRules> {
        let style = self.style.parse::<DraftStyle>()?;
        Ok(DraftRules::new(self.teams, self.rounds, style))
    }

    pub fn recommender_kind(&self) -> Result<RecommenderKind> {
        self.recommender.parse()
    }

    /// Runtime search configuration: central-config shape, CLI-tuned budget.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_time_limit(Duration::from_millis(self.time_limit_ms))
            .with_max_iterations(CENTRAL_CONFIG.mcts.max_iterations)
            .with_exploration_constant(self.exploration_constant)
            .with_candidate_window(CENTRAL_CONFIG.mcts.candidate_window)
            .with_opponent_top_k(CENTRAL_CONFIG.mcts.opponent_top_k)
    }

    /// Valuation tables from the central config.
    pub fn valuation_weights(&self) -> ValuationWeights {
        let v = &CENTRAL_CONFIG.valuation;
        ValuationWeights {
            replacement_levels: table(&v.replacement_levels),
            slot_targets: table(&v.slot_targets),
            early_rounds: v.early_rounds,
            mid_rounds: v.mid_rounds,
            early: table(&v.early),
            mid: table(&v.mid),
            late: table(&v.late),
            filled_penalty: v.filled_penalty,
            need_floor: v.need_floor,
            scarcity_floor: v.scarcity_floor,
            quality_floor: v.quality_floor,
        }
    }
}

fn table<T: Copy>(values: &PositionValues<T>) -> PositionTable<T> {
    PositionTable {
        qb: values.qb,
        rb: values.rb,
        wr: values.wr,
        te: values.te,
        k: values.k,
        dst: values.dst,
    }
}
