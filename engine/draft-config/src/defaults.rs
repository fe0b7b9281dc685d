//! Default configuration values loaded from config.defaults.toml.
//!
//! The shared TOML file is embedded at compile time so every binary ships the
//! same defaults it was built against.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::structs::PositionValues;

/// The embedded defaults TOML file (loaded at compile time).
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use).
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    league: LeagueDefaults,
    assistant: AssistantDefaults,
    mcts: MctsDefaults,
    valuation: ValuationDefaults,
}

#[derive(Debug, Deserialize)]
struct LeagueDefaults {
    teams: usize,
    rounds: u32,
    style: String,
    our_slot: usize,
    pool_path: String,
}

#[derive(Debug, Deserialize)]
struct AssistantDefaults {
    recommender: String,
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    time_limit_ms: u64,
    max_iterations: u32,
    exploration_constant: f64,
    candidate_window: usize,
    opponent_top_k: usize,
}

#[derive(Debug, Deserialize)]
struct ValuationDefaults {
    early_rounds: u32,
    mid_rounds: u32,
    filled_penalty: f64,
    need_floor: f64,
    scarcity_floor: f64,
    quality_floor: f64,
    replacement_levels: PositionValues<u32>,
    slot_targets: PositionValues<u32>,
    early: PositionValues<f64>,
    mid: PositionValues<f64>,
    late: PositionValues<f64>,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// League
pub fn teams() -> usize {
    DEFAULTS.league.teams
}
pub fn rounds() -> u32 {
    DEFAULTS.league.rounds
}
pub fn style() -> &'static str {
    &DEFAULTS.league.style
}
pub fn our_slot() -> usize {
    DEFAULTS.league.our_slot
}
pub fn pool_path() -> &'static str {
    &DEFAULTS.league.pool_path
}

// Assistant
pub fn recommender() -> &'static str {
    &DEFAULTS.assistant.recommender
}
pub fn log_level() -> &'static str {
    &DEFAULTS.assistant.log_level
}

// Search
pub fn time_limit_ms() -> u64 {
    DEFAULTS.mcts.time_limit_ms
}
pub fn max_iterations() -> u32 {
    DEFAULTS.mcts.max_iterations
}
pub fn exploration_constant() -> f64 {
    DEFAULTS.mcts.exploration_constant
}
pub fn candidate_window() -> usize {
    DEFAULTS.mcts.candidate_window
}
pub fn opponent_top_k() -> usize {
    DEFAULTS.mcts.opponent_top_k
}

// Valuation
pub fn early_rounds() -> u32 {
    DEFAULTS.valuation.early_rounds
}
pub fn mid_rounds() -> u32 {
    DEFAULTS.valuation.mid_rounds
}
pub fn filled_penalty() -> f64 {
    DEFAULTS.valuation.filled_penalty
}
pub fn need_floor() -> f64 {
    DEFAULTS.valuation.need_floor
}
pub fn scarcity_floor() -> f64 {
    DEFAULTS.valuation.scarcity_floor
}
pub fn quality_floor() -> f64 {
    DEFAULTS.valuation.quality_floor
}
pub fn replacement_levels() -> PositionValues<u32> {
    DEFAULTS.valuation.replacement_levels
}
pub fn slot_targets() -> PositionValues<u32> {
    DEFAULTS.valuation.slot_targets
}
pub fn early_adjustments() -> PositionValues<f64> {
    DEFAULTS.valuation.early
}
pub fn mid_adjustments() -> PositionValues<f64> {
    DEFAULTS.valuation.mid
}
pub fn late_adjustments() -> PositionValues<f64> {
    DEFAULTS.valuation.late
}
