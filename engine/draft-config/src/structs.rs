//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from the defaults module
// ============================================================================

fn d_teams() -> usize {
    defaults::teams()
}
fn d_rounds() -> u32 {
    defaults::rounds()
}
fn d_style() -> String {
    defaults::style().into()
}
fn d_our_slot() -> usize {
    defaults::our_slot()
}
fn d_pool_path() -> String {
    defaults::pool_path().into()
}
fn d_recommender() -> String {
    defaults::recommender().into()
}
fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_time_limit_ms() -> u64 {
    defaults::time_limit_ms()
}
fn d_max_iterations() -> u32 {
    defaults::max_iterations()
}
fn d_exploration_constant() -> f64 {
    defaults::exploration_constant()
}
fn d_candidate_window() -> usize {
    defaults::candidate_window()
}
fn d_opponent_top_k() -> usize {
    defaults::opponent_top_k()
}
fn d_early_rounds() -> u32 {
    defaults::early_rounds()
}
fn d_mid_rounds() -> u32 {
    defaults::mid_rounds()
}
fn d_filled_penalty() -> f64 {
    defaults::filled_penalty()
}
fn d_need_floor() -> f64 {
    defaults::need_floor()
}
fn d_scarcity_floor() -> f64 {
    defaults::scarcity_floor()
}
fn d_quality_floor() -> f64 {
    defaults::quality_floor()
}
fn d_replacement_levels() -> PositionValues<u32> {
    defaults::replacement_levels()
}
fn d_slot_targets() -> PositionValues<u32> {
    defaults::slot_targets()
}
fn d_early() -> PositionValues<f64> {
    defaults::early_adjustments()
}
fn d_mid() -> PositionValues<f64> {
    defaults::mid_adjustments()
}
fn d_late() -> PositionValues<f64> {
    defaults::late_adjustments()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// One value per roster position, as a `{ qb = …, rb = …, … }` TOML table.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PositionValues<T> {
    pub qb: T,
    pub rb: T,
    pub wr: T,
    pub te: T,
    pub k: T,
    pub dst: T,
}

/// Root configuration structure matching draftkit.toml.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub league: LeagueConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub valuation: ValuationConfig,
}

/// Draft shape and player pool location.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LeagueConfig {
    #[serde(default = "d_teams")]
    pub teams: usize,
    #[serde(default = "d_rounds")]
    pub rounds: u32,
    /// "snake" or "regular".
    #[serde(default = "d_style")]
    pub style: String,
    /// Our seat, 1-based.
    #[serde(default = "d_our_slot")]
    pub our_slot: usize,
    #[serde(default = "d_pool_path")]
    pub pool_path: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            teams: defaults::teams(),
            rounds: defaults::rounds(),
            style: defaults::style().into(),
            our_slot: defaults::our_slot(),
            pool_path: defaults::pool_path().into(),
        }
    }
}

/// Assistant behavior.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssistantConfig {
    /// "mcts" or "greedy".
    #[serde(default = "d_recommender")]
    pub recommender: String,
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            recommender: defaults::recommender().into(),
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search budget and shape.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_time_limit_ms")]
    pub time_limit_ms: u64,
    #[serde(default = "d_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "d_exploration_constant")]
    pub exploration_constant: f64,
    #[serde(default = "d_candidate_window")]
    pub candidate_window: usize,
    #[serde(default = "d_opponent_top_k")]
    pub opponent_top_k: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: defaults::time_limit_ms(),
            max_iterations: defaults::max_iterations(),
            exploration_constant: defaults::exploration_constant(),
            candidate_window: defaults::candidate_window(),
            opponent_top_k: defaults::opponent_top_k(),
        }
    }
}

/// Valuation tables: replacement levels, roster targets, round-band
/// multipliers, and opportunity-cost constants.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ValuationConfig {
    #[serde(default = "d_early_rounds")]
    pub early_rounds: u32,
    #[serde(default = "d_mid_rounds")]
    pub mid_rounds: u32,
    #[serde(default = "d_filled_penalty")]
    pub filled_penalty: f64,
    #[serde(default = "d_need_floor")]
    pub need_floor: f64,
    #[serde(default = "d_scarcity_floor")]
    pub scarcity_floor: f64,
    #[serde(default = "d_quality_floor")]
    pub quality_floor: f64,
    #[serde(default = "d_replacement_levels")]
    pub replacement_levels: PositionValues<u32>,
    #[serde(default = "d_slot_targets")]
    pub slot_targets: PositionValues<u32>,
    #[serde(default = "d_early")]
    pub early: PositionValues<f64>,
    #[serde(default = "d_mid")]
    pub mid: PositionValues<f64>,
    #[serde(default = "d_late")]
    pub late: PositionValues<f64>,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            early_rounds: defaults::early_rounds(),
            mid_rounds: defaults::mid_rounds(),
            filled_penalty: defaults::filled_penalty(),
            need_floor: defaults::need_floor(),
            scarcity_floor: defaults::scarcity_floor(),
            quality_floor: defaults::quality_floor(),
            replacement_levels: defaults::replacement_levels(),
            slot_targets: defaults::slot_targets(),
            early: defaults::early_adjustments(),
            mid: defaults::mid_adjustments(),
            late: defaults::late_adjustments(),
        }
    }
}
