//! Tests for the configuration module.

use super::*;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.league.teams, 12);
    assert_eq!(config.league.rounds, 16);
    assert_eq!(config.league.style, "snake");
    assert_eq!(config.league.our_slot, 12);
    assert_eq!(config.league.pool_path, "./data/players.csv");
    assert_eq!(config.assistant.recommender, "mcts");
    assert_eq!(config.assistant.log_level, "info");
}

#[test]
fn test_mcts_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.mcts.time_limit_ms, 30_000);
    assert_eq!(config.mcts.max_iterations, 100_000);
    assert!((config.mcts.exploration_constant - 1.414).abs() < f64::EPSILON);
    assert_eq!(config.mcts.candidate_window, 30);
    assert_eq!(config.mcts.opponent_top_k, 5);
}

#[test]
fn test_valuation_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.valuation.early_rounds, 6);
    assert_eq!(config.valuation.mid_rounds, 12);
    assert!((config.valuation.filled_penalty - 20.0).abs() < f64::EPSILON);
    assert!((config.valuation.need_floor - 0.5).abs() < f64::EPSILON);
    assert!((config.valuation.quality_floor - 0.2).abs() < f64::EPSILON);

    assert_eq!(config.valuation.replacement_levels.qb, 18);
    assert_eq!(config.valuation.replacement_levels.wr, 48);
    assert_eq!(config.valuation.slot_targets.rb, 4);
    assert_eq!(config.valuation.slot_targets.k, 1);

    assert!((config.valuation.early.rb - 1.2).abs() < f64::EPSILON);
    assert!((config.valuation.early.dst - 0.1).abs() < f64::EPSILON);
    assert!((config.valuation.mid.te - 1.1).abs() < f64::EPSILON);
    assert!((config.valuation.late.qb - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_draftkit_env_overrides() {
    std::env::set_var("DRAFTKIT_LEAGUE_TEAMS", "10");
    std::env::set_var("DRAFTKIT_MCTS_TIME_LIMIT_MS", "5000");
    std::env::set_var("DRAFTKIT_VALUATION_FILLED_PENALTY", "15.5");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.league.teams, 10);
    assert_eq!(config.mcts.time_limit_ms, 5000);
    assert!((config.valuation.filled_penalty - 15.5).abs() < f64::EPSILON);

    std::env::remove_var("DRAFTKIT_LEAGUE_TEAMS");
    std::env::remove_var("DRAFTKIT_MCTS_TIME_LIMIT_MS");
    std::env::remove_var("DRAFTKIT_VALUATION_FILLED_PENALTY");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("DRAFTKIT_LEAGUE_ROUNDS", "plenty");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.league.rounds, 16);

    std::env::remove_var("DRAFTKIT_LEAGUE_ROUNDS");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[league]
teams = 8
style = "regular"
our_slot = 3

[mcts]
time_limit_ms = 1000
exploration_constant = 2.0

[valuation.slot_targets]
qb = 1
rb = 5
wr = 5
te = 1
k = 1
dst = 1
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.league.teams, 8);
    assert_eq!(config.league.style, "regular");
    assert_eq!(config.league.our_slot, 3);
    assert_eq!(config.mcts.time_limit_ms, 1000);
    assert!((config.mcts.exploration_constant - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.valuation.slot_targets.rb, 5);
    assert_eq!(config.valuation.slot_targets.qb, 1);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[league]
teams = 10
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.league.teams, 10);
    assert_eq!(config.league.rounds, 16); // Default
    assert_eq!(config.assistant.recommender, "mcts"); // Default
    assert_eq!(config.mcts.candidate_window, 30); // Default
}
