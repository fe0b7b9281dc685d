//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable
//! overrides.

use crate::CentralConfig;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Standard locations to search for draftkit.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "draftkit.toml",      // Current directory
    "../draftkit.toml",   // Parent directory (when running from a subdirectory)
    "/app/draftkit.toml", // Docker container
];

/// Load the central configuration from draftkit.toml.
///
/// Searches for draftkit.toml in the following order:
/// 1. Path specified by the DRAFTKIT_CONFIG environment variable
/// 2. Current directory (draftkit.toml)
/// 3. Parent directory (../draftkit.toml)
/// 4. Docker container path (/app/draftkit.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("DRAFTKIT_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from DRAFTKIT_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "DRAFTKIT_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    // Fall back to defaults
    debug!("No draftkit.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &PathBuf) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: DRAFTKIT_<SECTION>_<KEY>.
/// The nested valuation tables are file/defaults-only.
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // League
    env_override!(config, league.teams, "DRAFTKIT_LEAGUE_TEAMS", parse);
    env_override!(config, league.rounds, "DRAFTKIT_LEAGUE_ROUNDS", parse);
    env_override!(config, league.style, "DRAFTKIT_LEAGUE_STYLE");
    env_override!(config, league.our_slot, "DRAFTKIT_LEAGUE_OUR_SLOT", parse);
    env_override!(config, league.pool_path, "DRAFTKIT_LEAGUE_POOL_PATH");

    // Assistant
    env_override!(
        config,
        assistant.recommender,
        "DRAFTKIT_ASSISTANT_RECOMMENDER"
    );
    env_override!(config, assistant.log_level, "DRAFTKIT_ASSISTANT_LOG_LEVEL");

    // Search
    env_override!(config, mcts.time_limit_ms, "DRAFTKIT_MCTS_TIME_LIMIT_MS", parse);
    env_override!(
        config,
        mcts.max_iterations,
        "DRAFTKIT_MCTS_MAX_ITERATIONS",
        parse
    );
    env_override!(
        config,
        mcts.exploration_constant,
        "DRAFTKIT_MCTS_EXPLORATION_CONSTANT",
        parse
    );
    env_override!(
        config,
        mcts.candidate_window,
        "DRAFTKIT_MCTS_CANDIDATE_WINDOW",
        parse
    );
    env_override!(
        config,
        mcts.opponent_top_k,
        "DRAFTKIT_MCTS_OPPONENT_TOP_K",
        parse
    );

    // Valuation (scalar knobs only)
    env_override!(
        config,
        valuation.early_rounds,
        "DRAFTKIT_VALUATION_EARLY_ROUNDS",
        parse
    );
    env_override!(
        config,
        valuation.mid_rounds,
        "DRAFTKIT_VALUATION_MID_ROUNDS",
        parse
    );
    env_override!(
        config,
        valuation.filled_penalty,
        "DRAFTKIT_VALUATION_FILLED_PENALTY",
        parse
    );
    env_override!(
        config,
        valuation.need_floor,
        "DRAFTKIT_VALUATION_NEED_FLOOR",
        parse
    );
    env_override!(
        config,
        valuation.scarcity_floor,
        "DRAFTKIT_VALUATION_SCARCITY_FLOOR",
        parse
    );
    env_override!(
        config,
        valuation.quality_floor,
        "DRAFTKIT_VALUATION_QUALITY_FLOOR",
        parse
    );

    config
}
