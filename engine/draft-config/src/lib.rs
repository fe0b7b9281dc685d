//! Centralized configuration loading from draftkit.toml.
//!
//! This crate provides the configuration structs and loading logic shared by
//! the Draftkit binaries.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`DRAFTKIT_<SECTION>_<KEY>`)
//! 2. draftkit.toml file
//! 3. Built-in defaults (embedded from config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! DRAFTKIT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     DRAFTKIT_LEAGUE_TEAMS=10
//!     DRAFTKIT_LEAGUE_STYLE=regular
//!     DRAFTKIT_MCTS_TIME_LIMIT_MS=5000
//!     DRAFTKIT_ASSISTANT_RECOMMENDER=greedy
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
