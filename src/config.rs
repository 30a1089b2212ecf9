use std::{path::PathBuf, str::FromStr};

use tracing::Level;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seed for maze generation, random when absent
    pub seed: Option<u64>,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// Most verbose level that reaches the log file
    pub log_level: Level,
    /// Whether to style the output with colors
    pub colored: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_dir: PathBuf::from("logs"),
            log_level: Level::INFO,
            colored: true,
        }
    }
}

impl Config {
    pub const SEED_VAR: &str = "MAZE_SEED";
    pub const LOG_DIR_VAR: &str = "MAZE_LOG_DIR";
    pub const LOG_LEVEL_VAR: &str = "MAZE_LOG_LEVEL";
    pub const NO_COLOR_VAR: &str = "NO_COLOR";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from a variable lookup. Unset or unparsable values keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            seed: lookup(Self::SEED_VAR).and_then(|value| value.trim().parse().ok()),
            log_dir: lookup(Self::LOG_DIR_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup(Self::LOG_LEVEL_VAR)
                .and_then(|value| Level::from_str(value.trim()).ok())
                .unwrap_or(defaults.log_level),
            // A non-empty value disables colors, see https://no-color.org
            colored: lookup(Self::NO_COLOR_VAR).is_none_or(|value| value.is_empty()),
        }
    }
}
