//! Global configuration
//!
//! Provides a set-once, thread-safe configuration singleton holding the
//! log levels and run options chosen on the command line.
//!
//! # Example
//! ```
//! use feature_tour::core::config::{Config, LogConfig};
//! use feature_tour::LogLevel;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: LogLevel::Debug,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert_eq!(cfg.log.global, LogLevel::Debug);
//! ```

use std::collections::BTreeMap;

use feature_tour_config::{Group, LogLevel, RunOptions};
use once_cell::sync::OnceCell;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// Initialise the global configuration (call once before anything else)
///
/// # Panics
/// If the configuration has already been initialised
pub fn init(config: Config) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Global configuration reference
///
/// # Panics
/// If the configuration has not been initialised
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check whether the configuration has been initialised
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Global configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,
    /// Which cases to run and how to present them
    pub run: RunOptions,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level for every target
    pub global: LogLevel,
    /// Per-group overrides (absent means `global`)
    pub groups: BTreeMap<Group, LogLevel>,
    /// Level for the runner itself (absent means `global`)
    pub runner: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            groups: BTreeMap::new(),
            runner: None,
        }
    }
}

impl LogConfig {
    /// Effective log level for a group
    ///
    /// Returns the group-specific level if one is set, otherwise the
    /// global level.
    pub fn level_for(&self, group: Group) -> LogLevel {
        self.groups.get(&group).copied().unwrap_or(self.global)
    }

    /// Effective log level for the runner target
    pub fn runner_level(&self) -> LogLevel {
        self.runner.unwrap_or(self.global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.log.global, LogLevel::Warn);
        assert!(cfg.run.cases.is_empty());
        assert!(cfg.run.verify_fixtures);
    }

    #[test]
    fn test_log_level_for() {
        let mut cfg = LogConfig {
            global: LogLevel::Warn,
            ..Default::default()
        };
        cfg.groups.insert(Group::Errors, LogLevel::Trace);

        assert_eq!(cfg.level_for(Group::Errors), LogLevel::Trace);
        assert_eq!(cfg.level_for(Group::Values), LogLevel::Warn);
        assert_eq!(cfg.runner_level(), LogLevel::Warn);
    }
}
