//! Feature Tour - ordered, verifiable language feature demonstrations
//!
//! Every demonstration case exercises one language concept and writes a
//! deterministic list of output lines. Cases run in a fixed order, and
//! those with an expected-output fixture are checked against it.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── api/       - Public API layer (options → reports)
//! ├── core/      - Cases, catalog and runner (no IO)
//! └── platform/  - Console rendering (stdout / stderr)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use feature_tour::run_all;
//!
//! let mut lines = Vec::new();
//! run_all(|report| lines.extend(report.lines.clone())).unwrap();
//! assert!(lines.contains(&"7 is a lucky number".to_string()));
//! ```

// Core layer (pure logic, no IO)
pub mod core;

// API layer (public entry points)
pub mod api;

// Platform layer (console output)
pub mod platform;

pub use api::{list_cases, run_all, run_case, run_configured, run_selected, CaseInfo, DemoError};
pub use crate::core::{
    config::config, config::init as init_config, logger::init_logger, logger::LogFormat,
    CaseReport, Config, DemoCase, FeatureDemoRunner, LogConfig, RunSummary, Transcript, Verdict,
};
pub use feature_tour_config::{Group, LogLevel, OutputFormat, RunOptions};

/// Initialise configuration only
///
/// Logging needs a separate `init_logger` call; the CLI does both.
pub fn init(config: Config) {
    crate::core::config::init(config);
}

/// Initialise configuration and logging
///
/// # Example
/// ```ignore
/// use feature_tour::{init_with_logger, Config, LogFormat};
///
/// init_with_logger(Config::default(), LogFormat::Pretty);
/// ```
pub fn init_with_logger(config: Config, format: LogFormat) {
    crate::core::config::init(config);
    crate::core::logger::init_with_format(format);
}
