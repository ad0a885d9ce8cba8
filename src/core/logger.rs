//! Logging initialisation
//!
//! Built on `tracing` and `tracing-subscriber`. Every case group logs to
//! its own target (`tour::values`, `tour::errors`, ...) and the runner to
//! `tour::runner`, so each can be filtered independently.
//!
//! Logs always go to stderr: stdout carries the demonstration output and
//! must stay byte-for-byte deterministic.
//!
//! # Example
//! ```ignore
//! use feature_tour::core::config::{init, Config};
//! use feature_tour::core::logger::init_logger;
//!
//! init(Config::default());
//! init_logger();
//! ```

use std::io;

use feature_tour_config::{Group, LogLevel};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::core::config::{self, LogConfig};

/// Log target of the runner
pub const RUNNER_TARGET: &str = "tour::runner";

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human friendly
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// JSON (tool integration)
    Json,
}

/// Initialise logging with the default format
///
/// Must be called after `config::init()`.
pub fn init_logger() {
    init_with_format(LogFormat::default());
}

/// Initialise logging with the given format
///
/// # Panics
/// If the global configuration has not been initialised
pub fn init_with_format(format: LogFormat) {
    if !config::is_initialized() {
        panic!("Config must be initialized before logger");
    }

    let targets = build_targets(&config::config().log);
    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets);

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

/// Build the per-target filter from a log configuration
pub fn build_targets(cfg: &LogConfig) -> Targets {
    let mut targets = Targets::new()
        .with_default(to_filter(cfg.global))
        .with_target(RUNNER_TARGET, to_filter(cfg.runner_level()));
    for group in Group::ALL {
        targets = targets.with_target(group.target(), to_filter(cfg.level_for(group)));
    }
    targets
}

/// Convert a configuration log level into a `tracing` filter
pub fn to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Create a formatter layer for the given format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

/// Simple test logger (debug level, captured by the test harness)
#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Create a span on a group's log target
#[macro_export]
macro_rules! group_span {
    ($group:expr, $name:expr) => {
        match $group {
            $crate::Group::Basics => tracing::span!(target: "tour::basics", tracing::Level::DEBUG, $name),
            $crate::Group::Values => tracing::span!(target: "tour::values", tracing::Level::DEBUG, $name),
            $crate::Group::Entities => tracing::span!(target: "tour::entities", tracing::Level::DEBUG, $name),
            $crate::Group::Contracts => tracing::span!(target: "tour::contracts", tracing::Level::DEBUG, $name),
            $crate::Group::Optionals => tracing::span!(target: "tour::optionals", tracing::Level::DEBUG, $name),
            $crate::Group::Errors => tracing::span!(target: "tour::errors", tracing::Level::DEBUG, $name),
            $crate::Group::Closures => tracing::span!(target: "tour::closures", tracing::Level::DEBUG, $name),
            $crate::Group::Collections => tracing::span!(target: "tour::collections", tracing::Level::DEBUG, $name),
            $crate::Group::ControlFlow => tracing::span!(target: "tour::control_flow", tracing::Level::DEBUG, $name),
            $crate::Group::Functions => tracing::span!(target: "tour::functions", tracing::Level::DEBUG, $name),
        }
    };
    ($group:expr, $name:expr, $($field:tt)*) => {
        match $group {
            $crate::Group::Basics => tracing::span!(target: "tour::basics", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Values => tracing::span!(target: "tour::values", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Entities => tracing::span!(target: "tour::entities", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Contracts => tracing::span!(target: "tour::contracts", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Optionals => tracing::span!(target: "tour::optionals", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Errors => tracing::span!(target: "tour::errors", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Closures => tracing::span!(target: "tour::closures", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Collections => tracing::span!(target: "tour::collections", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::ControlFlow => tracing::span!(target: "tour::control_flow", tracing::Level::DEBUG, $name, $($field)*),
            $crate::Group::Functions => tracing::span!(target: "tour::functions", tracing::Level::DEBUG, $name, $($field)*),
        }
    };
}
