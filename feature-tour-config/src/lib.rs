//! Feature Tour Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary between the harness
//! library and its command line front-end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Demonstration case group.
///
/// Every case belongs to exactly one group; groups also select the
/// log target a case writes its diagnostics to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Basics,
    Values,
    Entities,
    Contracts,
    Optionals,
    Errors,
    Closures,
    Collections,
    ControlFlow,
    Functions,
}

impl Group {
    /// All groups in catalog order
    pub const ALL: [Group; 10] = [
        Group::Basics,
        Group::Values,
        Group::Entities,
        Group::Contracts,
        Group::Optionals,
        Group::Errors,
        Group::Closures,
        Group::Collections,
        Group::ControlFlow,
        Group::Functions,
    ];

    /// Get the string name of the group
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Basics => "basics",
            Group::Values => "values",
            Group::Entities => "entities",
            Group::Contracts => "contracts",
            Group::Optionals => "optionals",
            Group::Errors => "errors",
            Group::Closures => "closures",
            Group::Collections => "collections",
            Group::ControlFlow => "control_flow",
            Group::Functions => "functions",
        }
    }

    /// Get the log target name for this group
    pub fn target(&self) -> String {
        format!("tour::{}", self.as_str())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Group::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| format!("unknown group '{s}'"))
    }
}

/// Log level, decoupled from any particular logging backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map a `-v` repetition count onto a level, starting from `Warn`
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "silent" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// How the runner renders its results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain output lines, one per line
    #[default]
    Text,
    /// Case reports as a JSON array
    Json,
}

/// Options for a single harness run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Case ids to run (empty means all)
    pub cases: Vec<String>,
    /// Groups to run (empty means all)
    pub groups: Vec<Group>,
    /// Print a header line before each case
    pub show_headers: bool,
    /// Output format
    pub format: OutputFormat,
    /// Compare output against expected fixtures where a case has one
    pub verify_fixtures: bool,
}

impl RunOptions {
    /// Whether a case passes the id and group filters
    pub fn selects(&self, id: &str, group: Group) -> bool {
        let id_ok = self.cases.is_empty() || self.cases.iter().any(|c| c == id);
        let group_ok = self.groups.is_empty() || self.groups.contains(&group);
        id_ok && group_ok
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cases: Vec::new(),
            groups: Vec::new(),
            show_headers: false,
            format: OutputFormat::Text,
            verify_fixtures: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_as_str() {
        assert_eq!(Group::Values.as_str(), "values");
        assert_eq!(Group::ControlFlow.target(), "tour::control_flow");
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!("control-flow".parse::<Group>(), Ok(Group::ControlFlow));
        assert_eq!("Errors".parse::<Group>(), Ok(Group::Errors));
        assert_eq!("basics".parse::<Group>(), Ok(Group::Basics));
        assert_eq!(Group::ALL[0], Group::Basics);
        assert!("nope".parse::<Group>().is_err());
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(LogLevel::from_verbosity(0), LogLevel::Warn);
        assert_eq!(LogLevel::from_verbosity(2), LogLevel::Debug);
        assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
        assert_eq!("silent".parse::<LogLevel>(), Ok(LogLevel::Off));
    }

    #[test]
    fn test_default_run_options() {
        let opts = RunOptions::default();
        assert!(opts.verify_fixtures);
        assert!(!opts.show_headers);
        assert_eq!(opts.format, OutputFormat::Text);
        assert!(opts.selects("anything", Group::Functions));
    }

    #[test]
    fn test_run_options_filters() {
        let opts = RunOptions {
            groups: vec![Group::Closures],
            ..Default::default()
        };
        assert!(opts.selects("lucky_numbers", Group::Closures));
        assert!(!opts.selects("bank_account", Group::Values));

        let opts = RunOptions {
            cases: vec!["bank_account".to_string()],
            ..Default::default()
        };
        assert!(opts.selects("bank_account", Group::Values));
        assert!(!opts.selects("computed_fields", Group::Values));
    }

    #[test]
    fn test_group_serializes_snake_case() {
        let json = serde_json::to_string(&Group::ControlFlow).unwrap();
        assert_eq!(json, "\"control_flow\"");
    }
}
