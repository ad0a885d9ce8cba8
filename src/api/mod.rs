//! API layer - public entry points
//!
//! Options in, reports out. How reports are shown is the platform
//! layer's business.

use feature_tour_config::{Group, RunOptions};
use serde::Serialize;
use tracing::{info, instrument};

use crate::core::catalog;
use crate::core::config;
use crate::core::runner::{CaseReport, FeatureDemoRunner, RunSummary};

pub use crate::core::error::DemoError;

/// Catalog entry as shown by `--list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseInfo {
    pub id: &'static str,
    pub group: Group,
    pub summary: &'static str,
    /// Has an expected-output fixture
    pub checked: bool,
    /// Runs only when selected by id
    pub opt_in: bool,
}

/// Every case in run order
pub fn list_cases() -> Vec<CaseInfo> {
    catalog::cases()
        .map(|case| CaseInfo {
            id: case.id,
            group: case.group,
            summary: case.summary,
            checked: case.expected.is_some(),
            opt_in: case.opt_in,
        })
        .collect()
}

/// Run every default case in catalog order
///
/// # Errors
/// `DemoError::FixtureMismatch` if a case's output drifts from its fixture
pub fn run_all(on_report: impl FnMut(&CaseReport)) -> Result<RunSummary, DemoError> {
    run_selected(&RunOptions::default(), on_report)
}

/// Run the cases `options` selects, in catalog order
///
/// # Errors
/// See [`FeatureDemoRunner::run`]
#[instrument(target = "tour::runner", skip_all, fields(cases = options.cases.len(), groups = options.groups.len()))]
pub fn run_selected(
    options: &RunOptions,
    on_report: impl FnMut(&CaseReport),
) -> Result<RunSummary, DemoError> {
    let runner = FeatureDemoRunner::new(options.clone());
    let summary = runner.run(on_report)?;
    info!(target: "tour::runner", executed = summary.executed, "selection finished");
    Ok(summary)
}

/// Run with the options held by the global configuration
///
/// Falls back to the defaults when nothing has been initialised.
///
/// # Errors
/// See [`FeatureDemoRunner::run`]
pub fn run_configured(on_report: impl FnMut(&CaseReport)) -> Result<RunSummary, DemoError> {
    if config::is_initialized() {
        FeatureDemoRunner::from_config().run(on_report)
    } else {
        run_all(on_report)
    }
}

/// Run a single case by id, opt-in cases included
///
/// # Errors
/// `UnknownCase` for an id the catalog does not have; otherwise as
/// [`FeatureDemoRunner::run`]
pub fn run_case(id: &str) -> Result<CaseReport, DemoError> {
    let options = RunOptions {
        cases: vec![id.to_string()],
        ..Default::default()
    };
    let mut report = None;
    run_selected(&options, |r| report = Some(r.clone()))?;
    report.ok_or_else(|| DemoError::UnknownCase(id.to_string()))
}
