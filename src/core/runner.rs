//! FeatureDemoRunner
//!
//! Runs the selected cases in catalog order, one fresh transcript per
//! case, and checks each against its fixture. The runner does no IO:
//! every finished case is handed to a callback, which decides how and
//! where to show it.
//!
//! A run stops at the first case that either lets a failure escape or
//! disagrees with its fixture. Cases before it have already been handed
//! out, so their output is never lost.

use feature_tour_config::{Group, RunOptions};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::core::case::DemoCase;
use crate::core::catalog;
use crate::core::config;
use crate::core::error::DemoError;

/// Outcome of comparing a case's output with its fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Output matches the fixture line for line
    Verified,
    /// No fixture, or fixture checks disabled
    Unchecked,
    /// First differing line (1-based); `None` where one side ran out
    Mismatch {
        line: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
}

/// Everything one case produced
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub id: &'static str,
    pub group: Group,
    pub lines: Vec<String>,
    pub verdict: Verdict,
    /// Category of a failure that escaped the case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<&'static str>,
}

impl CaseReport {
    /// Error to stop the run with, if this case warrants one
    pub fn to_error(&self) -> Option<DemoError> {
        if let Some(category) = self.failure {
            return Some(DemoError::Uncaught {
                case: self.id,
                category,
            });
        }
        match &self.verdict {
            Verdict::Mismatch {
                line,
                expected,
                actual,
            } => Some(DemoError::FixtureMismatch {
                case: self.id,
                line: *line,
                expected: expected.clone(),
                actual: actual.clone(),
            }),
            _ => None,
        }
    }
}

/// Totals of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub executed: usize,
    pub verified: usize,
    pub unchecked: usize,
}

/// Compare produced lines with a fixture
pub fn verify(expected: &[&str], actual: &[String]) -> Verdict {
    let longest = expected.len().max(actual.len());
    for idx in 0..longest {
        let want = expected.get(idx).copied();
        let got = actual.get(idx).map(String::as_str);
        if want != got {
            return Verdict::Mismatch {
                line: idx + 1,
                expected: want.map(str::to_string),
                actual: got.map(str::to_string),
            };
        }
    }
    Verdict::Verified
}

/// Ordered executor of demonstration cases
#[derive(Debug, Clone, Default)]
pub struct FeatureDemoRunner {
    options: RunOptions,
}

impl FeatureDemoRunner {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Runner using the run options of the global configuration
    ///
    /// # Panics
    /// If the configuration has not been initialised
    pub fn from_config() -> Self {
        Self::new(config::config().run.clone())
    }

    /// Cases this runner will execute, in catalog order
    ///
    /// # Errors
    /// `DemoError::UnknownCase` for the first requested id the catalog
    /// does not know
    pub fn selection(&self) -> Result<Vec<&'static DemoCase>, DemoError> {
        if let Some(unknown) = self
            .options
            .cases
            .iter()
            .find(|id| catalog::find(id).is_none())
        {
            return Err(DemoError::UnknownCase(unknown.clone()));
        }

        Ok(catalog::cases()
            .filter(|case| {
                if case.opt_in {
                    self.options.cases.iter().any(|id| id == case.id)
                } else {
                    self.options.selects(case.id, case.group)
                }
            })
            .collect())
    }

    /// Run one case and judge its output
    pub fn run_case(&self, case: &DemoCase) -> CaseReport {
        let span = crate::group_span!(case.group, "case", id = case.id);
        let _guard = span.enter();

        let outcome = case.execute();
        let verdict = match case.expected {
            Some(expected) if self.options.verify_fixtures => verify(expected, &outcome.lines),
            _ => Verdict::Unchecked,
        };
        let failure = outcome.result.err().map(|f| f.category());

        debug!(
            target: "tour::runner",
            id = case.id,
            lines = outcome.lines.len(),
            ?verdict,
            "case finished"
        );
        if let Some(category) = failure {
            warn!(target: "tour::runner", id = case.id, category, "failure escaped case");
        }

        CaseReport {
            id: case.id,
            group: case.group,
            lines: outcome.lines,
            verdict,
            failure,
        }
    }

    /// Run every selected case, handing each report to `on_report`
    ///
    /// # Errors
    /// `UnknownCase` before anything runs; `Uncaught` or
    /// `FixtureMismatch` for the case that stopped the run, after its
    /// report has been handed out
    #[instrument(target = "tour::runner", skip_all)]
    pub fn run(&self, mut on_report: impl FnMut(&CaseReport)) -> Result<RunSummary, DemoError> {
        let selection = self.selection()?;
        info!(target: "tour::runner", cases = selection.len(), "starting run");

        let mut summary = RunSummary::default();
        for case in selection {
            let report = self.run_case(case);
            on_report(&report);

            summary.executed += 1;
            if let Some(err) = report.to_error() {
                return Err(err);
            }
            match report.verdict {
                Verdict::Verified => summary.verified += 1,
                _ => summary.unchecked += 1,
            }
        }

        info!(
            target: "tour::runner",
            executed = summary.executed,
            verified = summary.verified,
            "run completed"
        );
        Ok(summary)
    }

    /// Run and collect every report
    ///
    /// # Errors
    /// As [`run`](Self::run)
    pub fn collect(&self) -> Result<Vec<CaseReport>, DemoError> {
        let mut reports = Vec::new();
        self.run(|report| reports.push(report.clone()))?;
        Ok(reports)
    }
}
