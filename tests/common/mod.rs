//! Shared helpers for the integration tests

#![allow(dead_code)]

use feature_tour::{run_case, run_selected, CaseReport, DemoError, RunOptions};

/// Lines produced by a single case
///
/// # Panics
/// If the case is unknown or lets a failure escape
pub fn lines_of(id: &str) -> Vec<String> {
    run_case(id)
        .unwrap_or_else(|e| panic!("case {id} failed: {e}"))
        .lines
}

/// Reports of a run over exactly these cases
pub fn run_ids(ids: &[&str]) -> (Vec<CaseReport>, Result<(), DemoError>) {
    let options = RunOptions {
        cases: ids.iter().map(|id| id.to_string()).collect(),
        ..Default::default()
    };
    let mut reports = Vec::new();
    let result = run_selected(&options, |r| reports.push(r.clone())).map(|_| ());
    (reports, result)
}

/// Index of the first line equal to `needle`
pub fn position(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|l| l == needle)
}
