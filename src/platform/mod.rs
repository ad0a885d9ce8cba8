//! Platform - console adapters
//!
//! All printing lives here: case output to stdout, diagnostics and
//! failures to stderr.

use std::io::{self, Write};

use feature_tour_config::RunOptions;

use crate::api::{CaseInfo, DemoError};
use crate::core::runner::{CaseReport, RunSummary};

/// Text rendering of one report
pub fn format_report(report: &CaseReport, show_headers: bool) -> String {
    let mut text = String::new();
    if show_headers {
        text.push_str(&format!("== {} ==\n", report.id));
    }
    for line in &report.lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Print one report's lines to stdout
pub fn print_report(report: &CaseReport, options: &RunOptions) {
    let mut stdout = io::stdout().lock();
    // A closed pipe (e.g. `| head`) is not worth a panic.
    let _ = stdout.write_all(format_report(report, options.show_headers).as_bytes());
    let _ = stdout.flush();
}

/// Reports, summary and stop reason as one JSON document
pub fn format_json(
    reports: &[CaseReport],
    summary: Option<&RunSummary>,
    error: Option<&DemoError>,
) -> String {
    let document = serde_json::json!({
        "reports": reports,
        "summary": summary,
        "error": error.map(|e| serde_json::json!({
            "kind": e.kind(),
            "message": e.to_string(),
        })),
    });
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
}

/// `--list` table: id, group, summary
pub fn format_case_list(cases: &[CaseInfo]) -> String {
    let width = cases.iter().map(|c| c.id.len()).max().unwrap_or(0);
    let group_width = cases
        .iter()
        .map(|c| c.group.as_str().len())
        .max()
        .unwrap_or(0);
    let mut text = String::new();
    for case in cases {
        let mut marks = String::new();
        if case.checked {
            marks.push_str(" [fixture]");
        }
        if case.opt_in {
            marks.push_str(" [opt-in]");
        }
        text.push_str(&format!(
            "{:<width$}  {:<group_width$}  {}{}\n",
            case.id,
            case.group.as_str(),
            case.summary,
            marks
        ));
    }
    text
}

/// Print a harness error to stderr
pub fn print_error(err: &DemoError) {
    eprintln!("{err}");
    if let DemoError::FixtureMismatch { case, .. } = err {
        eprintln!("hint: run `feature-tour --case {case} --headers` to see the full output");
    }
}
