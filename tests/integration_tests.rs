//! Integration tests - whole runs through the public API

mod common;

use common::{lines_of, position, run_ids};
use feature_tour::{list_cases, run_all, DemoError, Group, RunOptions, Verdict};

#[test]
fn test_default_run_completes_in_catalog_order() {
    let mut ids = Vec::new();
    let summary = run_all(|r| ids.push(r.id)).unwrap();

    let listed: Vec<_> = list_cases()
        .into_iter()
        .filter(|c| !c.opt_in)
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, listed);
    assert_eq!(summary.executed, ids.len());
    assert_eq!(summary.verified + summary.unchecked, summary.executed);
}

#[test]
fn test_default_run_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    run_all(|r| first.extend(r.lines.clone())).unwrap();
    run_all(|r| second.extend(r.lines.clone())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_fixture_verifies() {
    let mut verdicts = Vec::new();
    run_all(|r| verdicts.push((r.id, r.verdict.clone()))).unwrap();
    let checked: Vec<_> = list_cases().into_iter().filter(|c| c.checked && !c.opt_in).collect();

    for case in checked {
        let verdict = verdicts.iter().find(|(id, _)| *id == case.id).map(|(_, v)| v);
        assert_eq!(verdict, Some(&Verdict::Verified), "{}", case.id);
    }
}

#[test]
fn test_basics_come_first() {
    let cases = list_cases();
    assert_eq!(cases[0].group, Group::Basics);
    assert!(lines_of("bindings_and_strings").contains(&"starts with \"A day\": true".to_string()));
    assert!(lines_of("numbers").contains(&"1 + 2.0 = 3.0".to_string()));
}

#[test]
fn test_lucky_pipeline_output() {
    assert_eq!(
        lines_of("lucky_pipeline"),
        vec![
            "7 is a lucky number",
            "15 is a lucky number",
            "21 is a lucky number",
            "31 is a lucky number",
            "33 is a lucky number",
            "49 is a lucky number",
        ]
    );
}

#[test]
fn test_finaliser_pairs_per_instance() {
    let lines = lines_of("finaliser_loop");
    for id in 1..=3 {
        let alive = position(&lines, &format!("User {id}: I'm alive!")).unwrap();
        let dead = position(&lines, &format!("User {id}: I'm dead!")).unwrap();
        assert!(alive < dead);
        if id < 3 {
            let next = position(&lines, &format!("User {}: I'm alive!", id + 1)).unwrap();
            assert!(dead < next, "user {id} must be gone before user {} appears", id + 1);
        }
    }
    assert_eq!(lines.iter().filter(|l| l.ends_with("I'm dead!")).count(), 3);
}

#[test]
fn test_finaliser_waits_for_last_handle() {
    let lines = lines_of("last_reference");
    let closed = position(&lines, "scope closed, User 4 has 1 handle").unwrap();
    let dead = position(&lines, "User 4: I'm dead!").unwrap();
    assert!(closed < dead);
}

#[test]
fn test_specific_handlers_win() {
    let lines = lines_of("propagation_chain");
    assert_eq!(lines[0], "Please use a longer password.");
    assert_eq!(lines[1], "I have the same combination on my luggage!");
    assert_eq!(lines[2], "Password rating: Good");
    assert!(lines.iter().all(|l| !l.starts_with("There was an error")));
}

#[test]
fn test_shared_reference_observes_writes() {
    let lines = lines_of("shared_reference");
    assert_eq!(&lines[..2], ["Taylor", "Taylor"]);
    assert_eq!(lines[3], "Captain");
    assert_eq!(lines[4], "Anonymous");
}

#[test]
fn test_default_method_paths() {
    assert_eq!(
        lines_of("default_methods"),
        vec![
            "Car overrides the announcement: beep beep",
            "Bicycle uses the default announcement",
        ]
    );
}

#[test]
fn test_uncaught_failure_stops_the_run() {
    let (reports, result) = run_ids(&["lucky_pipeline", "unhandled_failure", "propagation_chain"]);
    let ids: Vec<_> = reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["propagation_chain", "unhandled_failure"]);
    assert_eq!(
        result,
        Err(DemoError::Uncaught {
            case: "unhandled_failure",
            category: "SquareRootError::OutOfBounds",
        })
    );
}

#[test]
fn test_unknown_case_runs_nothing() {
    let (reports, result) = run_ids(&["lucky_pipeline", "no_such_case"]);
    assert!(reports.is_empty());
    assert_eq!(result, Err(DemoError::UnknownCase("no_such_case".into())));
}

#[test]
#[should_panic(expected = "forced unwrap raised PasswordError::Short")]
fn test_forced_unwrap_violation_is_fatal() {
    let _ = run_ids(&["forced_unwrap_violation"]);
}

#[test]
fn test_group_selection() {
    let options = RunOptions {
        groups: vec![Group::Closures, Group::Values],
        ..Default::default()
    };
    let mut groups = Vec::new();
    feature_tour::run_selected(&options, |r| groups.push(r.group)).unwrap();
    assert!(groups.iter().all(|g| matches!(g, Group::Values | Group::Closures)));
    assert_eq!(groups.first(), Some(&Group::Values));
    assert_eq!(groups.last(), Some(&Group::Closures));
}
