//! CLI tests - the binary's stdout, stderr and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("feature-tour").unwrap()
}

#[test]
fn test_no_arguments_runs_everything() {
    cmd()
        .assert()
        .success()
        .stdout(contains(
            "7 is a lucky number\n15 is a lucky number\n21 is a lucky number\n31 is a lucky number\n33 is a lucky number\n49 is a lucky number\n",
        ))
        .stdout(contains("User 1: I'm alive!\nUser 1: I'm in control!\nUser 1: I'm dead!\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_stdout_is_identical_across_runs() {
    let first = cmd().output().unwrap();
    let second = cmd().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_logs_go_to_stderr() {
    let quiet = cmd().output().unwrap();
    let verbose = cmd().arg("-vv").output().unwrap();
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(!verbose.stderr.is_empty());
}

#[test]
fn test_single_case_with_header() {
    cmd()
        .args(["--case", "propagation_chain", "--headers"])
        .assert()
        .success()
        .stdout(
            "== propagation_chain ==\nPlease use a longer password.\nI have the same combination on my luggage!\nPassword rating: Good\n",
        );
}

#[test]
fn test_uncaught_failure_exits_non_zero() {
    cmd()
        .args(["--case", "unhandled_failure"])
        .assert()
        .code(1)
        .stdout(contains("asking for the square root of 0"))
        .stderr(contains("SquareRootError::OutOfBounds"));
}

#[test]
fn test_forced_unwrap_violation_aborts() {
    cmd()
        .args(["--case", "forced_unwrap_violation"])
        .assert()
        .failure()
        .stderr(contains("PasswordError::Short"));
}

#[test]
fn test_unknown_case() {
    cmd()
        .args(["--case", "nope"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("unknown case: nope"));
}

#[test]
fn test_list() {
    cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(contains("lucky_pipeline"))
        .stdout(contains("[opt-in]"));
}

#[test]
fn test_group_filter() {
    cmd()
        .args(["--group", "control-flow"])
        .assert()
        .success()
        .stdout(contains("FizzBuzz"))
        .stdout(contains("lucky number").not());
}

#[test]
fn test_basics_group() {
    cmd()
        .args(["--group", "basics", "--log-basics", "debug"])
        .assert()
        .success()
        .stdout(contains("0.1 + 0.2 = 0.30000000000000004"))
        .stdout(contains("starts with \"a day\": false"))
        .stdout(contains("FizzBuzz").not());
}

#[test]
fn test_json_output() {
    let output = cmd()
        .args(["--format", "json", "--case", "lucky_pipeline"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["reports"][0]["id"], "lucky_pipeline");
    assert_eq!(value["reports"][0]["lines"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["summary"]["verified"], 1);
}
