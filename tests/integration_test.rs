//! Integration tests for the authorizer CLI.
//!
//! These tests run the actual binary, feeding operations over stdin or a
//! file argument and verifying the emitted result lines.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Run the binary with the given stdin and return stdout
fn run_authorizer(input: &str) -> String {
    let mut cmd = Command::cargo_bin("card-authorizer").unwrap();
    let assert = cmd.write_stdin(input).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_account_open_and_transactions_over_stdin() {
    let input = r#"{"account": {"active-card": true, "available-limit": 100}}
{"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T10:00:00.000Z"}}
{"transaction": {"merchant": "Habbib's", "amount": 90, "time": "2019-02-13T11:00:00.000Z"}}
{"transaction": {"merchant": "McDonald's", "amount": 30, "time": "2019-02-13T12:00:00.000Z"}}"#;

    let output = run_authorizer(input);
    assert_eq!(
        output,
        "{\"account\":{\"active-card\":true,\"available-limit\":100},\"violations\":[]}\n\
         {\"account\":{\"active-card\":true,\"available-limit\":80},\"violations\":[]}\n\
         {\"account\":{\"active-card\":true,\"available-limit\":80},\"violations\":[\"insufficient-limit\"]}\n\
         {\"account\":{\"active-card\":true,\"available-limit\":50},\"violations\":[]}\n"
    );
}

#[test]
fn test_operations_from_file_argument() {
    let input = r#"{"account": {"active-card": true, "available-limit": 175}}
{"account": {"active-card": true, "available-limit": 350}}
"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", input).unwrap();

    let mut cmd = Command::cargo_bin("card-authorizer").unwrap();
    cmd.arg(file.path()).assert().success().stdout(
        "{\"account\":{\"active-card\":true,\"available-limit\":175},\"violations\":[]}\n\
         {\"account\":{\"active-card\":true,\"available-limit\":175},\"violations\":[\"account-already-initialized\"]}\n",
    );
}

#[test]
fn test_inactive_card_end_to_end() {
    let input = r#"{"account": {"active-card": false, "available-limit": 100}}
{"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T11:00:00.000Z"}}"#;

    let output = run_authorizer(input);
    assert!(output.contains(r#""violations":["card-not-active"]"#));
    assert!(output.contains(r#""available-limit":100"#));
}

#[test]
fn test_malformed_line_does_not_crash_the_process() {
    let input = r#"{"account": {"active-card": true, "available-limit": 100}}
{"broken
{"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T11:00:00.000Z"}}"#;

    let mut cmd = Command::cargo_bin("card-authorizer").unwrap();
    cmd.write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("decode error:"))
        .stdout(predicate::str::contains(
            r#"{"account":{"active-card":true,"available-limit":80},"violations":[]}"#,
        ));
}

#[test]
fn test_empty_input_exits_cleanly() {
    let mut cmd = Command::cargo_bin("card-authorizer").unwrap();
    cmd.write_stdin("").assert().success().stdout("");
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("card-authorizer").unwrap();
    cmd.arg("nonexistent.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_too_many_arguments_error() {
    let mut cmd = Command::cargo_bin("card-authorizer").unwrap();
    cmd.arg("a.jsonl")
        .arg("b.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many arguments"));
}

#[test]
fn test_output_lines_are_valid_json() {
    let input = r#"{"account": {"active-card": true, "available-limit": 100}}
{"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T10:00:00.000Z"}}"#;

    let output = run_authorizer(input);
    for line in output.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("account").is_some());
        assert!(value.get("violations").unwrap().is_array());
    }
}
