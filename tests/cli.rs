//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_workshop(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_workshop");
    Command::new(bin).args(args).output().expect("failed to run workshop binary")
}

fn play_with_input(args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_workshop");
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("WORKSHOP_RECORD")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn workshop binary");
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().expect("failed to wait for workshop binary")
}

#[test]
fn categories_lists_all_five() {
    let output = run_workshop(&["categories"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "Traditions (default)\nFood\nClothing\nMyths\nMusic\n");
}

#[test]
fn offline_round_issues_challenge_then_verdict() {
    let output = play_with_input(&["play", "--offline"], "\nB\n\n:quit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Christmas Challenge"));
    assert!(stdout.contains("What do Norwegians traditionally hide"));
    assert!(stdout.contains("Santa's Verdict"));
    assert!(stdout.contains("Ho ho ho!"));
    assert!(!stdout.contains("|||"));
}

#[test]
fn offline_play_honors_category_flag() {
    let output = play_with_input(&["play", "--offline", "--category", "music"], "\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Consulting the North Pole library for Music"));
    assert!(stdout.contains("Jingle Bells"));
}

#[test]
fn play_ends_cleanly_on_eof() {
    let output = play_with_input(&["play", "--offline"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Start Workshop"));
    assert!(stdout.contains("Merry Christmas!"));
}

#[test]
fn missing_cassette_exits_with_error() {
    let output = play_with_input(&["play", "--cassette", "/nonexistent/llm.cassette.yaml"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Error:"));
}

#[test]
fn unknown_category_is_rejected() {
    let output = run_workshop(&["play", "--category", "Elves"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unknown category 'Elves'"));
}

#[test]
fn invalid_subcommand_shows_error() {
    let output = run_workshop(&["bogus"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn help_lists_subcommands() {
    let output = run_workshop(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("play"));
    assert!(stdout.contains("categories"));
}
