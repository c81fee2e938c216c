//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory (KITTYDEN_ENV=dev).

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "kittyden-cli", "--"])
        .args(args)
        .env("KITTYDEN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_coins_balance() {
    let (stdout, _, code) = run_cli(&["coins", "balance", "--user", "cli-test"]);
    assert_eq!(code, 0, "coins balance failed");
    assert!(stdout.trim().parse::<u64>().is_ok());
}

#[test]
fn test_coins_reward_then_spend() {
    let (_, _, code) = run_cli(&["coins", "reward", "10", "--user", "cli-test-spender"]);
    assert_eq!(code, 0, "coins reward failed");
    let (_, _, code) = run_cli(&["coins", "spend", "5", "--user", "cli-test-spender"]);
    assert_eq!(code, 0, "coins spend failed");
}

#[test]
fn test_coins_overspend_fails() {
    let (_, stderr, code) = run_cli(&["coins", "spend", "999999999", "--user", "cli-test-broke"]);
    assert_ne!(code, 0, "overspending should fail");
    assert!(stderr.contains("insufficient"));
}

#[test]
fn test_kitty_gallery() {
    let (stdout, _, code) = run_cli(&["kitty", "gallery", "--user", "cli-test"]);
    assert_eq!(code, 0, "kitty gallery failed");
    // Everyone owns the starter kitty
    assert!(stdout.contains("basic"));
}

#[test]
fn test_kitty_stats() {
    let (stdout, _, code) = run_cli(&["kitty", "stats", "basic", "--user", "cli-test"]);
    assert_eq!(code, 0, "kitty stats failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["rarity"], "Basic");
}

#[test]
fn test_nhie_questions() {
    let (stdout, _, code) = run_cli(&["nhie", "questions"]);
    assert_eq!(code, 0, "nhie questions failed");
    assert!(stdout.contains("Never have I ever"));
}

#[test]
fn test_nhie_play_scores() {
    let (stdout, _, code) = run_cli(&["nhie", "play", "y,n,y"]);
    assert_eq!(code, 0, "nhie play failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["score"], 2);
    assert_eq!(parsed["answered"], 3);
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("draw_cost"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "gacha.draw_cost"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.trim().parse::<u64>().is_ok());
}

#[test]
fn test_pet_status() {
    let (stdout, _, code) = run_cli(&["pet", "status", "--user", "cli-test"]);
    assert_eq!(code, 0, "pet status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["phase"].is_string());
}

#[test]
fn test_birthday_add_and_remove() {
    let (_, _, code) = run_cli(&["birthday", "add", "Cli Test Cat", "2001-02-03"]);
    assert_eq!(code, 0, "birthday add failed");
    let (stdout, _, code) = run_cli(&["birthday", "list"]);
    assert_eq!(code, 0, "birthday list failed");
    assert!(stdout.contains("Cli Test Cat"));
    let (_, _, code) = run_cli(&["birthday", "remove", "Cli Test Cat", "2001-02-03"]);
    assert_eq!(code, 0, "birthday remove failed");
}

#[test]
fn test_birthday_rejects_digit_names() {
    let (_, _, code) = run_cli(&["birthday", "add", "Agent 47", "2001-02-03"]);
    assert_ne!(code, 0, "names with digits should be rejected");
}
