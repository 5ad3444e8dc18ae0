//! Basic CLI E2E tests.
//!
//! Tests invoke the compiled binary and verify outputs. Every test runs
//! against its own temporary data directory via HABITHIVE_DATA_DIR so
//! state never leaks between tests or into a real user profile.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against `data_dir` and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habithive"))
        .env("HABITHIVE_DATA_DIR", data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command and expect success.
fn run_cli_success(data_dir: &Path, args: &[&str]) -> (String, String) {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    (stdout, stderr)
}

fn create_habit(data_dir: &Path, name: &str) -> String {
    let (stdout, _) = run_cli_success(data_dir, &["habit", "create", name]);
    let habit: serde_json::Value = serde_json::from_str(&stdout).expect("create output is JSON");
    habit["id"].as_str().expect("created habit has id").to_string()
}

#[test]
fn create_notifies_and_lists() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr) = run_cli_success(dir.path(), &["habit", "create", "Read a book"]);
    assert!(stderr.contains("Habit created!"));

    let habit: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habit["name"], "Read a book");
    assert_eq!(habit["frequency"], "daily");
    assert_eq!(habit["completed_dates"].as_array().unwrap().len(), 0);

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "list"]);
    let habits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habits.as_array().unwrap().len(), 1);
}

#[test]
fn create_with_blank_name_fails_without_record() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["habit", "create", "   "]);
    assert_ne!(code, 0);
    assert!(!stderr.contains("Habit created!"));

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "list"]);
    let habits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habits.as_array().unwrap().len(), 0);
}

#[test]
fn toggle_is_its_own_inverse() {
    let dir = TempDir::new().unwrap();
    let id = create_habit(dir.path(), "Stretch");

    let (stdout, stderr) = run_cli_success(dir.path(), &["habit", "toggle", &id]);
    // no notification for toggles
    assert!(!stderr.contains("Habit"));
    let habit: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habit["completed_dates"].as_array().unwrap().len(), 1);

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "toggle", &id]);
    let habit: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habit["completed_dates"].as_array().unwrap().len(), 0);
}

#[test]
fn streak_and_status_follow_toggle() {
    let dir = TempDir::new().unwrap();
    let id = create_habit(dir.path(), "Meditate");

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "streak", &id]);
    assert_eq!(stdout.trim(), "0");
    let (stdout, _) = run_cli_success(dir.path(), &["habit", "status", &id]);
    assert_eq!(stdout.trim(), "pending");

    run_cli_success(dir.path(), &["habit", "toggle", &id]);

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "streak", &id]);
    assert_eq!(stdout.trim(), "1");
    let (stdout, _) = run_cli_success(dir.path(), &["habit", "status", &id]);
    assert_eq!(stdout.trim(), "complete");
}

#[test]
fn update_changes_fields() {
    let dir = TempDir::new().unwrap();
    let id = create_habit(dir.path(), "Walk");

    let (stdout, stderr) = run_cli_success(
        dir.path(),
        &[
            "habit", "update", &id, "--name", "Evening walk", "--frequency", "weekly",
        ],
    );
    assert!(stderr.contains("Habit updated!"));
    let habit: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habit["name"], "Evening walk");
    assert_eq!(habit["frequency"], "weekly");
}

#[test]
fn delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let id = create_habit(dir.path(), "Journal");

    let (_, stderr) = run_cli_success(dir.path(), &["habit", "delete", &id]);
    assert!(stderr.contains("Habit deleted!"));

    // second delete: still exits 0, nothing left to notify about
    let (_, stderr) = run_cli_success(dir.path(), &["habit", "delete", &id]);
    assert!(!stderr.contains("Habit deleted!"));
}

#[test]
fn list_filters_by_frequency() {
    let dir = TempDir::new().unwrap();
    create_habit(dir.path(), "Daily one");
    run_cli_success(
        dir.path(),
        &["habit", "create", "Weekly one", "--frequency", "weekly"],
    );

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "list", "--frequency", "weekly"]);
    let habits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let habits = habits.as_array().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["name"], "Weekly one");
}

#[test]
fn stats_summary_reports_totals() {
    let dir = TempDir::new().unwrap();
    let id = create_habit(dir.path(), "Run");
    create_habit(dir.path(), "Read");
    run_cli_success(dir.path(), &["habit", "toggle", &id]);

    let (stdout, _) = run_cli_success(dir.path(), &["stats", "summary"]);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["total_habits"], 2);
    assert_eq!(summary["total_completions"], 1);
    assert_eq!(summary["completed_today"], 1);
    assert_eq!(summary["highest_streak"], 1);

    let (stdout, _) = run_cli_success(dir.path(), &["stats", "completions"]);
    assert_eq!(stdout.trim(), "1");
}

#[test]
fn config_set_changes_default_frequency() {
    let dir = TempDir::new().unwrap();

    let (stdout, _) = run_cli_success(dir.path(), &["config", "get", "tracking.default_frequency"]);
    assert_eq!(stdout.trim(), "daily");

    run_cli_success(
        dir.path(),
        &["config", "set", "tracking.default_frequency", "weekly"],
    );

    let (stdout, _) = run_cli_success(dir.path(), &["habit", "create", "Plan the week"]);
    let habit: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(habit["frequency"], "weekly");
}

#[test]
fn disabled_notifications_stay_silent() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["config", "set", "notifications.enabled", "false"]);

    let (_, stderr) = run_cli_success(dir.path(), &["habit", "create", "Quiet habit"]);
    assert!(!stderr.contains("Habit created!"));
}
