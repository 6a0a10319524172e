use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn planner(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trip-planner").unwrap();
    cmd.env("TRIP_PLANNER_DATA_FILE", data_file)
        .env_remove("TRIP_PLANNER_CURRENCY")
        .env_remove("RUST_LOG");
    cmd
}

fn saved(data_file: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(data_file).unwrap()).unwrap()
}

#[test]
fn fresh_trip_is_tracked_and_saved() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");

    planner(&data_file)
        .write_stdin("1\n3\n200\n1\n2\n300\n3\n1000\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No existing data file found"))
        .stdout(predicate::str::contains("TOTAL SPENT EXPENSES: ₹    500.00"))
        .stdout(predicate::str::contains(
            "Amount Remaining:   ₹    500.00 (Under Budget)",
        ))
        .stdout(predicate::str::contains("Thank you for using the planner!"));

    let data = saved(&data_file);
    assert_eq!(data["budget"], serde_json::json!(1000.0));
    assert_eq!(data["expenses"]["Food & Dining"], serde_json::json!(200.0));
    assert_eq!(data["expenses"]["Transportation"], serde_json::json!(300.0));
    assert_eq!(data["expenses"].as_object().unwrap().len(), 5);
}

#[test]
fn state_carries_over_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");

    planner(&data_file)
        .write_stdin("4\n1\nSouvenirs\n1\n6\n12.5\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category 'Souvenirs' added successfully."));

    planner(&data_file)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 6 expense categories."))
        .stdout(predicate::str::contains("Souvenirs"))
        .stdout(predicate::str::contains("(100.0%)"));
}

#[test]
fn closed_stdin_exits_cleanly_and_saves() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");

    planner(&data_file)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input stream unavailable. Shutting down."));

    assert!(data_file.exists());
}

#[test]
fn stdin_closing_mid_expense_still_exits() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");

    planner(&data_file)
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."))
        .stdout(predicate::str::contains("Shutting down."));

    let data = saved(&data_file);
    assert_eq!(data["expenses"]["Transportation"], serde_json::json!(0.0));
}

#[test]
fn corrupt_data_file_is_replaced_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");
    fs::write(&data_file, "{\"expenses\": 12").unwrap();

    planner(&data_file)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not read or decode existing data file",
        ));

    let data = saved(&data_file);
    assert_eq!(data["budget"], serde_json::json!(0.0));
    assert!(data["expenses"].get("Accommodation").is_some());
}

#[test]
fn persisted_categories_are_not_merged_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");
    fs::write(
        &data_file,
        r#"{"expenses": {"Hostel": 600.0}, "budget": 500.0}"#,
    )
    .unwrap();

    planner(&data_file)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Amount OVER Budget: ₹    100.00 (Over Budget)",
        ));

    let data = saved(&data_file);
    let expenses = data["expenses"].as_object().unwrap();
    assert_eq!(expenses.len(), 1);
    assert!(expenses.contains_key("Hostel"));
}

#[test]
fn currency_symbol_comes_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("travel_expenses.json");

    planner(&data_file)
        .env("TRIP_PLANNER_CURRENCY", "€")
        .write_stdin("3\n250\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip budget set to €250.00."));
}
