//! End-to-end tests for the spendlog binary
//!
//! Each test runs against its own temp data directory via the
//! SPENDLOG_DATA_DIR override.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_expense() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args([
            "add",
            "12.50",
            "--category",
            "food",
            "--description",
            "lunch",
            "--date",
            "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded: 2025-01-15 $12.50 food lunch"));

    spendlog(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-15"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("1 expense"));
}

#[test]
fn daily_summary_totals_matching_dates() {
    let data_dir = TempDir::new().unwrap();

    for (amount, desc, date) in [
        ("12.50", "lunch", "2025-01-15"),
        ("3.00", "coffee", "2025-01-15"),
        ("90.00", "train", "2025-01-14"),
    ] {
        spendlog(&data_dir)
            .args(["add", amount, "--description", desc, "--date", date])
            .assert()
            .success();
    }

    spendlog(&data_dir)
        .args(["summary", "day", "--date", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily summary (2025-01-15)"))
        .stdout(predicate::str::contains("$15.50"))
        .stdout(predicate::str::contains("(2 expenses)"));
}

#[test]
fn weekly_summary_runs_monday_to_anchor() {
    let data_dir = TempDir::new().unwrap();

    // 2025-01-15 is a Wednesday; its week starts Monday 2025-01-13
    for (amount, date) in [
        ("10.00", "2025-01-13"),
        ("20.00", "2025-01-15"),
        ("40.00", "2025-01-17"),
        ("80.00", "2025-01-12"),
    ] {
        spendlog(&data_dir)
            .args(["add", amount, "--date", date])
            .assert()
            .success();
    }

    spendlog(&data_dir)
        .args(["summary", "week", "--date", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly summary (2025-01-13..2025-01-15)"))
        .stdout(predicate::str::contains("$30.00"));
}

#[test]
fn monthly_summary_matches_month_and_year() {
    let data_dir = TempDir::new().unwrap();

    for (amount, date) in [
        ("10.00", "2025-01-05"),
        ("20.00", "2025-01-25"),
        ("40.00", "2025-02-01"),
        ("80.00", "2024-01-15"),
    ] {
        spendlog(&data_dir)
            .args(["add", amount, "--date", date])
            .assert()
            .success();
    }

    spendlog(&data_dir)
        .args(["summary", "month", "--date", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly summary (2025-01)"))
        .stdout(predicate::str::contains("$30.00"));
}

#[test]
fn invalid_amount_fails_with_validation_error() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["add", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    spendlog(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded"));
}

#[test]
fn malformed_ledger_lines_are_skipped() {
    let data_dir = TempDir::new().unwrap();

    fs::write(
        data_dir.path().join("expenses.csv"),
        "2025-01-15,12.50,food,lunch\n\
         garbage line without enough fields\n\
         2025-01-16,nope,food,dinner\n\
         2025-01-16,12.5\u{20ac},food,typo\n",
    )
    .unwrap();

    spendlog(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("1 expense"))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn description_with_commas_survives_round_trip() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args([
            "add",
            "8.75",
            "--category",
            "coffee",
            "--description",
            "flat white, extra shot",
            "--date",
            "2025-01-15",
        ])
        .assert()
        .success();

    spendlog(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("flat white, extra shot"));

    // One record, one line, despite the embedded comma
    let contents = fs::read_to_string(data_dir.path().join("expenses.csv")).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn menu_loop_reprompts_on_invalid_input() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .write_stdin(
            "5\n\
             1\n\
             abc\n\
             12.50\n\
             food\n\
             lunch\n\
             2025-01-15\n\
             3\n\
             4\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Invalid money format"))
        .stdout(predicate::str::contains("Category (food/travel/utilities/other)"))
        .stdout(predicate::str::contains("Recorded: 2025-01-15 $12.50 food lunch"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn menu_summary_flow() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .write_stdin(
            "2\n\
             someday\n\
             day\n\
             4\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter day, week, or month."))
        .stdout(predicate::str::contains("Daily summary"));
}

#[test]
fn config_shows_paths_and_count() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["add", "5.00", "--date", "2025-01-15"])
        .assert()
        .success();

    spendlog(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger file:"))
        .stdout(predicate::str::contains("Expenses:       1"));
}
