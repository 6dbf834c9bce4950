//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! MIBOLSILLO_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bolsillo(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mibolsillo").unwrap();
    cmd.env("MIBOLSILLO_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_both_movements() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args([
            "movement", "add", "expense", "2500.50", "Super chino", "-c", "Food",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added movement"))
        .stdout(predicate::str::contains("-$2500.50"));

    bolsillo(&dir)
        .args(["movement", "add", "income", "3000", "Sueldo", "-c", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+$3000.00"));

    bolsillo(&dir)
        .args(["movement", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Super chino"))
        .stdout(predicate::str::contains("Sueldo"))
        .stdout(predicate::str::contains("Showing 2 movement(s)"));
}

#[test]
fn newest_movement_lists_first() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "expense", "10", "older", "-c", "Other"])
        .assert()
        .success();
    bolsillo(&dir)
        .args(["movement", "add", "expense", "20", "newer", "-c", "Other"])
        .assert()
        .success();

    let output = bolsillo(&dir)
        .args(["movement", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let newer_pos = stdout.find("newer").unwrap();
    let older_pos = stdout.find("older").unwrap();
    assert!(newer_pos < older_pos);
}

#[test]
fn summary_reports_net_balance() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "income", "3000", "Sueldo", "-c", "Salary"])
        .assert()
        .success();
    bolsillo(&dir)
        .args([
            "movement", "add", "expense", "2500.50", "Super chino", "-c", "Food",
        ])
        .assert()
        .success();

    bolsillo(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"))
        .stdout(predicate::str::contains("$2500.50"))
        .stdout(predicate::str::contains("$499.50"));
}

#[test]
fn weekly_report_has_seven_rows() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "expense", "100", "bus", "-c", "Transport"])
        .assert()
        .success();

    let output = bolsillo(&dir).args(["report", "weekly"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let data_rows = stdout
        .lines()
        .filter(|l| l.contains('-') && l.contains('$'))
        .count();
    assert_eq!(data_rows, 7);
}

#[test]
fn list_filters_by_kind_and_text() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "income", "3000", "Sueldo", "-c", "Salary"])
        .assert()
        .success();
    bolsillo(&dir)
        .args([
            "movement", "add", "expense", "2500.50", "Super chino", "-c", "Food",
        ])
        .assert()
        .success();

    bolsillo(&dir)
        .args(["movement", "list", "--kind", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sueldo"))
        .stdout(predicate::str::contains("Super chino").not());

    bolsillo(&dir)
        .args(["movement", "list", "--text", "super"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Super chino"))
        .stdout(predicate::str::contains("Sueldo").not());
}

#[test]
fn rejects_empty_description_and_keeps_collection_unchanged() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "expense", "100", "   ", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required"));

    bolsillo(&dir)
        .args(["movement", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movements found"));
}

#[test]
fn rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "expense", "0", "nothing", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    bolsillo(&dir)
        .args(["movement", "add", "expense", "abc", "garbled", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn accepts_locale_style_amount() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args([
            "movement", "add", "expense", "2.500,50", "Super chino", "-c", "Food",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$2500.50"));
}

#[test]
fn clear_all_requires_force() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "expense", "100", "bus", "-c", "Transport"])
        .assert()
        .success();

    // Without --force nothing is deleted
    bolsillo(&dir)
        .args(["movement", "clear-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    bolsillo(&dir)
        .args(["movement", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bus"));

    bolsillo(&dir)
        .args(["movement", "clear-all", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 movement(s)"));

    bolsillo(&dir)
        .args(["movement", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movements found"));
}

#[test]
fn movements_survive_restart() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["movement", "add", "income", "3000", "Sueldo", "-c", "Salary"])
        .assert()
        .success();

    // A fresh process over the same directory sees the data
    bolsillo(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"));
}

#[test]
fn config_shows_paths_and_categories() {
    let dir = TempDir::new().unwrap();

    bolsillo(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("movements.json"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Salary"));
}
