//! Corruption recovery tests.
//!
//! A malformed historical plan record must never block generating new
//! plans; the history scan skips it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("foodtrain"))
}

fn plan(data_dir: &std::path::Path, date: &str) -> assert_cmd::assert::Assert {
    cli()
        .arg("plan")
        .arg("--date")
        .arg(date)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
}

#[test]
fn test_corrupt_history_entry_does_not_block_generation() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path();

    plan(data_dir, "2026-01-05").success();

    // Mangle Monday's stored plan, then ask for Tuesday
    let monday_path = data_dir.join("store/app.dayplan.2026-01-05.json");
    fs::write(&monday_path, "{ truncated garbage").unwrap();

    plan(data_dir, "2026-01-06")
        .success()
        .stdout(predicate::str::contains("TRAINING DAY"));
}

#[test]
fn test_corrupt_index_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path();

    plan(data_dir, "2026-01-05").success();

    // A corrupt index is a store-boundary validation failure, not a crash
    let index_path = data_dir.join("store/app.index.dayplans.json");
    fs::write(&index_path, "not an array").unwrap();

    plan(data_dir, "2026-01-06").failure();
}
