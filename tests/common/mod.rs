#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use assert_cmd::Command;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use pocketbook::config::{Config, ConfigManager};
use pocketbook::ledger::{sample_data, LedgerStore, ManualClock};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated `POCKETBOOK_HOME`, optionally pre-populated with `config`.
pub fn temp_home(config: Option<&Config>) -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    if let Some(config) = config {
        ConfigManager::with_base_dir(base.clone())
            .save(config)
            .expect("write config");
    }
    base
}

/// The shell binary in script mode with uncoloured output.
pub fn script_command(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook_cli").expect("binary built");
    cmd.env("POCKETBOOK_CLI_SCRIPT", "1")
        .env("POCKETBOOK_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Thursday 2026-02-05 12:00 UTC, shortly after the sample history.
pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap()
}

/// Sample ledger driven by a manual clock pinned to [`sample_now`].
pub fn seeded_store() -> (LedgerStore, ManualClock) {
    let clock = ManualClock::new(sample_now());
    let mut store = LedgerStore::with_clock(clock.clone());
    sample_data::seed(&mut store).expect("seed sample data");
    (store, clock)
}
