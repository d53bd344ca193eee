//! End-to-end tests for the backup-rotate binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// 2025-11-27 was a Thursday
const THURSDAY: &str = "2025-11-27";

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new(files: serde_json::Value, days_to_delete: usize) -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("source")).unwrap();
        fs::create_dir_all(temp.path().join("share")).unwrap();

        // Nothing listens on port 1, so every email fails fast
        let config = serde_json::json!({
            "source_directory": temp.path().join("source"),
            "file_server_directory": temp.path().join("share"),
            "files": files,
            "log_directory": temp.path().join("logs"),
            "email_settings": {
                "sender": "backup@example.com",
                "recipient": "ops@example.com",
                "smtp_server": "localhost",
                "smtp_port": 1,
                "timeout_secs": 2
            },
            "days_to_delete": days_to_delete
        });
        fs::write(
            temp.path().join("config.json"),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();

        Self { temp }
    }

    fn full_week(days_to_delete: usize) -> Self {
        Self::new(
            serde_json::json!({
                "Sunday": "sunday.bak",
                "Monday": "monday.bak",
                "Tuesday": "tuesday.bak",
                "Wednesday": "wednesday.bak",
                "Thursday": "thursday.bak",
                "Friday": "friday.bak",
                "Saturday": "saturday.bak"
            }),
            days_to_delete,
        )
    }

    fn config(&self) -> PathBuf {
        self.temp.path().join("config.json")
    }

    fn source(&self, name: &str) -> PathBuf {
        self.temp.path().join("source").join(name)
    }

    fn share(&self, name: &str) -> PathBuf {
        self.temp.path().join("share").join(name)
    }

    fn log_file(&self) -> PathBuf {
        self.temp
            .path()
            .join("logs")
            .join("2025")
            .join("November")
            .join("2025-11-27.log")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("backup-rotate").unwrap();
        cmd.env_remove("BACKUP_ROTATE_CONFIG")
            .arg("--config")
            .arg(self.config());
        cmd
    }
}

fn read_log(path: &Path) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn successful_run_exits_zero_even_when_email_fails() {
    let ws = Workspace::full_week(2);
    for name in ["thursday.bak", "friday.bak", "saturday.bak", "sunday.bak"] {
        fs::write(ws.source(name), name).unwrap();
    }

    ws.cmd()
        .args(["run", "--date", THURSDAY])
        .assert()
        .success();

    assert!(ws.share("thursday.zip").exists());
    assert!(!ws.source("thursday.zip").exists());
    assert!(!ws.source("friday.bak").exists());
    assert!(!ws.source("saturday.bak").exists());
    assert!(ws.source("sunday.bak").exists());

    let entries = read_log(&ws.log_file());
    assert_eq!(entries.first().unwrap()["step"], "start");
    assert_eq!(entries.last().unwrap()["step"], "finish");
    assert!(entries
        .iter()
        .any(|e| e["step"] == "notify" && e["level"] == "error"));
}

#[test]
fn unmapped_day_exits_one() {
    let ws = Workspace::new(serde_json::json!({ "Monday": "monday.bak" }), 1);

    ws.cmd()
        .args(["run", "--date", THURSDAY])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No file configured for Thursday"));

    let entries = read_log(&ws.log_file());
    assert!(entries
        .iter()
        .any(|e| e["step"] == "resolve" && e["level"] == "error"));
}

#[test]
fn missing_source_file_exits_one() {
    let ws = Workspace::full_week(1);

    ws.cmd()
        .args(["run", "--date", THURSDAY])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("thursday.bak"))
        .stderr(predicate::str::contains(" - ERROR - File not found"))
        .stderr(predicate::str::contains("2025-11-27.log"));
}

#[test]
fn deletion_failure_exits_one() {
    let ws = Workspace::full_week(2);
    fs::write(ws.source("thursday.bak"), b"today").unwrap();
    fs::create_dir(ws.source("friday.bak")).unwrap();
    fs::write(ws.source("saturday.bak"), b"stale").unwrap();

    ws.cmd()
        .args(["run", "--date", THURSDAY])
        .assert()
        .code(1);

    assert!(ws.source("saturday.bak").exists());
    assert!(!ws.source("thursday.zip").exists());
}

#[test]
fn invalid_config_exits_one() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"source_directory": "/data"}"#).unwrap();

    Command::cargo_bin("backup-rotate")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_path_from_environment() {
    let ws = Workspace::full_week(1);

    Command::cargo_bin("backup-rotate")
        .unwrap()
        .env("BACKUP_ROTATE_CONFIG", ws.config())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("thursday.bak"))
        .stdout(predicate::str::contains("localhost:1"));
}

#[test]
fn config_shows_todays_recent_log_entries() {
    let ws = Workspace::full_week(1);

    // No source files exist, so today's run fails and leaves a log behind
    ws.cmd().arg("run").assert().code(1);

    ws.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent log entries:"))
        .stdout(predicate::str::contains(" - ERROR - Backup run failed for"));
}

#[test]
fn plan_changes_nothing() {
    let ws = Workspace::full_week(2);
    fs::write(ws.source("thursday.bak"), b"today").unwrap();
    fs::write(ws.source("friday.bak"), b"stale").unwrap();

    ws.cmd()
        .args(["plan", "--date", THURSDAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup plan for 2025-11-27 (Thursday)"))
        .stdout(predicate::str::contains("1 file(s) would be deleted."));

    assert!(ws.source("friday.bak").exists());
    assert!(!ws.share("thursday.zip").exists());
    assert!(!ws.log_file().exists());
}
