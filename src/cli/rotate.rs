//! Rotation CLI commands
//!
//! `run` performs the rotation for a date, `plan` previews it, and
//! `config` shows the loaded settings.

use std::path::Path;

use chrono::NaiveDate;

use crate::backup::{RotationRunner, RunOutcome, RunPlan};
use crate::config::Settings;
use crate::display::{format_plan, format_settings};
use crate::logging::{DailyLogFile, Level, LogEntry};
use crate::notify::SmtpNotifier;

/// How many of today's log entries `config` shows
const RECENT_LOG_ENTRIES: usize = 5;

/// Run the rotation for `date` with the production log file and SMTP notifier
///
/// Progress goes to the daily log and the status email; only a failure is
/// echoed to stderr, together with the run's error entries.
pub fn handle_run_command(settings: &Settings, date: NaiveDate) -> RunOutcome {
    let log = DailyLogFile::new(&settings.log_directory, date);
    let notifier = SmtpNotifier::new(settings.email_settings.clone());

    let runner = RotationRunner::new(settings, &notifier, &log);
    let outcome = runner.run(date);

    if let Some(error) = outcome.error() {
        eprintln!("Backup run failed: {}", error);

        // The log file may hold earlier runs of the same day
        if let Ok(entries) = log.read_all() {
            entries
                .iter()
                .filter(|e| e.run_id == runner.run_id() && e.level == Level::Error)
                .for_each(|e| eprintln!("  {}", e.format_line()));
        }

        eprintln!("See {} for details.", log.path().display());
    }

    outcome
}

/// Print what a run on `date` would do
pub fn handle_plan_command(settings: &Settings, date: NaiveDate) {
    let plan = RunPlan::build(settings, date);
    print!("{}", format_plan(&plan));
}

/// Print the loaded configuration, today's log location, and its latest entries
pub fn handle_config_command(config_path: &Path, settings: &Settings, today: NaiveDate) {
    let log = DailyLogFile::new(&settings.log_directory, today);

    let recent: Vec<LogEntry> = if log.exists() {
        log.read_recent(RECENT_LOG_ENTRIES).unwrap_or_else(|e| {
            eprintln!("Warning: could not read {}: {}", log.path().display(), e);
            Vec::new()
        })
    } else {
        Vec::new()
    };

    print!("{}", format_settings(config_path, log.path(), settings, &recent));
}
