//! Backup rotation runner
//!
//! Drives one run end to end: resolve the day's file, compress it, copy the
//! archive to the file server, delete the files scheduled inside the
//! retention window, remove the temporary archive, and report the result.
//!
//! Every step returns a `Result`. The first failure is logged and notified
//! where it happens and then short-circuits the remaining steps. Cleanup of
//! the temporary archive runs on every path once the archive location is
//! known.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use super::archive::{archive_name_for, compress_file, transfer_archive};
use super::rotation::{delete_candidates, retention_candidates};
use crate::config::Settings;
use crate::error::{ProcessingStage, RotationError, RotationResult};
use crate::logging::{Level, LogEntry, RunLog, Step};
use crate::models::{DayOfWeek, DAYS_IN_WEEK};
use crate::notify::{Notification, Notifier};

/// Everything resolved about a run before any file is touched
#[derive(Debug, Clone)]
pub struct RunContext {
    pub date: NaiveDate,
    pub day: DayOfWeek,
    /// File name scheduled for `day`
    pub file_name: String,
    /// Full path of the file to archive
    pub source_path: PathBuf,
    pub archive_name: String,
    /// Temporary archive, written next to the source
    pub archive_path: PathBuf,
}

impl RunContext {
    /// Resolve the day's file from the schedule
    ///
    /// Fails with a configuration error when nothing is mapped for the
    /// weekday `date` falls on.
    pub fn resolve(settings: &Settings, date: NaiveDate) -> RotationResult<Self> {
        let day = DayOfWeek::from_date(date);
        let file_name = settings
            .files
            .file_for(day)
            .ok_or_else(|| RotationError::unmapped_day(day))?
            .to_string();

        let archive_name = archive_name_for(&file_name);

        Ok(Self {
            date,
            day,
            source_path: settings.source_directory.join(&file_name),
            archive_path: settings.source_directory.join(&archive_name),
            file_name,
            archive_name,
        })
    }
}

/// What a successful run did
#[derive(Debug, Clone)]
pub struct RunReport {
    pub day: DayOfWeek,
    pub file_name: String,
    /// Location of the archive on the file server
    pub transferred_to: PathBuf,
    /// Retention-window files that were removed
    pub deleted: Vec<PathBuf>,
}

/// Final result of a run
#[derive(Debug)]
pub enum RunOutcome {
    Success(RunReport),
    Failed {
        day: DayOfWeek,
        /// The first fatal error of the run
        error: RotationError,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success(_))
    }

    /// Process exit code: 0 on success, 1 on any fatal error
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success(_) => 0,
            RunOutcome::Failed { .. } => 1,
        }
    }

    pub fn error(&self) -> Option<&RotationError> {
        match self {
            RunOutcome::Success(_) => None,
            RunOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Runs the backup rotation workflow against explicit settings and sinks
pub struct RotationRunner<'a> {
    settings: &'a Settings,
    notifier: &'a dyn Notifier,
    log: &'a dyn RunLog,
    run_id: Uuid,
    /// Set once a log write has failed and been reported on stderr
    log_failed: Cell<bool>,
}

impl<'a> RotationRunner<'a> {
    pub fn new(settings: &'a Settings, notifier: &'a dyn Notifier, log: &'a dyn RunLog) -> Self {
        Self {
            settings,
            notifier,
            log,
            run_id: Uuid::new_v4(),
            log_failed: Cell::new(false),
        }
    }

    /// Identifier stamped on every log entry of this run
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Perform the whole workflow for `date`
    pub fn run(&self, date: NaiveDate) -> RunOutcome {
        let day = DayOfWeek::from_date(date);
        self.info(Step::Start, format!("Script started for {} backup process.", day));

        let ctx = match RunContext::resolve(self.settings, date) {
            Ok(ctx) => ctx,
            Err(error) => {
                let body = format!(
                    "No file configured for {}. Please check the config file.",
                    day
                );
                self.report(Step::Resolve, &error, Notification::process_failed(day, body));
                return self.finish(RunOutcome::Failed { day, error });
            }
        };

        let processed = self.process(&ctx);
        let cleaned = self.cleanup(&ctx);

        let outcome = match (processed, cleaned) {
            (Ok(report), Ok(())) => {
                self.notify(&Notification::succeeded(ctx.day, &ctx.file_name));
                RunOutcome::Success(report)
            }
            (Err(error), _) | (Ok(_), Err(error)) => RunOutcome::Failed { day, error },
        };

        self.finish(outcome)
    }

    /// Locate, compress, transfer, and rotate
    fn process(&self, ctx: &RunContext) -> RotationResult<RunReport> {
        if !ctx.source_path.exists() {
            let error = RotationError::MissingFile {
                path: ctx.source_path.clone(),
            };
            let body = format!(
                "File {} not found for {} at {}. Process aborted.",
                ctx.file_name,
                ctx.day,
                ctx.source_path.display()
            );
            self.report(Step::Locate, &error, Notification::process_failed(ctx.day, body));
            return Err(error);
        }

        self.info(
            Step::Locate,
            format!(
                "Found file {} for {}. Starting compression.",
                ctx.file_name, ctx.day
            ),
        );

        compress_file(&ctx.source_path, &ctx.archive_path, &ctx.file_name).map_err(|source| {
            self.processing_failed(
                ctx,
                Step::Compress,
                RotationError::Processing {
                    stage: ProcessingStage::Compress,
                    path: ctx.archive_path.clone(),
                    source,
                },
            )
        })?;
        self.info(
            Step::Compress,
            format!(
                "File {} compressed successfully into {}.",
                ctx.file_name, ctx.archive_name
            ),
        );

        let server_dir = &self.settings.file_server_directory;
        let transferred_to = transfer_archive(&ctx.archive_path, server_dir).map_err(|source| {
            self.processing_failed(
                ctx,
                Step::Transfer,
                RotationError::Processing {
                    stage: ProcessingStage::Transfer,
                    path: server_dir.clone(),
                    source,
                },
            )
        })?;
        self.info(
            Step::Transfer,
            format!(
                "File {} transferred to {}.",
                ctx.archive_name,
                server_dir.display()
            ),
        );

        let deleted = self.rotate(ctx)?;

        Ok(RunReport {
            day: ctx.day,
            file_name: ctx.file_name.clone(),
            transferred_to,
            deleted,
        })
    }

    /// Delete the files scheduled inside the retention window
    fn rotate(&self, ctx: &RunContext) -> RotationResult<Vec<PathBuf>> {
        let mut window = self.settings.days_to_delete;
        if window > DAYS_IN_WEEK {
            self.write(LogEntry::new(
                Level::Warn,
                self.run_id,
                Step::Retention,
                format!(
                    "Retention window of {} days is longer than a week; checking {} days.",
                    window, DAYS_IN_WEEK
                ),
            ));
            window = DAYS_IN_WEEK;
        }

        let candidates = retention_candidates(
            &self.settings.files,
            &self.settings.source_directory,
            ctx.day,
            window,
        );

        self.info(
            Step::Retention,
            format!(
                "Checking {} upcoming day(s) for stale backups ({} scheduled file(s)).",
                window,
                candidates.len()
            ),
        );

        delete_candidates(&candidates, |candidate| {
            self.info(
                Step::Retention,
                format!(
                    "Deleted backup file for {}: {}",
                    candidate.day,
                    candidate.path.display()
                ),
            );
        })
        .map_err(|error| {
            let (day, body) = match &error {
                RotationError::Deletion { day, path, source } => (
                    *day,
                    format!(
                        "Failed to delete backup file {}. Error: {}",
                        path.display(),
                        source
                    ),
                ),
                other => (ctx.day, other.to_string()),
            };
            self.report(Step::Retention, &error, Notification::deletion_failed(day, body));
            error
        })
    }

    /// Remove the temporary archive if it exists
    fn cleanup(&self, ctx: &RunContext) -> RotationResult<()> {
        if !ctx.archive_path.exists() {
            return Ok(());
        }

        match fs::remove_file(&ctx.archive_path) {
            Ok(()) => {
                self.info(Step::Cleanup, "Temporary zip file removed successfully.");
                Ok(())
            }
            Err(source) => {
                let error = RotationError::Cleanup {
                    path: ctx.archive_path.clone(),
                    source,
                };
                let body = error.to_string();
                self.report(Step::Cleanup, &error, Notification::cleanup_failed(ctx.day, body));
                Err(error)
            }
        }
    }

    fn processing_failed(&self, ctx: &RunContext, step: Step, error: RotationError) -> RotationError {
        let body = format!(
            "An error occurred during the process: {}\n\n{}",
            error,
            error.chain()
        );
        self.report(step, &error, Notification::process_failed(ctx.day, body));
        error
    }

    /// Log a fatal error and notify the operator about it
    fn report(&self, step: Step, error: &RotationError, notification: Notification) {
        self.write(
            LogEntry::new(Level::Error, self.run_id, step, error.to_string())
                .with_detail(error.chain()),
        );
        self.notify(&notification);
    }

    /// Send a notification; failures are logged and otherwise ignored
    fn notify(&self, notification: &Notification) {
        match self.notifier.send(notification) {
            Ok(()) => self.info(Step::Notify, "Notification email sent successfully."),
            Err(e) => self.write(LogEntry::new(
                Level::Error,
                self.run_id,
                Step::Notify,
                format!("Failed to send notification email: {}", e),
            )),
        }
    }

    fn finish(&self, outcome: RunOutcome) -> RunOutcome {
        match &outcome {
            RunOutcome::Success(report) => self.info(
                Step::Finish,
                format!(
                    "Backup run finished for {}: {} deleted file(s).",
                    report.day,
                    report.deleted.len()
                ),
            ),
            RunOutcome::Failed { day, error } => self.write(LogEntry::new(
                Level::Error,
                self.run_id,
                Step::Finish,
                format!("Backup run failed for {}: {}", day, error),
            )),
        }
        outcome
    }

    fn info(&self, step: Step, message: impl Into<String>) {
        self.write(LogEntry::new(Level::Info, self.run_id, step, message));
    }

    fn write(&self, entry: LogEntry) {
        if let Err(e) = self.log.record(entry) {
            if !self.log_failed.replace(true) {
                eprintln!("Warning: failed to write run log: {}", e);
            }
        }
    }
}
