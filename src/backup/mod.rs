//! Backup rotation for backup-rotate
//!
//! Archives the file scheduled for today and rotates out the files
//! scheduled for the days ahead.
//!
//! # Architecture
//!
//! - `archive`: zip compression and the copy to the file server
//! - `rotation`: retention-window candidates and their deletion
//! - `plan`: a read-only preview of what a run would do
//! - `runner`: the `RotationRunner` that ties the steps together
//!
//! # Workflow
//!
//! 1. Resolve the weekday and its scheduled file
//! 2. Check the file exists in the source directory
//! 3. Compress it into `<stem>.zip` next to the source
//! 4. Copy the archive into the file-server directory
//! 5. Delete the files scheduled for the next `days_to_delete` weekdays
//! 6. Remove the temporary archive
//! 7. Email the result
//!
//! # Example
//!
//! ```rust,ignore
//! use backup_rotate::backup::RotationRunner;
//! use backup_rotate::logging::DailyLogFile;
//! use backup_rotate::notify::SmtpNotifier;
//!
//! let log = DailyLogFile::new(&settings.log_directory, today);
//! let notifier = SmtpNotifier::new(settings.email_settings.clone());
//! let outcome = RotationRunner::new(&settings, &notifier, &log).run(today);
//! std::process::exit(outcome.exit_code());
//! ```

mod archive;
mod plan;
mod rotation;
mod runner;

pub use archive::{archive_name_for, compress_file, transfer_archive};
pub use plan::{PlannedDeletion, PlannedSource, RunPlan};
pub use rotation::{delete_candidates, retention_candidates, RetentionCandidate};
pub use runner::{RotationRunner, RunContext, RunOutcome, RunReport};
