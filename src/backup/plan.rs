//! Dry-run planning
//!
//! Describes what a run on a given date would do, looking at the filesystem
//! but never changing it.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::archive::archive_name_for;
use super::rotation::{retention_candidates, RetentionCandidate};
use crate::config::Settings;
use crate::models::DayOfWeek;

/// The source file a run would archive
#[derive(Debug, Clone)]
pub struct PlannedSource {
    pub file_name: String,
    pub path: PathBuf,
    pub exists: bool,
    pub archive_name: String,
    pub destination: PathBuf,
}

/// One retention-window day and the file it would remove
#[derive(Debug, Clone)]
pub struct PlannedDeletion {
    pub candidate: RetentionCandidate,
    pub exists: bool,
}

/// Everything a run on `date` would touch
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub date: NaiveDate,
    pub day: DayOfWeek,
    /// `None` when nothing is scheduled for the day
    pub source: Option<PlannedSource>,
    pub deletions: Vec<PlannedDeletion>,
}

impl RunPlan {
    pub fn build(settings: &Settings, date: NaiveDate) -> Self {
        let day = DayOfWeek::from_date(date);

        let source = settings.files.file_for(day).map(|file_name| {
            let path = settings.source_directory.join(file_name);
            let archive_name = archive_name_for(file_name);
            PlannedSource {
                file_name: file_name.to_string(),
                exists: path.exists(),
                path,
                destination: settings.file_server_directory.join(&archive_name),
                archive_name,
            }
        });

        let deletions = retention_candidates(
            &settings.files,
            &settings.source_directory,
            day,
            settings.days_to_delete,
        )
        .into_iter()
        .map(|candidate| PlannedDeletion {
            exists: candidate.exists(),
            candidate,
        })
        .collect();

        Self {
            date,
            day,
            source,
            deletions,
        }
    }

    /// Whether a run would get past the resolve and locate steps
    pub fn is_runnable(&self) -> bool {
        self.source.as_ref().map_or(false, |s| s.exists)
    }

    /// Files a run would actually delete
    pub fn pending_deletions(&self) -> impl Iterator<Item = &PlannedDeletion> {
        self.deletions.iter().filter(|d| d.exists)
    }
}
