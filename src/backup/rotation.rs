//! Retention-window deletion
//!
//! After today's file is archived, the files scheduled for the next N
//! weekdays are removed from the source directory so the following days
//! start from a clean slate.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RotationError, RotationResult};
use crate::models::{get_next_days, DayOfWeek, FileSchedule, DAYS_IN_WEEK};

/// A scheduled file inside the retention window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionCandidate {
    /// Weekday the file belongs to
    pub day: DayOfWeek,
    /// Where the file would live in the source directory
    pub path: PathBuf,
}

impl RetentionCandidate {
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Files mapped to the `window` weekdays following `today`, in visit order
///
/// Weekdays with no mapped file are skipped. A window longer than a week
/// only revisits the same weekdays, so it is capped at seven days, and a
/// path shared by several weekdays is listed once.
pub fn retention_candidates(
    schedule: &FileSchedule,
    source_dir: &Path,
    today: DayOfWeek,
    window: usize,
) -> Vec<RetentionCandidate> {
    let mut candidates: Vec<RetentionCandidate> = Vec::new();

    for day in get_next_days(today, window.min(DAYS_IN_WEEK)) {
        let Some(path) = schedule.path_for(day, source_dir) else {
            continue;
        };
        if candidates.iter().any(|c| c.path == path) {
            continue;
        }
        candidates.push(RetentionCandidate { day, path });
    }

    candidates
}

/// Delete every existing candidate, in order
///
/// Stops at the first failure and leaves the remaining candidates untouched.
/// `on_deleted` is called after each successful removal. Returns the paths
/// that were removed.
pub fn delete_candidates<F>(
    candidates: &[RetentionCandidate],
    mut on_deleted: F,
) -> RotationResult<Vec<PathBuf>>
where
    F: FnMut(&RetentionCandidate),
{
    let mut deleted = Vec::new();

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }

        fs::remove_file(&candidate.path).map_err(|source| RotationError::Deletion {
            day: candidate.day,
            path: candidate.path.clone(),
            source,
        })?;

        on_deleted(candidate);
        deleted.push(candidate.path.clone());
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_week() -> FileSchedule {
        DayOfWeek::ALL.iter().fold(FileSchedule::new(), |schedule, day| {
            schedule.with(*day, format!("{}.bak", day.name().to_lowercase()))
        })
    }

    #[test]
    fn test_candidates_follow_canonical_order() {
        let candidates = retention_candidates(
            &full_week(),
            Path::new("/data"),
            DayOfWeek::Friday,
            3,
        );

        let days: Vec<DayOfWeek> = candidates.iter().map(|c| c.day).collect();
        assert_eq!(
            days,
            vec![DayOfWeek::Saturday, DayOfWeek::Sunday, DayOfWeek::Monday]
        );
        assert_eq!(candidates[0].path, PathBuf::from("/data/saturday.bak"));
    }

    #[test]
    fn test_unmapped_days_skipped() {
        let schedule = FileSchedule::new()
            .with(DayOfWeek::Monday, "mon.bak")
            .with(DayOfWeek::Wednesday, "wed.bak");

        let candidates =
            retention_candidates(&schedule, Path::new("/data"), DayOfWeek::Sunday, 2);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].day, DayOfWeek::Monday);
    }

    #[test]
    fn test_window_longer_than_a_week_is_capped() {
        let candidates = retention_candidates(
            &full_week(),
            Path::new("/data"),
            DayOfWeek::Sunday,
            usize::MAX,
        );

        assert_eq!(candidates.len(), 7);
        let days: Vec<DayOfWeek> = candidates.iter().map(|c| c.day).collect();
        assert_eq!(days[0], DayOfWeek::Monday);
        assert_eq!(days[6], DayOfWeek::Sunday);
        assert_eq!(
            retention_candidates(&full_week(), Path::new("/data"), DayOfWeek::Sunday, 9),
            candidates
        );
    }

    #[test]
    fn test_shared_file_listed_once() {
        let schedule = FileSchedule::new()
            .with(DayOfWeek::Monday, "weekday.bak")
            .with(DayOfWeek::Tuesday, "weekday.bak");

        let candidates =
            retention_candidates(&schedule, Path::new("/data"), DayOfWeek::Sunday, 3);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].day, DayOfWeek::Monday);
    }

    #[test]
    fn test_delete_existing_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tuesday.bak"), b"old").unwrap();
        fs::write(temp.path().join("thursday.bak"), b"old").unwrap();

        let candidates =
            retention_candidates(&full_week(), temp.path(), DayOfWeek::Monday, 2);

        let mut seen = Vec::new();
        let deleted = delete_candidates(&candidates, |c| seen.push(c.day)).unwrap();

        assert_eq!(deleted, vec![temp.path().join("tuesday.bak")]);
        assert_eq!(seen, vec![DayOfWeek::Tuesday]);
        assert!(temp.path().join("thursday.bak").exists());
    }

    #[test]
    fn test_failure_stops_iteration() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be removed with remove_file
        fs::create_dir(temp.path().join("tuesday.bak")).unwrap();
        fs::write(temp.path().join("wednesday.bak"), b"old").unwrap();

        let candidates =
            retention_candidates(&full_week(), temp.path(), DayOfWeek::Monday, 2);
        let err = delete_candidates(&candidates, |_| {}).unwrap_err();

        match err {
            RotationError::Deletion { day, path, .. } => {
                assert_eq!(day, DayOfWeek::Tuesday);
                assert_eq!(path, temp.path().join("tuesday.bak"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(temp.path().join("wednesday.bak").exists());
    }
}
