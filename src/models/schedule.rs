//! Weekday-to-file schedule
//!
//! Maps each weekday to the name of the backup file produced on that day.
//! A weekday may be absent or explicitly `null`; both mean nothing is
//! scheduled for it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::weekday::DayOfWeek;
use crate::error::{RotationError, RotationResult};

/// The configured backup file name for each weekday
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSchedule {
    files: BTreeMap<DayOfWeek, Option<String>>,
}

impl FileSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to map a weekday to a file name
    pub fn with(mut self, day: DayOfWeek, file_name: impl Into<String>) -> Self {
        self.files.insert(day, Some(file_name.into()));
        self
    }

    /// File name scheduled for a weekday, if any
    pub fn file_for(&self, day: DayOfWeek) -> Option<&str> {
        self.files.get(&day).and_then(|name| name.as_deref())
    }

    /// Path of a weekday's file inside a directory
    pub fn path_for(&self, day: DayOfWeek, dir: &Path) -> Option<PathBuf> {
        self.file_for(day).map(|name| dir.join(name))
    }

    /// Iterate over mapped weekdays in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &str)> {
        self.files
            .iter()
            .filter_map(|(day, name)| name.as_deref().map(|n| (*day, n)))
    }

    /// Number of weekdays with a file mapped
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every mapped name is a plain, non-empty file name
    pub fn validate(&self) -> RotationResult<()> {
        for (day, name) in &self.files {
            let Some(name) = name else { continue };

            if name.trim().is_empty() {
                return Err(RotationError::Configuration(format!(
                    "File name for {} cannot be empty",
                    day
                )));
            }

            if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
                return Err(RotationError::Configuration(format!(
                    "File name for {} must be a bare file name, got '{}'",
                    day, name
                )));
            }
        }

        Ok(())
    }
}
