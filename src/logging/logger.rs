//! Daily log file writer
//!
//! Appends run log entries to `<log_dir>/<year>/<Month>/<YYYY-MM-DD>.log`.
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::entry::LogEntry;
use super::RunLog;
use crate::config::daily_log_file;
use crate::error::{RotationError, RotationResult};

/// Writes run log entries to the log file for one calendar day
///
/// The file uses a line-delimited JSON format (JSONL) where each line is a
/// complete JSON object representing one entry.
pub struct DailyLogFile {
    /// Path to the day's log file
    log_path: PathBuf,
}

impl DailyLogFile {
    /// Create a logger for `date` under `log_dir`
    ///
    /// Directories are created lazily on the first write.
    pub fn new(log_dir: &Path, date: NaiveDate) -> Self {
        Self {
            log_path: daily_log_file(log_dir, date),
        }
    }

    /// Append an entry
    pub fn append(&self, entry: &LogEntry) -> RotationResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RotationError::Io(format!("Failed to create log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| RotationError::Io(format!("Failed to open log file: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| RotationError::Json(format!("Failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| RotationError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| RotationError::Io(format!("Failed to flush log file: {}", e)))?;

        Ok(())
    }

    /// Read all entries from the day's log
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> RotationResult<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| RotationError::Io(format!("Failed to open log file: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                RotationError::Io(format!("Failed to read log line {}: {}", line_num + 1, e))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line).map_err(|e| {
                RotationError::Json(format!(
                    "Failed to parse log entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> RotationResult<Vec<LogEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

impl RunLog for DailyLogFile {
    fn record(&self, entry: LogEntry) -> RotationResult<()> {
        self.append(&entry)
    }
}
