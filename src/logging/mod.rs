//! Run logging for backup-rotate
//!
//! Every workflow step records a structured entry through the [`RunLog`]
//! trait. The production sink is [`DailyLogFile`], which writes JSON lines
//! into a per-day file under a `<year>/<Month>` hierarchy.
//!
//! # Example
//!
//! ```rust,ignore
//! use backup_rotate::logging::{DailyLogFile, LogEntry, Level, Step};
//!
//! let log = DailyLogFile::new(&settings.log_directory, today);
//! log.record(LogEntry::new(Level::Info, run_id, Step::Start, "Logger initialized"))?;
//! ```

mod entry;
mod logger;

use std::cell::RefCell;

pub use entry::{Level, LogEntry, Step};
pub use logger::DailyLogFile;

use crate::error::RotationResult;

/// Destination for run log entries
pub trait RunLog {
    /// Record a single entry
    fn record(&self, entry: LogEntry) -> RotationResult<()>;
}

/// Keeps entries in memory (useful for testing)
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry recorded so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Entries recorded at a given level
    pub fn at_level(&self, level: Level) -> Vec<LogEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }
}

impl RunLog for MemoryLog {
    fn record(&self, entry: LogEntry) -> RotationResult<()> {
        self.entries.borrow_mut().push(entry);
        Ok(())
    }
}
