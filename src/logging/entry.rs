//! Run log entry data structures
//!
//! Defines the levels, workflow steps, and the entry format written to the
//! daily log file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// Workflow step that produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Start,
    Resolve,
    Locate,
    Compress,
    Transfer,
    Retention,
    Cleanup,
    Notify,
    Finish,
}

/// A single run log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was written (UTC)
    pub timestamp: DateTime<Utc>,

    pub level: Level,

    /// Identifies the run, so overlapping days can be told apart
    pub run_id: Uuid,

    pub step: Step,

    pub message: String,

    /// Error chain or other multi-line context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(level: Level, run_id: Uuid, step: Step, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            run_id,
            step,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach extra detail to the entry
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// One-line human readable form, as shown on stderr
    pub fn format_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.level,
            self.message
        )
    }
}
